use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings file {}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("failed to read settings from the environment")]
    Source(#[from] config::ConfigError),

    #[error("THRESHOLD_PRICE {value:?} is not a number")]
    InvalidThreshold {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("THRESHOLD_PRICE {value:?} must be a finite number")]
    NonFiniteThreshold { value: String },

    #[error("SMTP_PORT {value:?} is not a valid port")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("QUERY_URL entry {position} is empty")]
    EmptyQueryUrl { position: usize },
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode search response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to load email template {}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("failed to render email body")]
    Render(#[source] tera::Error),

    #[error("invalid email address {address:?}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build email message")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP delivery failed")]
    Transport(#[from] lettre::transport::smtp::Error),
}
