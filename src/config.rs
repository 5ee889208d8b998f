use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;
use crate::parsers::parse_query_urls;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_SUBJECT: &str = "SHOE ALERT";
pub const DEFAULT_TEMPLATE: &str = "email.tmpl";

/// Settings as they arrive from the environment, before any parsing.
///
/// Required keys that are absent become empty strings; only the threshold is
/// checked for content.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    query_url: String,
    threshold_price: String,
    recipient_email: String,
    from_gmail: String,
    from_gmail_app_password: String,
    smtp_host: Option<String>,
    smtp_port: Option<String>,
    email_subject: Option<String>,
    email_template: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub query_urls: Vec<String>,
    pub threshold_price: f64,
    pub recipient_email: String,
    pub from_address: String,
    pub from_password: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub subject: String,
    pub template_path: PathBuf,
}

impl Config {
    /// Loads `.env` from the working directory, then reads the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(".env")
    }

    pub fn load_from(env_file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let env_file = env_file.as_ref();
        dotenvy::from_path(env_file).map_err(|source| ConfigError::EnvFile {
            path: env_file.to_path_buf(),
            source,
        })?;

        let source = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let config = Self::from_source(source)?;
        info!(
            "Loaded {} queries with threshold {:.2}",
            config.query_urls.len(),
            config.threshold_price
        );
        Ok(config)
    }

    /// Builds the run configuration from any `config` source with lowercase keys.
    pub fn from_source(source: config::Config) -> Result<Self, ConfigError> {
        let raw: RawSettings = source.try_deserialize()?;

        let threshold_price = parse_threshold(&raw.threshold_price)?;

        let query_urls = parse_query_urls(&raw.query_url);
        if let Some(position) = query_urls.iter().position(|url| url.is_empty()) {
            return Err(ConfigError::EmptyQueryUrl { position });
        }

        let smtp_port = match raw.smtp_port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_SMTP_PORT,
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidPort {
                value: value.to_string(),
                source,
            })?,
        };

        Ok(Config {
            query_urls,
            threshold_price,
            recipient_email: raw.recipient_email,
            from_address: raw.from_gmail,
            from_password: raw.from_gmail_app_password,
            smtp_host: non_empty_or(raw.smtp_host, DEFAULT_SMTP_HOST),
            smtp_port,
            subject: non_empty_or(raw.email_subject, DEFAULT_SUBJECT),
            template_path: PathBuf::from(non_empty_or(raw.email_template, DEFAULT_TEMPLATE)),
        })
    }
}

fn parse_threshold(value: &str) -> Result<f64, ConfigError> {
    let threshold: f64 = value
        .parse()
        .map_err(|source| ConfigError::InvalidThreshold {
            value: value.to_string(),
            source,
        })?;

    if !threshold.is_finite() {
        return Err(ConfigError::NonFiniteThreshold {
            value: value.to_string(),
        });
    }
    Ok(threshold)
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("query_urls", &self.query_urls)
            .field("threshold_price", &self.threshold_price)
            .field("recipient_email", &self.recipient_email)
            .field("from_address", &self.from_address)
            .field("from_password", &"<redacted>")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("subject", &self.subject)
            .field("template_path", &self.template_path)
            .finish()
    }
}
