pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod parsers;
pub mod report;
pub mod search;
