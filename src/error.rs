//! Error handling for the Sendy API client.
//!
//! Only local problems surface as `Err` from the public operations: a missing
//! configuration value or a missing campaign field. Anything that goes wrong on
//! the wire is rendered with `Display` and handed back as the response text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendyError {
    #[error("[{0}] is not set")]
    ConfigError(&'static str),

    #[error("Campaign field [{0}] is not set")]
    ValidationError(&'static str),

    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    ParseError(#[from] url::ParseError),

    #[cfg(feature = "async")]
    #[error("HTTP error: {0}")]
    HTTPError(#[from] reqwest::Error),

    #[cfg(feature = "sync")]
    #[error("HTTP error: {0}")]
    HTTPError(#[from] attohttpc::Error),
}
