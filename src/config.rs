//!
//! ## Configuration for sendy-client
//!
//! The `Config` struct carries the three values every Sendy call needs (list ID,
//! installation URL and API key) plus optional proxy and TLS settings.
//!
//! It can be assembled with the builder or deserialized from the host
//! application's settings, where the keys are `listId`, `installationUrl` and
//! `apiKey`.
//!

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;

use crate::error::SendyError;

/// Every request gives up after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Custom TLS settings for the Sendy client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsSettings {
    /// Path to an extra PEM root certificate, for self-hosted installations
    /// behind a private CA
    pub ca_path: String,
}

/// Proxy configuration for the Sendy client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfig {
    /// Proxy server URL
    pub proxy_url: String,

    /// Optional username for proxy authentication
    #[serde(default)]
    pub username: Option<String>,

    /// Optional password for proxy authentication
    #[serde(default)]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Proxy URL with the credentials, if any, embedded as user info
    pub fn url(&self) -> Result<Url, SendyError> {
        let mut url = Url::from_str(&self.proxy_url)?;
        if let Some(ref username) = self.username {
            url.set_username(username)
                .map_err(|_| SendyError::HttpError(format!("proxy URL {} cannot carry credentials", self.proxy_url)))?;
        }
        if let Some(ref password) = self.password {
            url.set_password(Some(password))
                .map_err(|_| SendyError::HttpError(format!("proxy URL {} cannot carry credentials", self.proxy_url)))?;
        }
        Ok(url)
    }
}

/// Configuration for Sendy client
#[derive(TypedBuilder, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Identifier of the default mailing list
    #[builder(default, setter(into))]
    #[serde(default)]
    pub list_id: String,

    /// Base URL of the Sendy installation
    #[builder(default, setter(into))]
    #[serde(default)]
    pub installation_url: String,

    /// API key from the Sendy settings page
    #[builder(
        default = Secret::new(String::new()),
        setter(transform = |key: &str| Secret::new(key.to_owned()))
    )]
    #[serde(default = "empty_secret")]
    pub api_key: Secret<String>,

    /// Proxy configuration
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub proxy_config: Option<ProxyConfig>,

    /// Custom TLS settings
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub tls_settings: Option<TlsSettings>,
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

impl Config {
    /// Checks that the required values are present, reporting the first
    /// missing one in the order `listId`, `installationUrl`, `apiKey`.
    ///
    /// # Errors
    ///
    /// `SendyError::ConfigError` naming the missing field.
    pub fn validate(&self) -> Result<(), SendyError> {
        if self.list_id.is_empty() {
            return Err(SendyError::ConfigError("listId"));
        }
        if self.installation_url.is_empty() {
            return Err(SendyError::ConfigError("installationUrl"));
        }
        if self.api_key.expose_secret().is_empty() {
            return Err(SendyError::ConfigError("apiKey"));
        }
        Ok(())
    }
}
