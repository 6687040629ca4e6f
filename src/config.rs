mod error;
mod serde;
mod toml;

pub use self::{error::ConfigError, serde::SerializableConfig, toml::read_config};
use crate::{credential::Credential, http_client::HttpClientError};
use url::Url;

/// A client configuration.
#[derive(Clone)]
pub struct Config {
    base_url: Url,
    api_token: String,
}

impl Config {
    /// Creates a configuration.
    pub const fn new(base_url: Url, api_token: String) -> Self {
        Self {
            base_url,
            api_token,
        }
    }

    /// Returns a base URL of a service.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds a credential from an API token.
    pub fn credential(&self) -> Result<Credential, HttpClientError> {
        Credential::new(&self.api_token)
    }
}

/// Compiles a configuration.
pub fn compile_config(config: SerializableConfig) -> Result<Config, ConfigError> {
    Ok(Config::new(
        config
            .base_url
            .ok_or(ConfigError::MissingField("base_url"))?,
        config
            .api_token
            .ok_or(ConfigError::MissingField("api_token"))?,
    ))
}
