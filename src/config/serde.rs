use serde::Deserialize;
use url::Url;

/// A serializable client configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableConfig {
    /// A base URL of a service.
    pub base_url: Option<Url>,
    /// An API token.
    pub api_token: Option<String>,
}

impl SerializableConfig {
    /// Overrides fields with ones present in another configuration.
    pub fn merge(&mut self, other: Self) {
        if let Some(base_url) = other.base_url {
            self.base_url = Some(base_url);
        }

        if let Some(api_token) = other.api_token {
            self.api_token = Some(api_token);
        }
    }
}
