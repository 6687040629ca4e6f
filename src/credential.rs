use crate::http_client::HttpClientError;
use core::fmt::{self, Debug, Formatter};
use http::HeaderValue;

const SCHEME: &str = "Basic";

/// An API credential.
///
/// A token is used verbatim. It must be encoded already by a caller.
#[derive(Clone, Eq, PartialEq)]
pub struct Credential {
    authorization: HeaderValue,
}

impl Credential {
    /// Creates a credential from an API token.
    pub fn new(token: &str) -> Result<Self, HttpClientError> {
        let mut authorization = HeaderValue::from_str(&format!("{SCHEME} {token}"))?;
        authorization.set_sensitive(true);

        Ok(Self { authorization })
    }

    /// Returns a value of an `Authorization` header.
    pub const fn authorization(&self) -> &HeaderValue {
        &self.authorization
    }
}

impl Debug for Credential {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Credential").finish_non_exhaustive()
    }
}
