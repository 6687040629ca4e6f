use super::HttpClientError;
use crate::request::RequestBody;
use async_trait::async_trait;
use core::fmt::{self, Debug, Formatter};
use http::{HeaderMap, Method, StatusCode};
use url::Url;

/// A bare HTTP client which opens one connection per exchange.
pub trait BareHttpClient: Send + Sync {
    /// Opens a connection.
    fn connect(&self) -> Result<Box<dyn BareConnection>, HttpClientError>;
}

/// A connection for a single request.
#[async_trait]
pub trait BareConnection: Send {
    /// Sends a request.
    async fn send(&mut self, request: BareRequest) -> Result<BareResponse, HttpClientError>;

    /// Releases resources held by the connection.
    fn release(&mut self);
}

/// A response body not read yet.
#[async_trait]
pub trait BareBody: Send {
    /// Reads a whole body.
    async fn read(self: Box<Self>) -> Result<Vec<u8>, HttpClientError>;
}

/// A bare request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BareRequest {
    /// A method.
    pub method: Method,
    /// A URL.
    pub url: Url,
    /// Headers.
    pub headers: HeaderMap,
    /// A body.
    pub body: RequestBody,
}

/// A bare response.
pub struct BareResponse {
    /// A status.
    pub status: StatusCode,
    /// A reason phrase.
    pub reason: String,
    /// A body.
    pub body: Box<dyn BareBody>,
}

impl Debug for BareResponse {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BareResponse")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}
