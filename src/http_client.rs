mod bare;
mod error;
mod reqwest;
#[cfg(test)]
mod stub;

pub use self::{
    bare::{BareBody, BareConnection, BareHttpClient, BareRequest, BareResponse},
    error::HttpClientError,
    reqwest::ReqwestHttpClient,
};
#[cfg(test)]
pub use self::stub::{StubHttpClient, build_broken_stub_response, build_stub_response};
use crate::{
    credential::Credential,
    extraction::{Extraction, Payload},
    request::RequestBody,
};
use http::{HeaderMap, Method, header::AUTHORIZATION};
use log::{debug, trace};
use url::Url;

/// An HTTP client authenticated with a static credential.
///
/// Every call opens its own connection and releases it before returning.
pub struct HttpClient {
    client: Box<dyn BareHttpClient>,
    base_url: Url,
    credential: Credential,
}

impl HttpClient {
    /// Creates an HTTP client.
    pub fn new(
        client: impl BareHttpClient + 'static,
        base_url: Url,
        credential: Credential,
    ) -> Self {
        Self {
            client: Box::new(client),
            base_url,
            credential,
        }
    }

    /// Sends a `GET` request and returns a response body as text.
    pub async fn get(&self, path: &str) -> Result<String, HttpClientError> {
        debug!("GET {path}");

        let text = self
            .execute(Method::GET, path, RequestBody::Empty, Extraction::Text)
            .await?
            .into_text()?;

        trace!("response: {text}");

        Ok(text)
    }

    /// Sends a `GET` request and returns a response body as bytes.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, HttpClientError> {
        debug!("GET {path}");

        self.execute(Method::GET, path, RequestBody::Empty, Extraction::Bytes)
            .await?
            .into_bytes()
    }

    /// Sends a `POST` request with a JSON payload and returns a response body as text.
    pub async fn post(&self, path: &str, payload: &str) -> Result<String, HttpClientError> {
        debug!("POST {path}: {payload}");

        let text = self
            .execute(
                Method::POST,
                path,
                RequestBody::json(payload.into()),
                Extraction::Text,
            )
            .await?
            .into_text()?;

        trace!("response: {text}");

        Ok(text)
    }

    /// Sends a `POST` request with a JSON payload and a file as a multipart body.
    ///
    /// A content type of the file is guessed from its name. A response body is
    /// read and discarded.
    pub async fn post_multipart_file(
        &self,
        path: &str,
        file_name: &str,
        file: Vec<u8>,
        payload: &str,
    ) -> Result<(), HttpClientError> {
        debug!("POST {path}: {payload} ({file_name})");

        self.execute(
            Method::POST,
            path,
            RequestBody::multipart(payload.into(), file_name, file),
            Extraction::Text,
        )
        .await?;

        Ok(())
    }

    /// Sends a `DELETE` request and returns a response body as text.
    pub async fn delete(&self, path: &str) -> Result<String, HttpClientError> {
        debug!("DELETE {path}");

        self.execute(Method::DELETE, path, RequestBody::Empty, Extraction::Text)
            .await?
            .into_text()
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        extraction: Extraction,
    ) -> Result<Payload, HttpClientError> {
        let request = BareRequest {
            method: method.clone(),
            url: self.resolve(path)?,
            headers: self.headers(),
            body,
        };

        let mut connection = Connection::new(self.client.connect()?);
        let response = connection.send(request).await?;

        // Error bodies are not read.
        if response.status.as_u16() >= 400 {
            return Err(HttpClientError::Communication {
                method,
                target: path.into(),
                status: response.status,
                reason: response.reason.into(),
            });
        }

        extraction.extract(response.body.read().await?)
    }

    fn resolve(&self, path: &str) -> Result<Url, HttpClientError> {
        Ok(Url::parse(&format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        ))?)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.credential.authorization().clone());
        headers
    }
}

/// A connection released on drop.
struct Connection(Box<dyn BareConnection>);

impl Connection {
    const fn new(connection: Box<dyn BareConnection>) -> Self {
        Self(connection)
    }

    async fn send(&mut self, request: BareRequest) -> Result<BareResponse, HttpClientError> {
        self.0.send(request).await
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.0.release();
    }
}
