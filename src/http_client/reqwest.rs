use super::{
    BareBody, BareConnection, BareHttpClient, BareRequest, BareResponse, HttpClientError,
};
use crate::request::RequestBody;
use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use hyper::ext::ReasonPhrase;
use log::trace;
use reqwest::{
    Client, ClientBuilder, Response,
    multipart::{Form, Part},
    redirect::Policy,
};

/// An HTTP client based on [`reqwest`].
///
/// Each connection owns a client whose idle connections are never pooled.
/// Redirects are not followed and proxies in environment variables are ignored.
#[derive(Debug, Default)]
pub struct ReqwestHttpClient {}

impl ReqwestHttpClient {
    /// Creates an HTTP client.
    pub const fn new() -> Self {
        Self {}
    }
}

impl BareHttpClient for ReqwestHttpClient {
    fn connect(&self) -> Result<Box<dyn BareConnection>, HttpClientError> {
        Ok(Box::new(ReqwestConnection {
            client: Some(
                ClientBuilder::new()
                    .no_proxy()
                    .redirect(Policy::none())
                    .pool_max_idle_per_host(0)
                    .tcp_keepalive(None)
                    .build()?,
            ),
        }))
    }
}

struct ReqwestConnection {
    client: Option<Client>,
}

#[async_trait]
impl BareConnection for ReqwestConnection {
    async fn send(&mut self, request: BareRequest) -> Result<BareResponse, HttpClientError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| HttpClientError::Transport("connection released".into()))?;

        trace!("sending a {} request to {}", &request.method, &request.url);

        let builder = client
            .request(request.method, request.url.clone())
            .headers(request.headers);
        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Text {
                content,
                content_type,
            } => builder
                .header(CONTENT_TYPE, content_type.as_ref())
                .body(content),
            RequestBody::Multipart { payload, file } => builder.multipart(
                Form::new().text("payload", payload).part(
                    "file",
                    Part::bytes(file.bytes)
                        .file_name(file.name)
                        .mime_str(file.content_type.as_ref())?,
                ),
            ),
        };
        let response = builder.send().await?;

        trace!("got {} response from {}", response.status(), &request.url);

        Ok(BareResponse {
            status: response.status(),
            reason: reason(&response),
            body: Box::new(ReqwestBody(response)),
        })
    }

    fn release(&mut self) {
        trace!("releasing a connection");
        self.client = None;
    }
}

// A non-canonical reason phrase is kept in response extensions.
fn reason(response: &Response) -> String {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
        .or_else(|| response.status().canonical_reason().map(From::from))
        .unwrap_or_default()
}

struct ReqwestBody(Response);

#[async_trait]
impl BareBody for ReqwestBody {
    async fn read(self: Box<Self>) -> Result<Vec<u8>, HttpClientError> {
        Ok(self.0.bytes().await?.to_vec())
    }
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string().into())
    }
}
