use crate::http_client::{
    BareBody, BareConnection, BareHttpClient, BareRequest, BareResponse, HttpClientError,
};
use alloc::sync::Arc;
use async_trait::async_trait;
use core::{
    future::pending,
    sync::atomic::{AtomicUsize, Ordering},
};
use http::StatusCode;
use tokio::sync::Mutex;

type StubResult = Result<StubResponse, HttpClientError>;

#[derive(Debug)]
pub struct StubResponse {
    status: StatusCode,
    reason: String,
    body: Result<Vec<u8>, HttpClientError>,
}

pub fn build_stub_response(status: StatusCode, body: impl Into<Vec<u8>>) -> StubResult {
    Ok(StubResponse {
        status,
        reason: status.canonical_reason().unwrap_or_default().into(),
        body: Ok(body.into()),
    })
}

pub fn build_broken_stub_response(status: StatusCode, error: HttpClientError) -> StubResult {
    Ok(StubResponse {
        status,
        reason: status.canonical_reason().unwrap_or_default().into(),
        body: Err(error),
    })
}

#[derive(Debug, Default)]
pub struct StubLog {
    requests: Mutex<Vec<BareRequest>>,
    connections: AtomicUsize,
    releases: AtomicUsize,
    reads: AtomicUsize,
}

impl StubLog {
    pub async fn requests(&self) -> Vec<BareRequest> {
        self.requests.lock().await.clone()
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct StubHttpClient {
    results: Arc<Mutex<Vec<StubResult>>>,
    log: Arc<StubLog>,
    pending: bool,
}

impl StubHttpClient {
    pub fn new(mut results: Vec<StubResult>) -> Self {
        results.reverse();

        Self {
            results: Arc::new(results.into()),
            log: Default::default(),
            pending: false,
        }
    }

    /// Creates a client whose requests never complete.
    pub fn pending() -> Self {
        Self {
            pending: true,
            ..Self::new(vec![])
        }
    }

    pub fn log(&self) -> Arc<StubLog> {
        self.log.clone()
    }
}

impl BareHttpClient for StubHttpClient {
    fn connect(&self) -> Result<Box<dyn BareConnection>, HttpClientError> {
        self.log.connections.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(StubConnection {
            results: self.results.clone(),
            log: self.log.clone(),
            pending: self.pending,
        }))
    }
}

struct StubConnection {
    results: Arc<Mutex<Vec<StubResult>>>,
    log: Arc<StubLog>,
    pending: bool,
}

#[async_trait]
impl BareConnection for StubConnection {
    async fn send(&mut self, request: BareRequest) -> Result<BareResponse, HttpClientError> {
        self.log.requests.lock().await.push(request);

        if self.pending {
            pending::<()>().await;
        }

        let response = self.results.lock().await.pop().expect("stub response")?;

        Ok(BareResponse {
            status: response.status,
            reason: response.reason,
            body: Box::new(StubBody {
                body: response.body,
                log: self.log.clone(),
            }),
        })
    }

    fn release(&mut self) {
        self.log.releases.fetch_add(1, Ordering::SeqCst);
    }
}

struct StubBody {
    body: Result<Vec<u8>, HttpClientError>,
    log: Arc<StubLog>,
}

#[async_trait]
impl BareBody for StubBody {
    async fn read(self: Box<Self>) -> Result<Vec<u8>, HttpClientError> {
        self.log.reads.fetch_add(1, Ordering::SeqCst);

        self.body
    }
}
