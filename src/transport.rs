use std::sync::Arc;
use std::time::Duration;

use hyper::client::HttpConnector;
use hyper::header::{AUTHORIZATION, CONTENT_TYPE};
use hyper::{Body, Client, Method, Request, Uri};
use hyper_timeout::TimeoutConnector;
use hyper_tls::HttpsConnector;
use log::debug;
use parking_lot::RwLock;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::task;

use crate::error::TransportError;

pub const JSON_UTF_8: &str = "application/json; charset=utf-8";

/// Executes one serialized request against `url` and returns the raw body.
pub trait Transport: Send + Sync {
    fn execute(&self, url: &str, request: &str) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, url: &str, request: &str) -> Result<String, TransportError> {
        (**self).execute(url, request)
    }
}

/// Supplies the node's base address when a call is made.
pub trait EndpointProvider: Send + Sync {
    fn base_url(&self) -> Result<String, TransportError>;
}

impl<F> EndpointProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn base_url(&self) -> Result<String, TransportError> {
        Ok(self())
    }
}

/// Base address that is filled in once the node has started listening.
#[derive(Clone, Debug, Default)]
pub struct DeferredEndpoint {
    url: Arc<RwLock<Option<String>>>,
}

impl DeferredEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, url: impl Into<String>) {
        *self.url.write() = Some(url.into());
    }

    pub fn clear(&self) {
        *self.url.write() = None;
    }

    pub fn get(&self) -> Option<String> {
        self.url.read().clone()
    }
}

impl EndpointProvider for DeferredEndpoint {
    fn base_url(&self) -> Result<String, TransportError> {
        self.get().ok_or(TransportError::EndpointUnavailable)
    }
}

/// Blocking HTTP POST transport.
///
/// Outside a runtime each call owns a current-thread runtime and a fresh
/// client, both dropped before `execute` returns. On a multi-thread runtime
/// the call blocks the worker through `block_in_place`; a current-thread
/// runtime cannot be blocked and the call fails instead.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    auth_token: Option<String>,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    /// Applied to connect, read and write individually.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn connector(&self) -> TimeoutConnector<HttpsConnector<HttpConnector>> {
        let mut connector = TimeoutConnector::new(HttpsConnector::new());
        connector.set_connect_timeout(self.timeout);
        connector.set_read_timeout(self.timeout);
        connector.set_write_timeout(self.timeout);
        connector
    }

    async fn post(&self, uri: Uri, body: String) -> Result<String, TransportError> {
        let client = Client::builder().build::<_, Body>(self.connector());

        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, JSON_UTF_8);
        if let Some(token) = &self.auth_token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = builder
            .body(Body::from(body))
            .map_err(|e| TransportError::InvalidEndpoint(e.to_string()))?;

        let response = client
            .request(request)
            .await
            .map_err(TransportError::from_hyper)?;
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body())
            .await
            .map_err(TransportError::from_hyper)?;
        if !status.is_success() {
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, url: &str, request: &str) -> Result<String, TransportError> {
        let uri: Uri = url
            .parse()
            .map_err(|_| TransportError::InvalidEndpoint(url.to_string()))?;

        debug!("POST {} ({} bytes)", uri, request.len());
        match Handle::try_current() {
            Err(_) => {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()?;
                runtime.block_on(self.post(uri, request.to_string()))
            }
            Ok(handle) => match handle.runtime_flavor() {
                RuntimeFlavor::CurrentThread => Err(TransportError::BlockingInAsyncContext),
                _ => task::block_in_place(|| {
                    handle.block_on(self.post(uri, request.to_string()))
                }),
            },
        }
    }
}
