//! Transport abstraction: one request in, one response or error out.
//!
//! The core never talks to the network directly. It builds an `ApiRequest`
//! and hands it to a `Doer`; production code uses `HttpDoer` over a shared
//! `reqwest::Client`, tests substitute a scripted implementation.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use url::Url;

use crate::error::Error;

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    /// Per-request deadline; `None` uses the transport default.
    pub timeout: Option<Duration>,
}

/// An HTTP response reduced to what the decoder needs.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Sends a single request and returns a single response.
///
/// Implementations must not retry, paginate or otherwise issue hidden
/// follow-up requests; the core relies on exactly one dispatch per API
/// call. Implementations must be safe for concurrent use.
#[async_trait::async_trait]
pub trait Doer: Send + Sync {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, Error>;
}

/// Default `Doer` backed by a shared `reqwest::Client`.
pub struct HttpDoer {
    client: reqwest::Client,
}

impl HttpDoer {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpDoer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Doer for HttpDoer {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let mut builder = self.client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(ApiResponse { status, body })
    }
}
