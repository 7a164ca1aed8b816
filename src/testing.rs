//! Scripted transports and config helpers shared by the unit tests.

use std::sync::{Arc, Mutex};

use reqwest::StatusCode;

use crate::client::transport::{ApiRequest, ApiResponse, Doer};
use crate::config::Config;
use crate::error::Error;

/// A `Doer` that records every request and answers with one canned
/// response, so tests can assert the exact method, URL, headers and body
/// without a network.
pub(crate) struct ScriptedDoer {
    status: StatusCode,
    body: Vec<u8>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedDoer {
    pub fn ok(body: &str) -> Arc<Self> {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.as_bytes().to_vec(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .expect("lock")
            .last()
            .cloned()
            .expect("at least one request dispatched")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("lock").len()
    }
}

#[async_trait::async_trait]
impl Doer for ScriptedDoer {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        self.requests.lock().expect("lock").push(request);
        Ok(ApiResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// A `Doer` that always fails with a transport timeout.
pub(crate) struct TimeoutDoer;

#[async_trait::async_trait]
impl Doer for TimeoutDoer {
    async fn dispatch(&self, _request: ApiRequest) -> Result<ApiResponse, Error> {
        Err(Error::Transport {
            message: "deadline elapsed".to_string(),
            timeout: true,
        })
    }
}

pub(crate) fn config_with_key() -> Config {
    Config {
        api_key: Some("apikey123".to_string()),
        ..Config::default()
    }
}

pub(crate) fn config_with_token() -> Config {
    Config {
        personal_access_token: Some("pat123".to_string()),
        ..Config::default()
    }
}
