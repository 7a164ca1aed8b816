//! Shared request/response core used by every API façade.
//!
//! Owns the resolved endpoint, credential and transport. Builds
//! authenticated requests with deterministic query strings and decodes the
//! heterogeneous JSON responses of the v5 API into typed values.

pub mod transport;

use std::any::type_name;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::{Config, DEFAULT_API_URL};
use crate::error::Error;
use transport::{ApiRequest, ApiResponse, Doer, HttpDoer};

/// Credential attached to every outgoing request.
#[derive(Clone)]
enum Auth {
    ApiKey(String),
    PersonalAccessToken(String),
}

/// Core API client. Cheap to clone; façades hold a rebased copy each and
/// never mutate shared state after construction.
#[derive(Clone)]
pub struct ApiClient {
    /// Root of the API, always ending in `/`.
    base: String,
    /// `base` plus the façade path prefix, always ending in `/`.
    endpoint: String,
    auth: Auth,
    sharing_id: Option<String>,
    debug: bool,
    dry_run: bool,
    timeout: Option<Duration>,
    doer: Arc<dyn Doer>,
}

impl ApiClient {
    /// Build a client from `config`, using `doer` as the transport or the
    /// default `reqwest`-backed one when `None`.
    ///
    /// Fails with `Error::Configuration` when the credentials are missing
    /// or contradictory, or when the base URL is not absolute.
    pub fn new(config: Config, doer: Option<Arc<dyn Doer>>) -> Result<Self, Error> {
        let api_key = config.api_key.filter(|key| !key.is_empty());
        let token = config.personal_access_token.filter(|token| !token.is_empty());
        let auth = match (api_key, token) {
            (Some(key), None) => Auth::ApiKey(key),
            (None, Some(token)) => Auth::PersonalAccessToken(token),
            (Some(_), Some(_)) => {
                return Err(Error::Configuration(
                    "both api_key and personal_access_token are set".to_string(),
                ))
            }
            (None, None) => {
                return Err(Error::Configuration(
                    "either api_key or personal_access_token is required".to_string(),
                ))
            }
        };

        let base = normalize_base(config.api_url.as_deref().unwrap_or(DEFAULT_API_URL))?;
        Ok(Self {
            endpoint: base.clone(),
            base,
            auth,
            sharing_id: config.sharing_id.filter(|id| !id.is_empty()),
            debug: config.debug,
            dry_run: config.dry_run,
            timeout: config.timeout.filter(|timeout| !timeout.is_zero()),
            doer: doer.unwrap_or_else(|| Arc::new(HttpDoer::new())),
        })
    }

    /// Return a copy of this client whose endpoint is the API root plus
    /// `prefix` (e.g. `livedns/`). The receiver is left untouched.
    pub fn rebase(&self, prefix: &str) -> Self {
        let mut client = self.clone();
        let mut endpoint = self.base.clone();
        endpoint.push_str(prefix.trim_start_matches('/'));
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        client.endpoint = endpoint;
        client
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let response = self.send(Method::GET, path, query, None, None).await?;
        decode_body(&response.body)
    }

    /// GET returning the raw body as text (zone-file style endpoints).
    pub(crate) async fn get_text(&self, path: &str) -> Result<String, Error> {
        let response = self
            .send(Method::GET, path, &[], None, Some("text/plain"))
            .await?;
        String::from_utf8(response.body.clone())
            .map_err(|_| Error::decode("String", "response body is not valid UTF-8", &response.body))
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let payload = encode_body(body)?;
        let response = self
            .send(Method::POST, path, &[], Some(payload), None)
            .await?;
        decode_body(&response.body)
    }

    pub(crate) async fn post_no_content<B>(&self, path: &str, body: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        let payload = encode_body(body)?;
        self.send(Method::POST, path, &[], Some(payload), None)
            .await?;
        Ok(())
    }

    /// POST without a request body (toggle-style endpoints).
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), Error> {
        self.send(Method::POST, path, &[], None, None).await?;
        Ok(())
    }

    pub(crate) async fn put_no_content<B>(&self, path: &str, body: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        let payload = encode_body(body)?;
        self.send(Method::PUT, path, &[], Some(payload), None)
            .await?;
        Ok(())
    }

    pub(crate) async fn patch_no_content<B>(&self, path: &str, body: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        let payload = encode_body(body)?;
        self.send(Method::PATCH, path, &[], Some(payload), None)
            .await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.send(Method::DELETE, path, &[], None, None).await?;
        Ok(())
    }

    /// Build, decorate and dispatch one request; map non-2xx statuses to
    /// `Error::Remote`.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Vec<u8>>,
        accept: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let request = self.build_request(method, path, query, body, accept)?;
        if self.debug {
            tracing::debug!(method = %request.method, url = %request.url, "dispatching API request");
        }
        let response = self.doer.dispatch(request).await?;
        if self.debug {
            tracing::debug!(
                status = %response.status,
                body = %String::from_utf8_lossy(&response.body),
                "received API response"
            );
        }
        if !response.status.is_success() {
            return Err(Error::remote(response.status, &response.body));
        }
        Ok(response)
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Vec<u8>>,
        accept: Option<&str>,
    ) -> Result<ApiRequest, Error> {
        let raw = format!("{}{}", self.endpoint, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw)
            .map_err(|err| Error::Configuration(format!("invalid request URL {raw:?}: {err}")))?;

        // Caller parameters sorted by key, sharing_id appended last, so the
        // final query string is fully predictable.
        let mut params: Vec<(&str, &str)> = query
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (*key, *value))
            .collect();
        params.sort_by(|left, right| left.0.cmp(right.0));
        if let Some(sharing_id) = self.sharing_id.as_deref() {
            params.push(("sharing_id", sharing_id));
        }
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }

        let mut headers = Vec::new();
        match &self.auth {
            Auth::ApiKey(key) => headers.push(("X-Api-Key".to_string(), key.clone())),
            Auth::PersonalAccessToken(token) => {
                headers.push(("Authorization".to_string(), format!("Bearer {token}")))
            }
        }
        if self.dry_run {
            headers.push(("Dry-Run".to_string(), "1".to_string()));
        }
        if let Some(accept) = accept {
            headers.push(("Accept".to_string(), accept.to_string()));
        }
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        Ok(ApiRequest {
            method,
            url,
            headers,
            body,
            timeout: self.timeout,
        })
    }
}

/// Normalize a base URL: must parse as an absolute URL, gets a trailing `/`
/// so path joins never double a slash.
fn normalize_base(base: &str) -> Result<String, Error> {
    let normalized = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };
    let url = Url::parse(&normalized)
        .map_err(|err| Error::Configuration(format!("invalid base URL {base:?}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "invalid base URL {base:?}: not an absolute URL"
        )));
    }
    Ok(normalized)
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(body).map_err(|err| {
        Error::decode(
            type_name::<B>(),
            format!("failed to encode request body: {err}"),
            &[],
        )
    })
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|err| Error::decode(type_name::<T>(), err.to_string(), body))
}
