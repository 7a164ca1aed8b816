//! Client configuration for the Gandi v5 API.
//!
//! A `Config` is built once at startup and shared read-only by every API
//! client constructed from it; nothing in the crate mutates it afterwards.

use std::time::Duration;

/// Production endpoint of the Gandi v5 API.
pub const DEFAULT_API_URL: &str = "https://api.gandi.net/v5/";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Legacy API key, sent as the `X-Api-Key` header. Exactly one of
    /// `api_key` and `personal_access_token` must be set.
    pub api_key: Option<String>,
    /// Personal access token, sent as an `Authorization: Bearer` header.
    pub personal_access_token: Option<String>,
    /// Base URL override; `None` selects the production endpoint.
    pub api_url: Option<String>,
    /// Organization sharing id, propagated as a `sharing_id` query
    /// parameter on every request when set.
    pub sharing_id: Option<String>,
    /// Emit request/response tracing events.
    pub debug: bool,
    /// Ask the server to validate requests without executing them.
    pub dry_run: bool,
    /// Per-request deadline. `None` or zero uses the transport default.
    pub timeout: Option<Duration>,
}
