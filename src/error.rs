//! Error types shared by every client in the crate.
//!
//! Each failure path surfaces exactly one of these variants to the caller;
//! nothing is retried or swallowed internally.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Bytes of raw body kept in decode-error snippets.
const SNIPPET_LIMIT: usize = 256;

#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or contradictory client configuration. Raised at client
    /// construction, never at call time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The transport failed before an HTTP status was obtained.
    #[error("transport error: {message}")]
    Transport { message: String, timeout: bool },

    /// The server answered with a non-2xx status.
    #[error("remote error ({status}): {message}")]
    Remote {
        status: StatusCode,
        message: String,
        cause: Option<String>,
    },

    /// A response body (or request payload) did not match the expected
    /// JSON shape.
    #[error("decode error for {shape}: {message}")]
    Decode {
        shape: &'static str,
        message: String,
        snippet: String,
    },
}

impl Error {
    pub(crate) fn decode(shape: &'static str, message: impl Into<String>, body: &[u8]) -> Self {
        Error::Decode {
            shape,
            message: message.into(),
            snippet: snippet(body),
        }
    }

    /// Build a `Remote` error from a non-2xx response, preferring the
    /// standard error envelope and falling back to the raw status + body.
    pub(crate) fn remote(status: StatusCode, body: &[u8]) -> Self {
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
            if let Some(message) = envelope.message_text() {
                return Error::Remote {
                    status,
                    message,
                    cause: envelope.cause,
                };
            }
        }
        Error::Remote {
            status,
            message: format!("HTTP {}: {}", status, snippet(body)),
            cause: None,
        }
    }

    /// True when the error is a transport-level timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport { timeout: true, .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport {
            message: err.to_string(),
            timeout: err.is_timeout(),
        }
    }
}

/// Standard error envelope returned by the API on non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub message: Option<String>,
    pub cause: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl ErrorEnvelope {
    /// The envelope message verbatim, or the joined field errors when the
    /// top-level message is missing.
    fn message_text(&self) -> Option<String> {
        if let Some(message) = &self.message {
            return Some(message.clone());
        }
        if self.errors.is_empty() {
            return None;
        }
        let parts: Vec<String> = self.errors.iter().map(FieldError::describe).collect();
        Some(parts.join("; "))
    }
}

/// A single field-level error inside the envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct FieldError {
    pub location: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl FieldError {
    fn describe(&self) -> String {
        let field = match (&self.location, &self.name) {
            (Some(location), Some(name)) => format!("{location}.{name}"),
            (None, Some(name)) => name.clone(),
            (Some(location), None) => location.clone(),
            (None, None) => "unknown field".to_string(),
        };
        match &self.description {
            Some(description) => format!("{field}: {description}"),
            None => field,
        }
    }
}

fn snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut out: String = text.chars().take(SNIPPET_LIMIT).collect();
    if text.chars().count() > SNIPPET_LIMIT {
        out.push_str("...");
    }
    out
}
