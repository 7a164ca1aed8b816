//! Client library for the Gandi v5 REST API.
//!
//! Each API family (domains, LiveDNS, email, Simple Hosting, certificates)
//! gets a thin client sharing one request/response core: authenticated
//! request construction, a pluggable transport, and decoding of the API's
//! heterogeneous JSON responses into typed values.
//!
//! ```no_run
//! # async fn run() -> Result<(), gandi::Error> {
//! let config = gandi::Config {
//!     personal_access_token: Some("token".to_string()),
//!     ..gandi::Config::default()
//! };
//! let domain = gandi::domain_client(config)?;
//! let availability = domain
//!     .check_availability(&gandi::domain::types::AvailabilityRequest {
//!         fqdn: "example.com".to_string(),
//!         country: Some("US".to_string()),
//!         currency: Some("USD".to_string()),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Reference: https://api.gandi.net/docs/

pub mod certificate;
pub mod client;
pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod livedns;
pub mod simplehosting;

#[cfg(test)]
pub(crate) mod testing;

pub use client::transport::{ApiRequest, ApiResponse, Doer, HttpDoer};
pub use client::ApiClient;
pub use config::Config;
pub use error::Error;

/// Returns a client to the Domain API.
///
/// It expects an API key or a personal access token, available from
/// https://account.gandi.net/
pub fn domain_client(config: Config) -> Result<domain::Domain, Error> {
    domain::Domain::new(config)
}

/// Returns a client to the LiveDNS API.
pub fn livedns_client(config: Config) -> Result<livedns::LiveDns, Error> {
    livedns::LiveDns::new(config)
}

/// Returns a client to the Email API.
pub fn email_client(config: Config) -> Result<email::Email, Error> {
    email::Email::new(config)
}

/// Returns a client to the Simple Hosting API.
pub fn simplehosting_client(config: Config) -> Result<simplehosting::SimpleHosting, Error> {
    simplehosting::SimpleHosting::new(config)
}

/// Returns a client to the Certificate API.
pub fn certificate_client(config: Config) -> Result<certificate::Certificate, Error> {
    certificate::Certificate::new(config)
}
