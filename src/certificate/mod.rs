//! Gandi v5 Certificate API client.
//!
//! Lists and orders TLS certificates issued through the platform.
//!
//! Reference: https://api.gandi.net/docs/certificate/

pub mod types;

use std::sync::Arc;

use crate::client::transport::Doer;
use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Error;
use types::CreateCertificateRequest;

const ENDPOINT_PREFIX: &str = "certificate/";

/// Client to the Certificate API.
pub struct Certificate {
    client: ApiClient,
}

impl Certificate {
    /// Create a Certificate API client from configuration.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self::from_client(ApiClient::new(config, None)?))
    }

    /// Create a Certificate API client from configuration with a custom
    /// transport.
    pub fn with_doer(config: Config, doer: Arc<dyn Doer>) -> Result<Self, Error> {
        Ok(Self::from_client(ApiClient::new(config, Some(doer))?))
    }

    /// Reuse an existing client's credentials and transport.
    pub fn from_client(client: ApiClient) -> Self {
        Self {
            client: client.rebase(ENDPOINT_PREFIX),
        }
    }

    /// List the issued certificates of the account.
    pub async fn list_certificates(&self) -> Result<Vec<types::Certificate>, Error> {
        self.client.get("issued-certs", &[]).await
    }

    /// Get a single issued certificate.
    pub async fn get_certificate(&self, certificate_id: &str) -> Result<types::Certificate, Error> {
        self.client
            .get(&format!("issued-certs/{certificate_id}"), &[])
            .await
    }

    /// Order a new certificate.
    pub async fn create_certificate(
        &self,
        request: &CreateCertificateRequest,
    ) -> Result<(), Error> {
        self.client.post_no_content("issued-certs", request).await
    }
}
