//! Gandi v5 Email API client.
//!
//! Manages mailboxes and forwarding addresses of a domain.
//!
//! Reference: https://api.gandi.net/docs/email/

pub mod types;

use std::sync::Arc;

use crate::client::transport::Doer;
use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Error;
use types::*;

const ENDPOINT_PREFIX: &str = "email/";

/// Client to the Email API.
pub struct Email {
    client: ApiClient,
}

impl Email {
    /// Create an Email API client from configuration.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self::from_client(ApiClient::new(config, None)?))
    }

    /// Create an Email API client from configuration with a custom
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

    /// List the mailboxes of a domain.
    pub async fn list_mailboxes(&self, fqdn: &str) -> Result<Vec<Mailbox>, Error> {
        self.client.get(&format!("mailboxes/{fqdn}"), &[]).await
    }

    /// Get a single mailbox.
    pub async fn get_mailbox(&self, fqdn: &str, mailbox_id: &str) -> Result<Mailbox, Error> {
        self.client
            .get(&format!("mailboxes/{fqdn}/{mailbox_id}"), &[])
            .await
    }

    /// Create a mailbox on a domain.
    pub async fn create_mailbox(
        &self,
        fqdn: &str,
        request: &CreateMailboxRequest,
    ) -> Result<(), Error> {
        self.client
            .post_no_content(&format!("mailboxes/{fqdn}"), request)
            .await
    }

    /// Delete a mailbox.
    pub async fn delete_mailbox(&self, fqdn: &str, mailbox_id: &str) -> Result<(), Error> {
        self.client
            .delete(&format!("mailboxes/{fqdn}/{mailbox_id}"))
            .await
    }

    /// List the forwarding addresses of a domain.
    pub async fn list_forwards(&self, fqdn: &str) -> Result<Vec<Forward>, Error> {
        self.client.get(&format!("forwards/{fqdn}"), &[]).await
    }

    /// Create a forwarding address on a domain.
    pub async fn create_forward(
        &self,
        fqdn: &str,
        request: &CreateForwardRequest,
    ) -> Result<(), Error> {
        self.client
            .post_no_content(&format!("forwards/{fqdn}"), request)
            .await
    }

    /// Delete a forwarding address.
    pub async fn delete_forward(&self, fqdn: &str, source: &str) -> Result<(), Error> {
        self.client
            .delete(&format!("forwards/{fqdn}/{source}"))
            .await
    }
}
