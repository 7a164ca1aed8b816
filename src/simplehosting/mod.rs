//! Gandi v5 Simple Hosting API client.
//!
//! Read access to hosting instances and management of their virtual hosts.
//!
//! Reference: https://api.gandi.net/docs/simplehosting/

pub mod types;

use std::sync::Arc;

use crate::client::transport::Doer;
use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Error;
use types::*;

const ENDPOINT_PREFIX: &str = "simplehosting/";

/// Client to the Simple Hosting API.
pub struct SimpleHosting {
    client: ApiClient,
}

impl SimpleHosting {
    /// Create a Simple Hosting API client from configuration.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self::from_client(ApiClient::new(config, None)?))
    }

    /// Create a Simple Hosting API client from configuration with a
    /// custom transport.
    pub fn with_doer(config: Config, doer: Arc<dyn Doer>) -> Result<Self, Error> {
        Ok(Self::from_client(ApiClient::new(config, Some(doer))?))
    }

    /// Reuse an existing client's credentials and transport.
    pub fn from_client(client: ApiClient) -> Self {
        Self {
            client: client.rebase(ENDPOINT_PREFIX),
        }
    }

    /// List the hosting instances of the account.
    pub async fn list_instances(&self) -> Result<Vec<Instance>, Error> {
        self.client.get("instances", &[]).await
    }

    /// Get a single hosting instance.
    pub async fn get_instance(&self, instance_id: &str) -> Result<Instance, Error> {
        self.client
            .get(&format!("instances/{instance_id}"), &[])
            .await
    }

    /// List the virtual hosts of an instance.
    pub async fn list_vhosts(&self, instance_id: &str) -> Result<Vec<Vhost>, Error> {
        self.client
            .get(&format!("instances/{instance_id}/vhosts"), &[])
            .await
    }

    /// Get a single virtual host.
    pub async fn get_vhost(&self, instance_id: &str, fqdn: &str) -> Result<Vhost, Error> {
        self.client
            .get(&format!("instances/{instance_id}/vhosts/{fqdn}"), &[])
            .await
    }

    /// Create a virtual host on an instance.
    pub async fn create_vhost(
        &self,
        instance_id: &str,
        request: &CreateVhostRequest,
    ) -> Result<(), Error> {
        self.client
            .post_no_content(&format!("instances/{instance_id}/vhosts"), request)
            .await
    }
}
