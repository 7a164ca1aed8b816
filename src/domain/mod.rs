//! Gandi v5 Domain API client.
//!
//! Covers availability checks, registration, contacts, nameservers, DNSSEC
//! keys, glue records, web redirections, tags and the LiveDNS status of a
//! domain.
//!
//! Reference: https://api.gandi.net/docs/domains/

pub mod types;

use std::sync::Arc;

use serde_json::json;

use crate::client::transport::Doer;
use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Error;
use types::*;

const ENDPOINT_PREFIX: &str = "domain/";

/// Client to the Domain API.
pub struct Domain {
    client: ApiClient,
}

impl Domain {
    /// Create a Domain API client from configuration.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self::from_client(ApiClient::new(config, None)?))
    }

    /// Create a Domain API client from configuration with a custom
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

    /// Check availability and pricing of a domain name.
    pub async fn check_availability(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<Availability, Error> {
        let query = [
            ("name", request.fqdn.as_str()),
            ("country", request.country.as_deref().unwrap_or("")),
            ("currency", request.currency.as_deref().unwrap_or("")),
        ];
        self.client.get("check", &query).await
    }

    /// List the domains of the account.
    pub async fn list_domains(&self) -> Result<Vec<DomainListing>, Error> {
        self.client.get("domains", &[]).await
    }

    /// Get the details of a single domain.
    pub async fn get_domain(&self, fqdn: &str) -> Result<Details, Error> {
        self.client.get(&format!("domains/{fqdn}"), &[]).await
    }

    /// Register a new domain.
    pub async fn create_domain(&self, request: &CreateRequest) -> Result<(), Error> {
        self.client.post_no_content("domains", request).await
    }

    /// Get the contacts of a domain.
    pub async fn get_contacts(&self, fqdn: &str) -> Result<Contacts, Error> {
        self.client
            .get(&format!("domains/{fqdn}/contacts"), &[])
            .await
    }

    /// Update the contacts of a domain.
    pub async fn set_contacts(&self, fqdn: &str, contacts: &Contacts) -> Result<(), Error> {
        self.client
            .patch_no_content(&format!("domains/{fqdn}/contacts"), contacts)
            .await
    }

    /// Get the current nameservers of a domain.
    pub async fn get_nameservers(&self, fqdn: &str) -> Result<Vec<String>, Error> {
        self.client
            .get(&format!("domains/{fqdn}/nameservers"), &[])
            .await
    }

    /// Replace the nameserver set of a domain.
    pub async fn update_nameservers(&self, fqdn: &str, nameservers: Vec<String>) -> Result<(), Error> {
        self.client
            .put_no_content(&format!("domains/{fqdn}/nameservers"), &Nameservers { nameservers })
            .await
    }

    /// Enable or disable auto renewal of a domain.
    pub async fn set_auto_renew(&self, fqdn: &str, enabled: bool) -> Result<(), Error> {
        self.client
            .patch_no_content(&format!("domains/{fqdn}/autorenew"), &json!({ "enabled": enabled }))
            .await
    }

    /// List the DNSSEC keys of a domain.
    pub async fn list_dnssec_keys(&self, fqdn: &str) -> Result<Vec<DnssecKey>, Error> {
        self.client
            .get(&format!("domains/{fqdn}/dnskeys"), &[])
            .await
    }

    /// Add a DNSSEC key to a domain.
    pub async fn create_dnssec_key(
        &self,
        fqdn: &str,
        request: &DnssecKeyCreateRequest,
    ) -> Result<(), Error> {
        self.client
            .post_no_content(&format!("domains/{fqdn}/dnskeys"), request)
            .await
    }

    /// Remove a DNSSEC key from a domain.
    pub async fn delete_dnssec_key(&self, fqdn: &str, key_id: u64) -> Result<(), Error> {
        self.client
            .delete(&format!("domains/{fqdn}/dnskeys/{key_id}"))
            .await
    }

    /// List the glue records of a domain.
    pub async fn list_glue_records(&self, fqdn: &str) -> Result<Vec<GlueRecord>, Error> {
        self.client.get(&format!("domains/{fqdn}/hosts"), &[]).await
    }

    /// Get a single glue record.
    pub async fn get_glue_record(&self, fqdn: &str, name: &str) -> Result<GlueRecord, Error> {
        self.client
            .get(&format!("domains/{fqdn}/hosts/{name}"), &[])
            .await
    }

    /// Create a glue record at the registry.
    pub async fn create_glue_record(
        &self,
        fqdn: &str,
        request: &GlueRecordCreateRequest,
    ) -> Result<(), Error> {
        self.client
            .post_no_content(&format!("domains/{fqdn}/hosts"), request)
            .await
    }

    /// Replace the IP addresses of a glue record.
    pub async fn update_glue_record(
        &self,
        fqdn: &str,
        name: &str,
        ips: Vec<String>,
    ) -> Result<(), Error> {
        self.client
            .put_no_content(
                &format!("domains/{fqdn}/hosts/{name}"),
                &GlueRecordUpdateRequest { ips },
            )
            .await
    }

    /// Delete a glue record.
    pub async fn delete_glue_record(&self, fqdn: &str, name: &str) -> Result<(), Error> {
        self.client
            .delete(&format!("domains/{fqdn}/hosts/{name}"))
            .await
    }

    /// List the web redirections of a domain.
    pub async fn list_web_redirections(&self, fqdn: &str) -> Result<Vec<WebRedirection>, Error> {
        self.client
            .get(&format!("domains/{fqdn}/webredirs"), &[])
            .await
    }

    /// Get a single web redirection.
    pub async fn get_web_redirection(
        &self,
        fqdn: &str,
        host: &str,
    ) -> Result<WebRedirection, Error> {
        self.client
            .get(&format!("domains/{fqdn}/webredirs/{host}"), &[])
            .await
    }

    /// Create a web redirection.
    pub async fn create_web_redirection(
        &self,
        fqdn: &str,
        request: &WebRedirectionCreateRequest,
    ) -> Result<(), Error> {
        self.client
            .post_no_content(&format!("domains/{fqdn}/webredirs"), request)
            .await
    }

    /// Delete a web redirection.
    pub async fn delete_web_redirection(&self, fqdn: &str, host: &str) -> Result<(), Error> {
        self.client
            .delete(&format!("domains/{fqdn}/webredirs/{host}"))
            .await
    }

    /// Get the tags of a domain.
    pub async fn get_tags(&self, fqdn: &str) -> Result<Vec<String>, Error> {
        self.client.get(&format!("domains/{fqdn}/tags"), &[]).await
    }

    /// Replace the tags of a domain.
    pub async fn set_tags(&self, fqdn: &str, tags: Vec<String>) -> Result<(), Error> {
        self.client
            .put_no_content(&format!("domains/{fqdn}/tags"), &Tags { tags })
            .await
    }

    /// Get the LiveDNS status of a domain.
    pub async fn get_livedns(&self, fqdn: &str) -> Result<LiveDnsStatus, Error> {
        self.client
            .get(&format!("domains/{fqdn}/livedns"), &[])
            .await
    }

    /// Switch a domain to LiveDNS.
    pub async fn enable_livedns(&self, fqdn: &str) -> Result<(), Error> {
        self.client
            .post_empty(&format!("domains/{fqdn}/livedns"))
            .await
    }
}
