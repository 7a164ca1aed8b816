//! Gandi v5 LiveDNS API client.
//!
//! Manages zones, record sets, zone snapshots and the zone file text of
//! domains hosted on LiveDNS.
//!
//! Reference: https://api.gandi.net/docs/livedns/

pub mod types;

use std::sync::Arc;

use serde_json::json;

use crate::client::transport::Doer;
use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Error;
use types::*;

const ENDPOINT_PREFIX: &str = "livedns/";

/// Client to the LiveDNS API.
pub struct LiveDns {
    client: ApiClient,
}

impl LiveDns {
    /// Create a LiveDNS API client from configuration.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self::from_client(ApiClient::new(config, None)?))
    }

    /// Create a LiveDNS API client from configuration with a custom
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

    /// List the zones attached to LiveDNS.
    pub async fn list_domains(&self) -> Result<Vec<Domain>, Error> {
        self.client.get("domains", &[]).await
    }

    /// Get a single zone.
    pub async fn get_domain(&self, fqdn: &str) -> Result<Domain, Error> {
        self.client.get(&format!("domains/{fqdn}"), &[]).await
    }

    /// Get the LiveDNS nameservers assigned to a domain.
    pub async fn get_nameservers(&self, fqdn: &str) -> Result<Vec<String>, Error> {
        self.client.get(&format!("nameservers/{fqdn}"), &[]).await
    }

    /// List all record sets of a zone.
    pub async fn list_records(&self, fqdn: &str) -> Result<Vec<Record>, Error> {
        self.client
            .get(&format!("domains/{fqdn}/records"), &[])
            .await
    }

    /// List the record sets sharing one name.
    pub async fn list_records_by_name(&self, fqdn: &str, name: &str) -> Result<Vec<Record>, Error> {
        self.client
            .get(&format!("domains/{fqdn}/records/{name}"), &[])
            .await
    }

    /// Get one record set by name and type.
    pub async fn get_record(&self, fqdn: &str, name: &str, rtype: &str) -> Result<Record, Error> {
        self.client
            .get(&format!("domains/{fqdn}/records/{name}/{rtype}"), &[])
            .await
    }

    /// The whole zone in bind file format.
    pub async fn get_zone_text(&self, fqdn: &str) -> Result<String, Error> {
        self.client
            .get_text(&format!("domains/{fqdn}/records"))
            .await
    }

    /// Create a record set.
    pub async fn create_record(&self, fqdn: &str, record: &Record) -> Result<(), Error> {
        self.client
            .post_no_content(&format!("domains/{fqdn}/records"), record)
            .await
    }

    /// Replace the values (and TTL) of one record set.
    pub async fn update_record(
        &self,
        fqdn: &str,
        name: &str,
        rtype: &str,
        values: Vec<String>,
        ttl: Option<u32>,
    ) -> Result<(), Error> {
        let mut body = json!({ "rrset_values": values });
        if let Some(ttl) = ttl {
            body["rrset_ttl"] = json!(ttl);
        }
        self.client
            .put_no_content(&format!("domains/{fqdn}/records/{name}/{rtype}"), &body)
            .await
    }

    /// Delete every record set of a zone.
    pub async fn delete_records(&self, fqdn: &str) -> Result<(), Error> {
        self.client.delete(&format!("domains/{fqdn}/records")).await
    }

    /// Delete the record sets sharing one name.
    pub async fn delete_records_by_name(&self, fqdn: &str, name: &str) -> Result<(), Error> {
        self.client
            .delete(&format!("domains/{fqdn}/records/{name}"))
            .await
    }

    /// Delete one record set by name and type.
    pub async fn delete_record(&self, fqdn: &str, name: &str, rtype: &str) -> Result<(), Error> {
        self.client
            .delete(&format!("domains/{fqdn}/records/{name}/{rtype}"))
            .await
    }

    /// List the snapshots of a zone.
    pub async fn list_snapshots(&self, fqdn: &str) -> Result<Vec<Snapshot>, Error> {
        self.client
            .get(&format!("domains/{fqdn}/snapshots"), &[])
            .await
    }

    /// Take a snapshot of a zone.
    pub async fn create_snapshot(&self, fqdn: &str, name: &str) -> Result<SnapshotCreated, Error> {
        self.client
            .post(&format!("domains/{fqdn}/snapshots"), &json!({ "name": name }))
            .await
    }

    /// Get a snapshot, including its zone data.
    pub async fn get_snapshot(&self, fqdn: &str, id: &str) -> Result<Snapshot, Error> {
        self.client
            .get(&format!("domains/{fqdn}/snapshots/{id}"), &[])
            .await
    }

    /// Delete a snapshot.
    pub async fn delete_snapshot(&self, fqdn: &str, id: &str) -> Result<(), Error> {
        self.client
            .delete(&format!("domains/{fqdn}/snapshots/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{config_with_key, ScriptedDoer};
    use reqwest::Method;

    fn livedns_with(doer: Arc<ScriptedDoer>, config: Config) -> LiveDns {
        LiveDns::with_doer(config, doer).expect("client")
    }

    #[tokio::test]
    async fn endpoint_is_rebased_to_livedns() {
        let doer = ScriptedDoer::ok(
            r#"[{"fqdn":"example.com","domain_records_href":"https://api.gandi.net/v5/livedns/domains/example.com/records"}]"#,
        );
        let livedns = livedns_with(doer.clone(), config_with_key());

        let domains = livedns.list_domains().await.expect("domains");
        assert_eq!(domains.len(), 1);
        assert_eq!(domains[0].fqdn, "example.com");
        assert!(domains[0].automatic_snapshot.is_none());
        assert_eq!(
            doer.last_request().url.as_str(),
            "https://api.gandi.net/v5/livedns/domains"
        );
    }

    #[tokio::test]
    async fn create_record_posts_the_record_set() {
        let doer = ScriptedDoer::with_status(201, r#"{"message": "DNS Record Created"}"#);
        let livedns = livedns_with(doer.clone(), config_with_key());

        livedns
            .create_record(
                "example.com",
                &Record {
                    rrset_name: "www".to_string(),
                    rrset_type: "A".to_string(),
                    rrset_values: vec!["203.0.113.1".to_string()],
                    rrset_ttl: Some(3600),
                    rrset_href: None,
                },
            )
            .await
            .expect("create");

        let request = doer.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.as_str(),
            "https://api.gandi.net/v5/livedns/domains/example.com/records"
        );
        let body: serde_json::Value =
            serde_json::from_slice(request.body.as_deref().expect("body")).expect("json");
        assert_eq!(
            body,
            serde_json::json!({
                "rrset_name": "www",
                "rrset_type": "A",
                "rrset_values": ["203.0.113.1"],
                "rrset_ttl": 3600
            })
        );
    }

    #[tokio::test]
    async fn update_record_omits_ttl_when_unset() {
        let doer = ScriptedDoer::ok("{}");
        let livedns = livedns_with(doer.clone(), config_with_key());

        livedns
            .update_record("example.com", "www", "A", vec!["203.0.113.2".to_string()], None)
            .await
            .expect("update");

        let request = doer.last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url.as_str(),
            "https://api.gandi.net/v5/livedns/domains/example.com/records/www/A"
        );
        let body: serde_json::Value =
            serde_json::from_slice(request.body.as_deref().expect("body")).expect("json");
        assert_eq!(body, serde_json::json!({"rrset_values": ["203.0.113.2"]}));
    }

    #[tokio::test]
    async fn get_zone_text_returns_the_raw_zone_file() {
        let doer = ScriptedDoer::ok("www 3600 IN A 203.0.113.1\n");
        let livedns = livedns_with(doer.clone(), config_with_key());

        let zone = livedns.get_zone_text("example.com").await.expect("zone");
        assert_eq!(zone, "www 3600 IN A 203.0.113.1\n");
        assert!(doer
            .last_request()
            .headers
            .iter()
            .any(|(name, value)| name == "Accept" && value == "text/plain"));
    }

    #[tokio::test]
    async fn snapshot_creation_returns_the_new_id() {
        let doer =
            ScriptedDoer::with_status(201, r#"{"id": "87dcc23b-e437-4fdc-86ae-ba8b9e0d8b25", "message": "Zone Snapshot Created"}"#);
        let livedns = livedns_with(doer.clone(), config_with_key());

        let created = livedns
            .create_snapshot("example.com", "before-migration")
            .await
            .expect("snapshot");
        assert_eq!(created.id, "87dcc23b-e437-4fdc-86ae-ba8b9e0d8b25");
        let request = doer.last_request();
        let body: serde_json::Value =
            serde_json::from_slice(request.body.as_deref().expect("body")).expect("json");
        assert_eq!(body, serde_json::json!({"name": "before-migration"}));
    }

    #[tokio::test]
    async fn delete_record_targets_name_and_type() {
        let doer = ScriptedDoer::with_status(204, "");
        let livedns = livedns_with(doer.clone(), config_with_key());

        livedns
            .delete_record("example.com", "www", "A")
            .await
            .expect("delete");

        let request = doer.last_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(
            request.url.as_str(),
            "https://api.gandi.net/v5/livedns/domains/example.com/records/www/A"
        );
    }
}
