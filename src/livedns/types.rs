//! Wire types for the LiveDNS API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A zone attached to LiveDNS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub fqdn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_keys_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_records_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_snapshot: Option<bool>,
}

/// A DNS record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub rrset_name: String,
    pub rrset_type: String,
    pub rrset_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrset_ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrset_href: Option<String>,
}

/// A zone snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_data: Option<Vec<Record>>,
}

/// Response to a snapshot creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotCreated {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
