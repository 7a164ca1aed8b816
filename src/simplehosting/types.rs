//! Wire types for the Simple Hosting API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The organisation that owns a hosting instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharingSpace {
    pub id: String,
    pub name: String,
}

/// A Simple Hosting instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_space: Option<SharingSpace>,
}

/// A virtual host served by an instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vhost {
    pub fqdn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// DNS zone linkage requested alongside a new virtual host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedDnsZone {
    pub allow_alteration: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_alteration_override: Option<bool>,
}

/// Request payload for creating a virtual host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVhostRequest {
    pub fqdn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_dns_zone: Option<LinkedDnsZone>,
}
