//! Wire types for the Email API.

use serde::{Deserialize, Serialize};

/// A mailbox attached to a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mailbox {
    pub address: String,
    pub domain: String,
    pub id: String,
    pub login: String,
    pub mailbox_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_used: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

/// Request payload for creating a mailbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMailboxRequest {
    pub login: String,
    pub mailbox_type: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

/// A forwarding address of a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forward {
    pub source: String,
    pub destinations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Request payload for creating a forwarding address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateForwardRequest {
    pub source: String,
    pub destinations: Vec<String>,
}
