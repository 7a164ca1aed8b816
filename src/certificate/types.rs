//! Wire types for the Certificate API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Package tier of an issued certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificatePackage {
    pub name: String,
}

/// Lifecycle dates of an issued certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CertificateDates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An issued certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub cn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<CertificatePackage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<CertificateDates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altnames: Option<Vec<String>>,
}

/// Request payload for ordering a certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCertificateRequest {
    pub cn: String,
    pub package: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altnames: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcv_method: Option<String>,
}
