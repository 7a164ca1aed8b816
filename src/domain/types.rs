//! Wire types for the Domain API.
//!
//! Optional request fields are skipped entirely when unset so payloads never
//! carry `null` or empty placeholders; optional response fields decode to
//! `None` rather than a zero value.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Legal form of a contact.
///
/// The wire value is polymorphic: either the token itself (`"company"`) or
/// its numeric index (`1`). Both decode to the same canonical variant and
/// always serialize back as the token. An index outside the documented
/// table is a decode error; a token outside it is preserved verbatim, since
/// the upstream API has emitted undocumented tokens in real responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactType {
    Individual,
    Company,
    Association,
    PublicBody,
    /// Token outside the documented table, kept as received.
    Other(String),
}

impl ContactType {
    /// Canonical token string for this contact type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
            Self::Association => "association",
            Self::PublicBody => "publicbody",
            Self::Other(token) => token,
        }
    }

    fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::Individual),
            1 => Some(Self::Company),
            2 => Some(Self::Association),
            3 => Some(Self::PublicBody),
            _ => None,
        }
    }

    fn from_token(token: &str) -> Self {
        match token {
            "individual" => Self::Individual,
            "company" => Self::Company,
            "association" => Self::Association,
            "publicbody" => Self::PublicBody,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ContactType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContactType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Index(u64),
            Token(String),
        }

        // Numeric parse first (a bare number or a digit string), then the
        // raw token.
        match Wire::deserialize(deserializer)? {
            Wire::Index(index) => Self::from_index(index)
                .ok_or_else(|| de::Error::custom(format!("unknown contact type index {index}"))),
            Wire::Token(token) => match token.parse::<u64>() {
                Ok(index) => Self::from_index(index).ok_or_else(|| {
                    de::Error::custom(format!("unknown contact type index {index}"))
                }),
                Err(_) => Ok(Self::from_token(&token)),
            },
        }
    }
}

/// A contact associated with a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub country: String,
    pub email: String,
    #[serde(rename = "family")]
    pub family_name: String,
    #[serde(rename = "given")]
    pub given_name: String,
    #[serde(rename = "streetaddr")]
    pub street_addr: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_obfuscated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(rename = "lang", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_obfuscated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(rename = "orgname", default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siren: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_parameters: Option<serde_json::Value>,
}

/// The set of contacts associated with a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Contacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<Contact>,
    #[serde(rename = "bill", default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech: Option<Contact>,
}

/// All the dates associated with a domain. Absent fields stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResponseDates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authinfo_expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletes_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_begins_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_delete_ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_begins_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_ends_at: Option<DateTime<Utc>>,
}

/// Name server configuration of a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameServerConfig {
    pub current: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
}

/// One entry of the domain list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainListing {
    #[serde(rename = "autorenew")]
    pub auto_renew: Option<bool>,
    pub dates: Option<ResponseDates>,
    pub domain_owner: String,
    pub fqdn: String,
    pub fqdn_unicode: String,
    pub href: String,
    pub id: String,
    pub nameserver: Option<NameServerConfig>,
    pub orga_owner: String,
    pub owner: String,
    #[serde(default)]
    pub status: Vec<String>,
    pub tld: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Auto renewal information for a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AutoRenew {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

/// The organisation that owns a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharingSpace {
    pub id: String,
    pub name: String,
}

/// Actions a trustee role can perform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrusteeRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_transferout: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
}

/// Full description of a single domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Details {
    #[serde(rename = "autorenew", default, skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<AutoRenew>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_tld_lock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Contacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<ResponseDates>,
    pub fqdn: String,
    pub fqdn_unicode: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_space: Option<SharingSpace>,
    #[serde(default)]
    pub status: Vec<String>,
    pub tld: String,
    #[serde(rename = "authinfo", default, skip_serializing_if = "Option::is_none")]
    pub auth_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trustee_roles: Option<Vec<TrusteeRole>>,
}

/// Request payload for registering a new domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRequest {
    pub fqdn: String,
    pub owner: Contact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<Contact>,
    #[serde(rename = "bill", default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Duration in years, between 1 and 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_premium: Option<bool>,
    #[serde(rename = "lang", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Glue records for the domain, keyed by host name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameserver_ips: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resellee_id: Option<String>,
    /// Signed Mark Data file; if used, `tld_period` must be "sunrise".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tld_period: Option<String>,
}

/// PUT body for replacing the nameserver set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nameservers {
    pub nameservers: Vec<String>,
}

/// A DNSSEC key associated with a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnssecKey {
    pub algorithm: u32,
    pub digest: String,
    pub digest_type: u32,
    pub id: u64,
    #[serde(rename = "keytag")]
    pub key_tag: u32,
    #[serde(rename = "type")]
    pub key_type: String,
    pub public_key: String,
}

/// Request payload for creating a DNSSEC key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnssecKeyCreateRequest {
    pub algorithm: u32,
    #[serde(rename = "type")]
    pub key_type: String,
    pub public_key: String,
}

/// Association of a hostname with IP addresses at the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlueRecord {
    pub name: String,
    pub ips: Vec<String>,
    pub fqdn: String,
    pub href: String,
    pub fqdn_unicode: String,
}

/// Request payload for creating a glue record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlueRecordCreateRequest {
    pub name: String,
    pub ips: Vec<String>,
}

/// Request payload for replacing a glue record's IP addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlueRecordUpdateRequest {
    pub ips: Vec<String>,
}

/// A web redirection configured on a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebRedirection {
    pub host: String,
    #[serde(rename = "type")]
    pub redirection_type: String,
    pub url: String,
    #[serde(rename = "cert_status", default, skip_serializing_if = "Option::is_none")]
    pub certificate_status: Option<String>,
    #[serde(rename = "cert_uuid", default, skip_serializing_if = "Option::is_none")]
    pub certificate_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request payload for creating a web redirection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebRedirectionCreateRequest {
    pub host: String,
    pub r#override: bool,
    pub protocol: String,
    #[serde(rename = "type")]
    pub redirection_type: String,
    pub url: String,
}

/// LiveDNS status of a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveDnsStatus {
    pub current: String,
    pub nameservers: Vec<String>,
    #[serde(default)]
    pub dnssec_available: bool,
    #[serde(default)]
    pub livednssec_available: bool,
}

/// PUT body for replacing a domain's tag list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tags {
    pub tags: Vec<String>,
}

/// Input for an availability check. Unset fields are omitted from the
/// query string entirely.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityRequest {
    pub fqdn: String,
    pub country: Option<String>,
    pub currency: Option<String>,
}

/// Result of an availability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub currency: String,
    pub grid: String,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub taxes: Vec<Tax>,
}

/// A product of an availability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub status: String,
    #[serde(default)]
    pub periods: Vec<Period>,
    pub name: String,
    pub process: String,
    #[serde(default)]
    pub prices: Vec<Price>,
    #[serde(default)]
    pub taxes: Vec<Tax>,
}

/// A tax applied to a product price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tax {
    pub name: String,
    pub rate: f64,
    #[serde(rename = "type")]
    pub tax_type: String,
}

/// A price quoted for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Unit of the duration. Possible values: "y" (year).
    pub duration_unit: String,
    pub max_duration: u32,
    pub min_duration: u32,
    pub price_after_taxes: f64,
    pub price_before_taxes: f64,
    #[serde(default)]
    pub discount: bool,
    #[serde(default)]
    pub normal_price_after_taxes: f64,
    #[serde(default)]
    pub normal_price_before_taxes: f64,
    #[serde(rename = "type")]
    pub price_type: String,
    #[serde(default)]
    pub options: PricingOptions,
}

/// Pricing options attached to a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PricingOptions {
    #[serde(default)]
    pub period: String,
}

/// A registration period of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn contact_type_decodes_tokens_and_indices_to_one_canonical_value() {
        for (wire, want) in [
            (r#""individual""#, ContactType::Individual),
            (r#""0""#, ContactType::Individual),
            ("0", ContactType::Individual),
            (r#""company""#, ContactType::Company),
            (r#""1""#, ContactType::Company),
            ("1", ContactType::Company),
            (r#""association""#, ContactType::Association),
            (r#""2""#, ContactType::Association),
            ("2", ContactType::Association),
            (r#""publicbody""#, ContactType::PublicBody),
            (r#""3""#, ContactType::PublicBody),
            ("3", ContactType::PublicBody),
        ] {
            let got: ContactType = serde_json::from_str(wire).expect(wire);
            assert_eq!(got, want, "wire value {wire}");
        }
    }

    #[test]
    fn contact_type_rejects_unmapped_index() {
        assert!(serde_json::from_str::<ContactType>("9").is_err());
        assert!(serde_json::from_str::<ContactType>(r#""9""#).is_err());
    }

    #[test]
    fn contact_type_preserves_undocumented_tokens() {
        let got: ContactType = serde_json::from_str(r#""person""#).expect("token");
        assert_eq!(got, ContactType::Other("person".to_string()));
        assert_eq!(got.as_str(), "person");
    }

    #[test]
    fn contact_type_serializes_as_canonical_token() {
        let json = serde_json::to_string(&ContactType::PublicBody).expect("serialize");
        assert_eq!(json, r#""publicbody""#);
    }

    #[test]
    fn contact_optional_fields_are_omitted_and_decode_back_as_absent() {
        let contact = Contact {
            country: "US".to_string(),
            email: "support@example.com".to_string(),
            family_name: "Doe".to_string(),
            given_name: "John".to_string(),
            street_addr: "123 Main St".to_string(),
            contact_type: ContactType::Individual,
            brand_number: None,
            city: None,
            data_obfuscated: None,
            fax: None,
            language: None,
            mail_obfuscated: None,
            mobile: None,
            org_name: None,
            phone: None,
            siren: None,
            state: None,
            validation: None,
            zip: None,
            extra_parameters: None,
        };

        let json = serde_json::to_value(&contact).expect("serialize");
        let object = json.as_object().expect("object");
        assert!(!object.contains_key("city"));
        assert!(!object.contains_key("orgname"));
        assert!(!object.contains_key("data_obfuscated"));
        assert_eq!(object["family"], "Doe");
        assert_eq!(object["type"], "individual");

        let back: Contact = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, contact);
        assert!(back.city.is_none());
    }

    #[test]
    fn absent_dates_decode_as_none_not_zero() {
        let dates: ResponseDates =
            serde_json::from_str(r#"{"registry_created_at":"2018-04-15T22:30:47Z"}"#)
                .expect("deserialize");
        assert_eq!(
            dates.registry_created_at,
            Some(Utc.with_ymd_and_hms(2018, 4, 15, 22, 30, 47).unwrap())
        );
        assert!(dates.updated_at.is_none());
        assert!(dates.deletes_at.is_none());
    }

    #[test]
    fn details_decodes_polymorphic_contact_types() {
        let json = r#"{
            "fqdn": "example.com",
            "fqdn_unicode": "example.com",
            "href": "https://api.gandi.net/v5/domain/domains/example.com",
            "tld": "com",
            "contacts": {
                "owner": {
                    "country": "US",
                    "email": "support@example.com",
                    "family": "Doe",
                    "given": "John",
                    "streetaddr": "123 Main St",
                    "type": 1
                },
                "admin": {
                    "country": "US",
                    "email": "support@example.com",
                    "family": "Doe",
                    "given": "John",
                    "streetaddr": "123 Main St",
                    "type": "person"
                }
            }
        }"#;
        let details: Details = serde_json::from_str(json).expect("deserialize");
        let contacts = details.contacts.expect("contacts");
        assert_eq!(
            contacts.owner.expect("owner").contact_type,
            ContactType::Company
        );
        assert_eq!(
            contacts.admin.expect("admin").contact_type.as_str(),
            "person"
        );
        assert!(details.dates.is_none());
        assert!(details.auth_info.is_none());
    }

    #[test]
    fn create_request_omits_unset_optionals() {
        let request = CreateRequest {
            fqdn: "example.com".to_string(),
            owner: Contact {
                country: "US".to_string(),
                email: "support@example.com".to_string(),
                family_name: "Doe".to_string(),
                given_name: "John".to_string(),
                street_addr: "123 Main St".to_string(),
                contact_type: ContactType::Individual,
                brand_number: None,
                city: None,
                data_obfuscated: None,
                fax: None,
                language: None,
                mail_obfuscated: None,
                mobile: None,
                org_name: None,
                phone: None,
                siren: None,
                state: None,
                validation: None,
                zip: None,
                extra_parameters: None,
            },
            admin: None,
            billing: None,
            claims: None,
            currency: None,
            duration: Some(1),
            enforce_premium: None,
            language: None,
            nameserver_ips: None,
            nameservers: None,
            price: None,
            resellee_id: None,
            smd: None,
            tech: None,
            tld_period: None,
        };

        let json = serde_json::to_value(&request).expect("serialize");
        let object = json.as_object().expect("object");
        assert_eq!(object["fqdn"], "example.com");
        assert_eq!(object["duration"], 1);
        assert!(!object.contains_key("admin"));
        assert!(!object.contains_key("bill"));
        assert!(!object.contains_key("nameserver_ips"));
        assert!(!object.contains_key("enforce_premium"));
    }
}
