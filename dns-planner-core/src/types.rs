//! Record set request and resolution outcome types.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use dns_planner_backend::RecordType;

use crate::resolver::ResolveError;

/// Sentinel value a record set carries until resolution replaces it.
pub const PLACEHOLDER_VALUE: &str = "placeholder";

/// Request to declare one record set.
///
/// When `dns_name` is present, [`resolve_and_update`](crate::RecordSet::resolve_and_update)
/// will attempt to replace the placeholder with the hostname's A records.
/// When it is absent, the placeholder is the record's permanent value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetRequest {
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Fully qualified record name. Also used as the plan logical id.
    pub name: String,
    /// GovCloud partition toggle. Accepted for compatibility; currently inert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gov_cloud: Option<bool>,
    /// Identifier of the hosted zone the record set belongs to.
    pub hosted_zone_id: String,
    /// Hostname whose A records should populate the record value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    /// Alias-target zone id. Accepted for compatibility; currently inert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_hosted_zone_id: Option<String>,
    /// Time to live in seconds; the backend default applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// Result of the resolve-and-update step.
///
/// Resolution failures are data, not errors: the caller inspects the outcome
/// and decides whether to log, retry, or accept the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ResolutionOutcome {
    /// No hostname was requested; the placeholder is the permanent value.
    Skipped,
    /// Lookup succeeded and the record value was overridden.
    Updated {
        /// Resolved addresses, in answer order.
        addresses: Vec<Ipv4Addr>,
    },
    /// Lookup failed or returned no addresses; the placeholder stays.
    KeptPlaceholder {
        /// Why the value was not updated.
        reason: ResolveError,
    },
}
