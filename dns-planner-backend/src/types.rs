use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time to live applied when a declaration does not specify one.
pub const DEFAULT_TTL: u32 = 300;

/// DNS record type identifier.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
}

impl RecordType {
    /// Returns the uppercase wire form of this record type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record set as handed to the backend for declaration.
///
/// The `logical_id` keys the record set within a plan and must be unique per
/// backend instance. `resource_records` holds the initial value list; it may
/// later be replaced through a property override without re-declaring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetDeclaration {
    /// Plan-unique identifier for this record set.
    pub logical_id: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Fully qualified record name.
    pub name: String,
    /// Identifier of the hosted zone the record set belongs to.
    pub hosted_zone_id: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Initial record values.
    pub resource_records: Vec<String>,
}

/// Opaque handle returned by [`declare_record_set`](crate::ZoneBackend::declare_record_set).
///
/// Created once at declaration time. The backing record set's properties may
/// be overridden through the handle; the handle itself is never invalidated
/// by this library (plan teardown is a backend concern).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetHandle {
    /// Backend-assigned record set identifier.
    pub record_set_id: String,
    /// Logical id the record set was declared under.
    pub logical_id: String,
}

/// A declared record set together with its plan bookkeeping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredRecordSet {
    /// Backend-assigned record set identifier.
    pub record_set_id: String,
    /// The declaration as received.
    #[serde(flatten)]
    pub declaration: RecordSetDeclaration,
    /// When the record set was declared.
    pub declared_at: DateTime<Utc>,
}
