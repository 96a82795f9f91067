//! # dns-planner-backend
//!
//! Zone plan backend abstraction: declare DNS record sets, patch their
//! properties after declaration, and synthesize the accumulated plan to a
//! JSON document.
//!
//! The [`ZoneBackend`] trait is the seam to whatever provisioning layer a
//! caller targets. The bundled [`TemplateBackend`] keeps the plan entirely in
//! process, which is enough for plan synthesis and for tests; nothing in this
//! crate deploys anywhere.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_planner_backend::{
//!     RecordSetDeclaration, RecordType, TemplateBackend, ZoneBackend, DEFAULT_TTL,
//!     RESOURCE_RECORDS,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = TemplateBackend::new();
//!
//!     let handle = backend
//!         .declare_record_set(&RecordSetDeclaration {
//!             logical_id: "www.example.com".to_string(),
//!             record_type: RecordType::A,
//!             name: "www.example.com".to_string(),
//!             hosted_zone_id: "zone-1".to_string(),
//!             ttl: DEFAULT_TTL,
//!             resource_records: vec!["placeholder".to_string()],
//!         })
//!         .await?;
//!
//!     backend
//!         .override_property(&handle, RESOURCE_RECORDS, serde_json::json!(["192.0.2.1"]))
//!         .await?;
//!
//!     println!("{}", backend.synthesize().await?);
//!     Ok(())
//! }
//! ```

mod error;
mod template;
mod traits;
mod types;

// Re-export error types
pub use error::{BackendError, BackendResult};

// Re-export the seam trait and the bundled backend
pub use template::TemplateBackend;
pub use traits::{RESOURCE_RECORDS, ZoneBackend};

// Re-export types
pub use types::{
    DEFAULT_TTL, DeclaredRecordSet, RecordSetDeclaration, RecordSetHandle, RecordType,
};
