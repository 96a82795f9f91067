use async_trait::async_trait;
use serde_json::Value;

use crate::error::BackendResult;
use crate::types::{RecordSetDeclaration, RecordSetHandle};

/// Plan property holding a record set's value list.
pub const RESOURCE_RECORDS: &str = "resourceRecords";

/// Seam to the provisioning layer.
///
/// A backend accepts record set declarations and post-declaration property
/// overrides. How (or whether) the plan is ultimately deployed is outside this
/// library; the bundled [`TemplateBackend`](crate::TemplateBackend) keeps the
/// plan in memory and synthesizes it to a JSON document.
#[async_trait]
pub trait ZoneBackend: Send + Sync {
    /// Declare a new record set.
    ///
    /// Returns a handle whose backing properties can later be overridden.
    /// Fails with [`DuplicateLogicalId`](crate::BackendError::DuplicateLogicalId)
    /// when the declaration's logical id is already taken.
    async fn declare_record_set(
        &self,
        declaration: &RecordSetDeclaration,
    ) -> BackendResult<RecordSetHandle>;

    /// Patch one property of a previously declared record set.
    ///
    /// Overrides are merged into the plan at synthesis time; repeated
    /// overrides of the same property replace each other (last write wins).
    async fn override_property(
        &self,
        handle: &RecordSetHandle,
        property: &str,
        value: Value,
    ) -> BackendResult<()>;
}
