//! In-process zone plan backend.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{BackendError, BackendResult};
use crate::traits::ZoneBackend;
use crate::types::{DeclaredRecordSet, RecordSetDeclaration, RecordSetHandle};

struct Entry {
    record: DeclaredRecordSet,
    overrides: Map<String, Value>,
}

/// [`ZoneBackend`] that accumulates declarations in memory.
///
/// Declarations keep their insertion order. Property overrides are stored
/// separately from the declaration they target and merged into the record set
/// object when the plan is synthesized, so a declaration is never mutated
/// after the fact.
pub struct TemplateBackend {
    entries: RwLock<Vec<Entry>>,
}

impl TemplateBackend {
    /// Create an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Look up a declared record set by logical id.
    pub async fn get(&self, logical_id: &str) -> Option<DeclaredRecordSet> {
        self.entries
            .read()
            .await
            .iter()
            .find(|e| e.record.declaration.logical_id == logical_id)
            .map(|e| e.record.clone())
    }

    /// Number of declared record sets.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the plan has no declarations.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Render the plan document.
    ///
    /// Record sets are keyed by logical id under `"recordSets"`, with pending
    /// property overrides merged into each object.
    pub async fn synthesize(&self) -> BackendResult<Value> {
        let entries = self.entries.read().await;
        let mut record_sets = Map::new();
        for entry in entries.iter() {
            let mut object = match serde_json::to_value(&entry.record) {
                Ok(Value::Object(map)) => map,
                Ok(other) => {
                    return Err(BackendError::SerializationError(format!(
                        "record set '{}' rendered as non-object value: {other}",
                        entry.record.declaration.logical_id
                    )));
                }
                Err(e) => return Err(BackendError::SerializationError(e.to_string())),
            };
            for (property, value) in &entry.overrides {
                object.insert(property.clone(), value.clone());
            }
            record_sets.insert(
                entry.record.declaration.logical_id.clone(),
                Value::Object(object),
            );
        }

        let mut document = Map::new();
        document.insert("recordSets".to_string(), Value::Object(record_sets));
        Ok(Value::Object(document))
    }
}

impl Default for TemplateBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneBackend for TemplateBackend {
    async fn declare_record_set(
        &self,
        declaration: &RecordSetDeclaration,
    ) -> BackendResult<RecordSetHandle> {
        let mut entries = self.entries.write().await;
        if entries
            .iter()
            .any(|e| e.record.declaration.logical_id == declaration.logical_id)
        {
            return Err(BackendError::DuplicateLogicalId(
                declaration.logical_id.clone(),
            ));
        }

        let uuid = Uuid::new_v4().to_string();
        let record_set_id = format!("rs-{}", &uuid[..8]);
        log::debug!(
            "Declared record set {} ({} {}) in zone {} as {record_set_id}",
            declaration.logical_id,
            declaration.record_type,
            declaration.name,
            declaration.hosted_zone_id
        );

        let handle = RecordSetHandle {
            record_set_id: record_set_id.clone(),
            logical_id: declaration.logical_id.clone(),
        };
        entries.push(Entry {
            record: DeclaredRecordSet {
                record_set_id,
                declaration: declaration.clone(),
                declared_at: Utc::now(),
            },
            overrides: Map::new(),
        });
        Ok(handle)
    }

    async fn override_property(
        &self,
        handle: &RecordSetHandle,
        property: &str,
        value: Value,
    ) -> BackendResult<()> {
        if property.is_empty() {
            return Err(BackendError::InvalidProperty {
                property: property.to_string(),
                detail: "property name must not be empty".to_string(),
            });
        }

        let mut entries = self.entries.write().await;
        let Some(entry) = entries
            .iter_mut()
            .find(|e| e.record.record_set_id == handle.record_set_id)
        else {
            return Err(BackendError::RecordSetNotFound(
                handle.record_set_id.clone(),
            ));
        };

        log::debug!(
            "Override on record set {} ({property})",
            handle.record_set_id
        );
        entry.overrides.insert(property.to_string(), value);
        Ok(())
    }
}
