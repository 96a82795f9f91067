//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Backend layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum BackendError {
    /// A record set with the same logical id is already declared
    #[error("Record set '{0}' is already declared")]
    DuplicateLogicalId(String),

    /// No declared record set matches the handle
    #[error("Record set not found: {0}")]
    RecordSetNotFound(String),

    /// Property override rejected
    #[error("Invalid property '{property}': {detail}")]
    InvalidProperty { property: String, detail: String },

    /// Plan document serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl BackendError {
    /// Whether it is expected behavior (caller input, resource does not exist, etc.),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when
    /// returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::DuplicateLogicalId(_) | Self::RecordSetNotFound(_) | Self::InvalidProperty { .. }
        )
    }
}

/// Backend layer Result type alias
pub type BackendResult<T> = std::result::Result<T, BackendError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_duplicate_logical_id() {
        let e = BackendError::DuplicateLogicalId("www.example.com".to_string());
        assert_eq!(
            e.to_string(),
            "Record set 'www.example.com' is already declared"
        );
    }

    #[test]
    fn display_record_set_not_found() {
        let e = BackendError::RecordSetNotFound("rs-12345678".to_string());
        assert_eq!(e.to_string(), "Record set not found: rs-12345678");
    }

    #[test]
    fn display_invalid_property() {
        let e = BackendError::InvalidProperty {
            property: String::new(),
            detail: "property name must not be empty".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid property '': property name must not be empty"
        );
    }

    #[test]
    fn serialize_tagged_by_code() {
        let e = BackendError::RecordSetNotFound("rs-1".to_string());
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RecordSetNotFound\""));
        assert!(json.contains("rs-1"));
    }

    #[test]
    fn expected_classification() {
        assert!(BackendError::DuplicateLogicalId("x".into()).is_expected());
        assert!(BackendError::RecordSetNotFound("x".into()).is_expected());
        assert!(
            BackendError::InvalidProperty {
                property: "p".into(),
                detail: "d".into(),
            }
            .is_expected()
        );
        assert!(!BackendError::SerializationError("boom".into()).is_expected());
    }
}
