//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns_planner_backend::BackendError;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Backend rejected a declaration or an override
    #[error("{0}")]
    Backend(#[from] BackendError),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (caller input, resource does not exist, etc.),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when
    /// returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Backend(e) => e.is_expected(),
            Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
