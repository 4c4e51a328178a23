//! Error types for accel-precision

use thiserror::Error;

/// Errors raised by catalog lookups and precision parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Board name not present in the registry
    #[error("unknown board: {board}")]
    UnknownBoard { board: String },

    /// Precision string is not `float`, `double` or a well-formed custom type
    #[error("invalid precision spec '{spec}': {reason}")]
    InvalidPrecisionSpec { spec: String, reason: String },

    /// Board registry could not be deserialized
    #[error("board registry error: {0}")]
    Registry(String),
}

impl CatalogError {
    pub(crate) fn invalid(spec: &str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidPrecisionSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Registry(err.to_string())
    }
}
