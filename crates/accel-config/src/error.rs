//! Error taxonomy for configuration resolution.
//!
//! Every variant stems from a static configuration defect and is terminal for
//! the current build-configuration step.

use accel_precision::{CatalogError, InterfaceKind};

/// Configuration resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board '{board}' does not appear in the board registry")]
    UnknownBoard { board: String },

    #[error("incomplete AcceleratorConfig: {missing} must be provided")]
    IncompleteAccelerationConfig { missing: String },

    #[error(
        "only models with one input and one output tensor are supported \
         (got {inputs} input(s), {outputs} output(s))"
    )]
    UnsupportedTensorCount { inputs: usize, outputs: usize },

    #[error("invalid precision spec '{spec}': {reason}")]
    InvalidPrecisionSpec { spec: String, reason: String },

    #[error("no tcl script available for board '{board}' and interface {interface}")]
    MissingTclScript {
        board: String,
        interface: InterfaceKind,
    },

    #[error("catalog error: {0}")]
    Catalog(String),
}

impl From<CatalogError> for ConfigError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownBoard { board } => ConfigError::UnknownBoard { board },
            CatalogError::InvalidPrecisionSpec { spec, reason } => {
                ConfigError::InvalidPrecisionSpec { spec, reason }
            }
            CatalogError::Registry(msg) => ConfigError::Catalog(msg),
        }
    }
}

/// Result type for configuration resolution.
pub type Result<T> = std::result::Result<T, ConfigError>;
