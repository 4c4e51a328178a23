//! Raw (user-supplied) build configuration.
//!
//! Key spellings follow the project configuration file: `Board`,
//! `XilinxPart`, `AcceleratorConfig.{Precision.{Input,Output},Driver,Interface}`.
//! Keys this crate does not interpret are carried through untouched.

use accel_precision::{DriverKind, InterfaceKind};
use serde::{Deserialize, Serialize};

/// Precision name used when the accelerator section is synthesized.
pub const DEFAULT_PRECISION: &str = "float";

/// Requested interface precisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawPrecision {
    #[serde(rename = "Input", default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    #[serde(rename = "Output", default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl RawPrecision {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            output: Some(output.into()),
        }
    }
}

/// The `AcceleratorConfig` sub-record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawAcceleratorSection {
    #[serde(rename = "Precision", default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<RawPrecision>,

    #[serde(rename = "Driver", default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<DriverKind>,

    #[serde(rename = "Interface", default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<InterfaceKind>,
}

impl RawAcceleratorSection {
    /// Section used when the configuration carries none: streaming interface,
    /// generated driver, `float` on both sides.
    pub fn default_section() -> Self {
        Self {
            precision: Some(RawPrecision::new(DEFAULT_PRECISION, DEFAULT_PRECISION)),
            driver: Some(DriverKind::Generated),
            interface: Some(InterfaceKind::Stream),
        }
    }

    pub fn with_precision(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.precision = Some(RawPrecision::new(input, output));
        self
    }

    pub fn with_interface(mut self, interface: InterfaceKind) -> Self {
        self.interface = Some(interface);
        self
    }

    pub fn with_driver(mut self, driver: DriverKind) -> Self {
        self.driver = Some(driver);
        self
    }
}

/// Top-level build configuration record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawConfig {
    #[serde(rename = "Board", default, skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,

    #[serde(rename = "XilinxPart", default, skip_serializing_if = "Option::is_none")]
    pub xilinx_part: Option<String>,

    #[serde(
        rename = "AcceleratorConfig",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub accelerator: Option<RawAcceleratorSection>,

    /// Every other key of the configuration (model paths, layer config, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(board.into());
        self
    }

    pub fn with_part(mut self, part: impl Into<String>) -> Self {
        self.xilinx_part = Some(part.into());
        self
    }

    pub fn with_accelerator(mut self, section: RawAcceleratorSection) -> Self {
        self.accelerator = Some(section);
        self
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Opaque handle to a model input or output tensor.
///
/// Resolution never looks inside; the descriptor is handed back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TensorDescriptor {
    pub name: String,
    #[serde(default)]
    pub shape: Vec<usize>,
}

impl TensorDescriptor {
    pub fn new(name: impl Into<String>, shape: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}
