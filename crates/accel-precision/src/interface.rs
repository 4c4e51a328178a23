//! Wire interface and host driver families.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Protocol used to move data into and out of the accelerator.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum InterfaceKind {
    /// AXI4-Stream
    #[default]
    #[serde(rename = "axi_stream")]
    Stream,

    /// AXI4 master (memory-mapped)
    #[serde(rename = "axi_master")]
    MemoryMapped,

    /// AXI4-Lite (register-based)
    #[serde(rename = "axi_lite")]
    Register,
}

impl InterfaceKind {
    /// Registry and path spelling of the interface.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceKind::Stream => "axi_stream",
            InterfaceKind::MemoryMapped => "axi_master",
            InterfaceKind::Register => "axi_lite",
        }
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Family of host-side access code packaged with the build.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DriverKind {
    /// Generated high-level driver (Python)
    #[default]
    #[serde(rename = "python")]
    Generated,

    /// Native low-level driver (C, shipped as an SDK directory)
    #[serde(rename = "c")]
    Native,
}

impl DriverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverKind::Generated => "python",
            DriverKind::Native => "c",
        }
    }

    /// Extension of the single driver file, if the family ships one.
    pub fn file_extension(&self) -> Option<&'static str> {
        match self {
            DriverKind::Generated => Some("py"),
            DriverKind::Native => None,
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
