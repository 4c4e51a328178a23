//! Board metadata as stored in the registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::interface::InterfaceKind;

/// Registry entry for one supported board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardInfo {
    /// Physical device identifier, e.g. `xc7z020clg400-1`.
    pub part: String,

    /// Block-design script per interface. `None` when the entry carries no
    /// script table at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcl_scripts: Option<BTreeMap<InterfaceKind, String>>,
}

impl BoardInfo {
    pub fn new(part: impl Into<String>) -> Self {
        Self {
            part: part.into(),
            tcl_scripts: None,
        }
    }

    /// Register a script for `interface` (builder pattern).
    pub fn with_tcl_script(mut self, interface: InterfaceKind, script: impl Into<String>) -> Self {
        self.tcl_scripts
            .get_or_insert_with(BTreeMap::new)
            .insert(interface, script.into());
        self
    }

    /// Script registered for `interface`, if any.
    pub fn tcl_script(&self, interface: InterfaceKind) -> Option<&str> {
        self.tcl_scripts
            .as_ref()
            .and_then(|scripts| scripts.get(&interface))
            .map(String::as_str)
    }
}
