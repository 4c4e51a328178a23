//! Resolved accelerator configuration and its derived template paths.

use accel_precision::{BoardInfo, DriverKind, InterfaceKind, NumericType};
use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::raw::TensorDescriptor;

/// Template tree the derived paths are rooted at, relative to the project
/// writer's working directory.
pub const DEFAULT_TEMPLATE_ROOT: &str = "../templates/vivado_accelerator";

/// Fully resolved accelerator configuration.
///
/// Built once by [`crate::AcceleratorConfigResolver`] and read-only afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AcceleratorConfig {
    pub(crate) board: String,
    pub(crate) part: String,
    pub(crate) board_info: BoardInfo,
    pub(crate) interface: InterfaceKind,
    pub(crate) driver: DriverKind,
    pub(crate) input_type: NumericType,
    pub(crate) output_type: NumericType,
    pub(crate) input_bitwidth: u32,
    pub(crate) output_bitwidth: u32,
    pub(crate) input_tensor: TensorDescriptor,
    pub(crate) output_tensor: TensorDescriptor,
    pub(crate) template_root: String,
}

impl AcceleratorConfig {
    /// `(input_bitwidth, output_bitwidth)`
    pub fn io_bitwidths(&self) -> (u32, u32) {
        (self.input_bitwidth, self.output_bitwidth)
    }

    /// Resolved wire types together with the tensors they apply to.
    pub fn corrected_types(
        &self,
    ) -> (
        &NumericType,
        &NumericType,
        &TensorDescriptor,
        &TensorDescriptor,
    ) {
        (
            &self.input_type,
            &self.output_type,
            &self.input_tensor,
            &self.output_tensor,
        )
    }

    pub fn input_type(&self) -> &NumericType {
        &self.input_type
    }

    pub fn output_type(&self) -> &NumericType {
        &self.output_type
    }

    pub fn input_tensor(&self) -> &TensorDescriptor {
        &self.input_tensor
    }

    pub fn output_tensor(&self) -> &TensorDescriptor {
        &self.output_tensor
    }

    pub fn interface(&self) -> InterfaceKind {
        self.interface
    }

    pub fn driver(&self) -> DriverKind {
        self.driver
    }

    pub fn board(&self) -> &str {
        &self.board
    }

    /// Canonical part of the board (never the user's conflicting override).
    pub fn part(&self) -> &str {
        &self.part
    }

    pub fn board_info(&self) -> &BoardInfo {
        &self.board_info
    }

    pub fn template_root(&self) -> &str {
        &self.template_root
    }

    /// Leaf of the driver path: `sdk` for native drivers, otherwise
    /// `<interface>_driver.<ext>`.
    pub fn driver_files(&self) -> String {
        match self.driver.file_extension() {
            None => "sdk".to_string(),
            Some(ext) => format!("{}_driver.{}", self.interface.as_str(), ext),
        }
    }

    /// `<root>/<board>/<driver>_drivers/<driver_files>`
    pub fn driver_path(&self) -> String {
        format!(
            "{}/{}_drivers/{}",
            self.board_dir(),
            self.driver.as_str(),
            self.driver_files()
        )
    }

    /// `<root>/<board>/verilog_wrappers`
    pub fn wrapper_path(&self) -> String {
        format!("{}/verilog_wrappers", self.board_dir())
    }

    /// `<root>/<board>/xdc_constraints`
    pub fn constraints_path(&self) -> String {
        format!("{}/xdc_constraints", self.board_dir())
    }

    /// `<root>/<board>/tcl_scripts/<script>` for the resolved interface.
    pub fn tcl_script_path(&self) -> Result<String> {
        let script = self
            .board_info
            .tcl_script(self.interface)
            .ok_or_else(|| ConfigError::MissingTclScript {
                board: self.board.clone(),
                interface: self.interface,
            })?;
        Ok(format!("{}/tcl_scripts/{}", self.board_dir(), script))
    }

    fn board_dir(&self) -> String {
        format!("{}/{}", self.template_root, self.board)
    }
}
