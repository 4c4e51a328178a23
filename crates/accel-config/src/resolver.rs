//! Resolution of a raw build configuration into an [`AcceleratorConfig`].

use accel_precision::{NumericType, PrecisionCatalog};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{AcceleratorConfig, DEFAULT_TEMPLATE_ROOT};
use crate::corrections::ConfigCorrection;
use crate::error::{ConfigError, Result};
use crate::raw::{RawAcceleratorSection, RawConfig, TensorDescriptor};
use crate::rounding::round_to_byte_boundary;

/// Board used when neither an override nor `Board` is given.
pub const DEFAULT_BOARD: &str = "pynq-z2";

/// Output of a successful resolution.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Resolution {
    pub config: AcceleratorConfig,
    pub corrections: Vec<ConfigCorrection>,
}

impl Resolution {
    /// Write every correction back into `raw`, in the order they were made.
    pub fn apply_corrections(&self, raw: &mut RawConfig) {
        for correction in &self.corrections {
            correction.apply(raw);
        }
    }

    /// Corrections that overrode an explicit user setting.
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigCorrection> {
        self.corrections.iter().filter(|c| c.is_warning())
    }

    pub fn into_config(self) -> AcceleratorConfig {
        self.config
    }
}

/// Resolves raw configuration against a read-only catalog.
pub struct AcceleratorConfigResolver<'a, C: PrecisionCatalog + ?Sized> {
    catalog: &'a C,
    board_override: Option<String>,
    section_override: Option<RawAcceleratorSection>,
    template_root: String,
}

impl<'a, C: PrecisionCatalog + ?Sized> AcceleratorConfigResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            board_override: None,
            section_override: None,
            template_root: DEFAULT_TEMPLATE_ROOT.to_string(),
        }
    }

    /// Use `board` instead of the configuration's `Board` key.
    pub fn with_board_override(mut self, board: impl Into<String>) -> Self {
        self.board_override = Some(board.into());
        self
    }

    /// Use `section` instead of the configuration's `AcceleratorConfig`.
    pub fn with_accelerator_section(mut self, section: RawAcceleratorSection) -> Self {
        self.section_override = Some(section);
        self
    }

    pub fn with_template_root(mut self, root: impl Into<String>) -> Self {
        self.template_root = root.into();
        self
    }

    /// Resolve `raw` for a model with the given inputs and outputs.
    ///
    /// Steps run in order: board lookup, part cross-check, accelerator
    /// section defaulting and validation, tensor cardinality, per-side type
    /// resolution. The first failure aborts; no partial config is produced.
    pub fn resolve(
        &self,
        raw: &RawConfig,
        inputs: &[TensorDescriptor],
        outputs: &[TensorDescriptor],
    ) -> Result<Resolution> {
        let mut corrections = Vec::new();

        let board = self
            .board_override
            .as_deref()
            .or(raw.board.as_deref())
            .unwrap_or(DEFAULT_BOARD)
            .to_string();
        let board_info = self.catalog.resolve_board(&board)?;
        let part = board_info.part.clone();

        if let Some(requested) = raw.xilinx_part.as_deref() {
            if requested != part {
                warn!(
                    board = %board,
                    requested = %requested,
                    canonical = %part,
                    "XilinxPart does not correspond to the board; the board's part is used"
                );
                corrections.push(ConfigCorrection::PartCorrected {
                    requested: requested.to_string(),
                    canonical: part.clone(),
                });
            }
        }

        let section = match self.section_override.as_ref().or(raw.accelerator.as_ref()) {
            Some(section) => section.clone(),
            None => {
                let section = RawAcceleratorSection::default_section();
                info!(board = %board, "no AcceleratorConfig given, using default section");
                corrections.push(ConfigCorrection::AcceleratorSectionSynthesized {
                    section: section.clone(),
                });
                section
            }
        };
        let (input_spec, output_spec) = required_precision(&section)?;
        let interface = section.interface.unwrap_or_default();
        let driver = section.driver.unwrap_or_default();

        let (input_tensor, output_tensor) = match (inputs, outputs) {
            ([input], [output]) => (input.clone(), output.clone()),
            _ => {
                return Err(ConfigError::UnsupportedTensorCount {
                    inputs: inputs.len(),
                    outputs: outputs.len(),
                })
            }
        };

        let input_type = self.resolve_wire_type(input_spec)?;
        let output_type = self.resolve_wire_type(output_spec)?;

        debug!(
            board = %board,
            interface = %interface,
            driver = %driver,
            input_type = %input_type,
            output_type = %output_type,
            input_bitwidth = input_type.width(),
            output_bitwidth = output_type.width(),
            "resolved accelerator config"
        );

        Ok(Resolution {
            config: AcceleratorConfig {
                board,
                part,
                board_info,
                interface,
                driver,
                input_bitwidth: input_type.width(),
                output_bitwidth: output_type.width(),
                input_type,
                output_type,
                input_tensor,
                output_tensor,
                template_root: self.template_root.clone(),
            },
            corrections,
        })
    }

    /// Map one side's requested precision to its wire type.
    ///
    /// Input and output go through this same path.
    fn resolve_wire_type(&self, spec: &str) -> Result<NumericType> {
        match spec {
            "float" => Ok(NumericType::FLOAT),
            "double" => Ok(NumericType::DOUBLE),
            other => {
                let parsed = self.catalog.parse_precision(other)?;
                Ok(round_to_byte_boundary(parsed))
            }
        }
    }
}

fn required_precision(section: &RawAcceleratorSection) -> Result<(&str, &str)> {
    let precision = section
        .precision
        .as_ref()
        .ok_or_else(|| incomplete("Precision"))?;
    let input = precision
        .input
        .as_deref()
        .ok_or_else(|| incomplete("Precision.Input"))?;
    let output = precision
        .output
        .as_deref()
        .ok_or_else(|| incomplete("Precision.Output"))?;
    Ok((input, output))
}

fn incomplete(missing: &str) -> ConfigError {
    ConfigError::IncompleteAccelerationConfig {
        missing: missing.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accel_precision::{BoardInfo, DriverKind, InterfaceKind, StaticCatalog};

    use crate::raw::RawPrecision;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new().with_board(
            "pynq-z2",
            BoardInfo::new("xc7z020").with_tcl_script(InterfaceKind::Stream, "axi_stream_design.tcl"),
        )
    }

    fn io() -> (Vec<TensorDescriptor>, Vec<TensorDescriptor>) {
        (
            vec![TensorDescriptor::new("dense_input", vec![16])],
            vec![TensorDescriptor::new("layer5_out", vec![5])],
        )
    }

    #[test]
    fn test_defaults_without_section() {
        let catalog = catalog();
        let (inputs, outputs) = io();
        let res = AcceleratorConfigResolver::new(&catalog)
            .resolve(&RawConfig::new(), &inputs, &outputs)
            .expect("resolve");

        assert_eq!(res.config.board(), DEFAULT_BOARD);
        assert_eq!(res.config.part(), "xc7z020");
        assert_eq!(res.config.interface(), InterfaceKind::Stream);
        assert_eq!(res.config.driver(), DriverKind::Generated);
        assert_eq!(res.config.io_bitwidths(), (32, 32));
        assert_eq!(
            res.corrections,
            vec![ConfigCorrection::AcceleratorSectionSynthesized {
                section: RawAcceleratorSection::default_section()
            }]
        );
        assert_eq!(res.warnings().count(), 0);
    }

    #[test]
    fn test_matching_part_is_not_a_correction() {
        let catalog = catalog();
        let (inputs, outputs) = io();
        let raw = RawConfig::new()
            .with_part("xc7z020")
            .with_accelerator(RawAcceleratorSection::default().with_precision("float", "float"));
        let res = AcceleratorConfigResolver::new(&catalog)
            .resolve(&raw, &inputs, &outputs)
            .expect("resolve");
        assert!(res.corrections.is_empty());
    }

    #[test]
    fn test_missing_precision_section() {
        let catalog = catalog();
        let (inputs, outputs) = io();
        let raw = RawConfig::new()
            .with_accelerator(RawAcceleratorSection::default().with_driver(DriverKind::Native));
        let err = AcceleratorConfigResolver::new(&catalog)
            .resolve(&raw, &inputs, &outputs)
            .unwrap_err();
        assert_eq!(err, incomplete("Precision"));
    }

    #[test]
    fn test_missing_input_precision() {
        let catalog = catalog();
        let (inputs, outputs) = io();
        let raw = RawConfig::new().with_accelerator(RawAcceleratorSection {
            precision: Some(RawPrecision {
                input: None,
                output: Some("float".to_string()),
            }),
            ..Default::default()
        });
        let err = AcceleratorConfigResolver::new(&catalog)
            .resolve(&raw, &inputs, &outputs)
            .unwrap_err();
        assert_eq!(err, incomplete("Precision.Input"));
    }

    #[test]
    fn test_double_resolves_symmetrically() {
        let catalog = catalog();
        let (inputs, outputs) = io();
        let raw = RawConfig::new().with_accelerator(
            RawAcceleratorSection::default().with_precision("double", "ap_fixed<16,6>"),
        );
        let res = AcceleratorConfigResolver::new(&catalog)
            .resolve(&raw, &inputs, &outputs)
            .expect("resolve");
        assert_eq!(res.config.io_bitwidths(), (64, 16));
        assert_eq!(*res.config.input_type(), NumericType::DOUBLE);
    }

    #[test]
    fn test_apply_corrections_persists_default_section() {
        let catalog = catalog();
        let (inputs, outputs) = io();
        let mut raw = RawConfig::new();
        let res = AcceleratorConfigResolver::new(&catalog)
            .resolve(&raw, &inputs, &outputs)
            .expect("resolve");
        res.apply_corrections(&mut raw);
        assert_eq!(raw.accelerator, Some(RawAcceleratorSection::default_section()));
    }
}
