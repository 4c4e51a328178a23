use std::cell::RefCell;

use accel_config::{
    next_byte_multiple, round_to_byte_boundary, AcceleratorConfigResolver, BoardInfo,
    CatalogError, ConfigCorrection, ConfigError, CustomType, DriverKind, InterfaceKind,
    NumericType, PrecisionCatalog, RawAcceleratorSection, RawConfig, RawPrecision,
    RoundingMode, SaturationMode, StaticCatalog, TensorDescriptor,
};

fn synthetic_catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_board(
            "pynq-z2",
            BoardInfo::new("xc7z020")
                .with_tcl_script(InterfaceKind::Stream, "axi_stream_design.tcl")
                .with_tcl_script(InterfaceKind::Register, "axi_lite_design.tcl"),
        )
        .with_board(
            "zcu102",
            BoardInfo::new("xczu9eg-ffvb1156-2-e")
                .with_tcl_script(InterfaceKind::Stream, "axi_stream_design.tcl"),
        )
        .with_board("bare-board", BoardInfo::new("xc7a35t"))
}

fn one_input() -> Vec<TensorDescriptor> {
    vec![TensorDescriptor::new("dense_input", vec![16])]
}

fn one_output() -> Vec<TensorDescriptor> {
    vec![TensorDescriptor::new("layer5_out", vec![5])]
}

fn section(input: &str, output: &str) -> RawAcceleratorSection {
    RawAcceleratorSection::default().with_precision(input, output)
}

/// Catalog double that records every precision string it is asked to parse.
struct RecordingCatalog {
    inner: StaticCatalog,
    parsed: RefCell<Vec<String>>,
}

impl RecordingCatalog {
    fn new() -> Self {
        Self {
            inner: synthetic_catalog(),
            parsed: RefCell::new(Vec::new()),
        }
    }
}

impl PrecisionCatalog for RecordingCatalog {
    fn resolve_board(&self, name: &str) -> Result<BoardInfo, CatalogError> {
        self.inner.resolve_board(name)
    }

    fn parse_precision(&self, spec: &str) -> Result<NumericType, CatalogError> {
        self.parsed.borrow_mut().push(spec.to_string());
        self.inner.parse_precision(spec)
    }

    fn board_names(&self) -> Vec<String> {
        self.inner.board_names()
    }
}

// ── Width rounding properties ───────────────────────────────────────────

#[test]
fn rounding_properties_hold_for_all_widths() {
    for w in 1..=1024u32 {
        let ty = NumericType::from(CustomType::fixed(w, w / 2, w % 2 == 0));
        let once = round_to_byte_boundary(ty);
        let twice = round_to_byte_boundary(once);
        let rw = once.width();

        assert_eq!(once, twice, "rounding not idempotent for {}", w);
        assert_eq!(rw % 8, 0, "width {} rounded to {}", w, rw);
        assert!(rw >= w);
        assert!(rw - w < 8);
        assert_eq!(rw, next_byte_multiple(w));
    }
}

#[test]
fn rounding_properties_hold_at_the_top_of_the_width_range() {
    let max = CustomType::MAX_WIDTH;
    for w in (max - 16)..=max {
        let ty = NumericType::from(CustomType::integer(w, false));
        let once = round_to_byte_boundary(ty);
        let rw = once.width();

        assert_eq!(round_to_byte_boundary(once), once);
        assert_eq!(rw % 8, 0);
        assert!(rw >= w && rw - w < 8, "width {} rounded to {}", w, rw);
        assert!(once.as_custom().expect("custom").integer_bits <= rw);
    }

    // Beyond anything the parser accepts the result saturates, never wraps.
    for w in [u32::MAX - 8, u32::MAX - 7, u32::MAX - 1, u32::MAX] {
        let rw = next_byte_multiple(w);
        assert_eq!(rw % 8, 0);
        assert!(rw >= u32::MAX - 7, "width {} rounded to {}", w, rw);
    }
}

#[test]
fn rounding_preserves_non_width_fields() {
    let original = CustomType::fixed(13, 5, true)
        .with_rounding(RoundingMode::RndMinInf)
        .with_saturation(SaturationMode::SatSym, 3);
    let rounded = round_to_byte_boundary(original.into());
    let custom = rounded.as_custom().expect("custom");

    assert_eq!(custom.width, 16);
    assert_eq!(
        CustomType {
            width: original.width,
            ..*custom
        },
        original
    );
}

#[test]
fn symbolic_types_are_never_rounded() {
    assert_eq!(round_to_byte_boundary(NumericType::FLOAT).width(), 32);
    assert_eq!(round_to_byte_boundary(NumericType::DOUBLE).width(), 64);
}

// ── Board resolution ────────────────────────────────────────────────────

#[test]
fn unknown_board_fails_without_partial_config() {
    let catalog = synthetic_catalog();
    let raw = RawConfig::new().with_board("zedboard");
    let err = AcceleratorConfigResolver::new(&catalog)
        .resolve(&raw, &one_input(), &one_output())
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownBoard {
            board: "zedboard".to_string()
        }
    );
}

#[test]
fn default_board_must_exist_in_catalog() {
    let catalog = StaticCatalog::new().with_board("zcu102", BoardInfo::new("xczu9eg"));
    let err = AcceleratorConfigResolver::new(&catalog)
        .resolve(&RawConfig::new(), &one_input(), &one_output())
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownBoard { board } if board == "pynq-z2"));
}

#[test]
fn board_override_wins_over_raw_board() {
    let catalog = synthetic_catalog();
    let raw = RawConfig::new()
        .with_board("zedboard")
        .with_accelerator(section("float", "float"));
    let res = AcceleratorConfigResolver::new(&catalog)
        .with_board_override("zcu102")
        .resolve(&raw, &one_input(), &one_output())
        .expect("resolve");
    assert_eq!(res.config.board(), "zcu102");
    assert_eq!(res.config.part(), "xczu9eg-ffvb1156-2-e");
}

// ── Part cross-check ────────────────────────────────────────────────────

#[test]
fn conflicting_part_is_corrected_with_warning() {
    let catalog = synthetic_catalog();
    let mut raw = RawConfig::new()
        .with_board("pynq-z2")
        .with_part("xc7z010")
        .with_accelerator(section("float", "float"));

    let res = AcceleratorConfigResolver::new(&catalog)
        .resolve(&raw, &one_input(), &one_output())
        .expect("construction still succeeds");

    assert_eq!(res.config.part(), "xc7z020");
    let warnings: Vec<_> = res.warnings().collect();
    assert_eq!(
        warnings,
        vec![&ConfigCorrection::PartCorrected {
            requested: "xc7z010".to_string(),
            canonical: "xc7z020".to_string(),
        }]
    );

    // Raw config is untouched until the caller applies corrections.
    assert_eq!(raw.xilinx_part.as_deref(), Some("xc7z010"));
    res.apply_corrections(&mut raw);
    assert_eq!(raw.xilinx_part.as_deref(), Some("xc7z020"));
}

// ── Accelerator section ─────────────────────────────────────────────────

#[test]
fn missing_section_synthesizes_defaults() {
    let catalog = synthetic_catalog();
    let res = AcceleratorConfigResolver::new(&catalog)
        .resolve(&RawConfig::new(), &one_input(), &one_output())
        .expect("resolve");

    assert_eq!(res.config.interface(), InterfaceKind::Stream);
    assert_eq!(res.config.driver(), DriverKind::Generated);
    assert_eq!(res.config.io_bitwidths(), (32, 32));
    assert_eq!(*res.config.input_type(), NumericType::FLOAT);
    assert_eq!(*res.config.output_type(), NumericType::FLOAT);
}

#[test]
fn precision_missing_output_is_incomplete() {
    let catalog = synthetic_catalog();
    let raw = RawConfig::new().with_accelerator(RawAcceleratorSection {
        precision: Some(RawPrecision {
            input: Some("float".to_string()),
            output: None,
        }),
        ..Default::default()
    });
    let err = AcceleratorConfigResolver::new(&catalog)
        .resolve(&raw, &one_input(), &one_output())
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::IncompleteAccelerationConfig {
            missing: "Precision.Output".to_string()
        }
    );
}

#[test]
fn interface_and_driver_default_independently() {
    let catalog = synthetic_catalog();
    let raw = RawConfig::new()
        .with_accelerator(section("float", "float").with_interface(InterfaceKind::Register));
    let res = AcceleratorConfigResolver::new(&catalog)
        .resolve(&raw, &one_input(), &one_output())
        .expect("resolve");
    assert_eq!(res.config.interface(), InterfaceKind::Register);
    assert_eq!(res.config.driver(), DriverKind::Generated);
    assert!(res.corrections.is_empty());

    let raw = RawConfig::new().with_accelerator(section("float", "float").with_driver(DriverKind::Native));
    let res = AcceleratorConfigResolver::new(&catalog)
        .resolve(&raw, &one_input(), &one_output())
        .expect("resolve");
    assert_eq!(res.config.interface(), InterfaceKind::Stream);
    assert_eq!(res.config.driver(), DriverKind::Native);
}

#[test]
fn section_override_replaces_raw_section() {
    let catalog = synthetic_catalog();
    let raw = RawConfig::new().with_accelerator(RawAcceleratorSection::default());
    let res = AcceleratorConfigResolver::new(&catalog)
        .with_accelerator_section(section("ap_int<8>", "double"))
        .resolve(&raw, &one_input(), &one_output())
        .expect("override section is complete");
    assert_eq!(res.config.io_bitwidths(), (8, 64));
}

// ── Tensor cardinality ──────────────────────────────────────────────────

#[test]
fn two_inputs_are_unsupported() {
    let catalog = synthetic_catalog();
    let inputs = vec![TensorDescriptor::named("a"), TensorDescriptor::named("b")];
    let err = AcceleratorConfigResolver::new(&catalog)
        .resolve(&RawConfig::new(), &inputs, &one_output())
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnsupportedTensorCount {
            inputs: 2,
            outputs: 1
        }
    );
}

#[test]
fn zero_outputs_are_unsupported() {
    let catalog = synthetic_catalog();
    let err = AcceleratorConfigResolver::new(&catalog)
        .resolve(&RawConfig::new(), &one_input(), &[])
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnsupportedTensorCount {
            inputs: 1,
            outputs: 0
        }
    ));
}

// ── Type resolution ─────────────────────────────────────────────────────

#[test]
fn thirteen_bit_input_rounds_to_sixteen() {
    let catalog = synthetic_catalog();
    let raw = RawConfig::new().with_accelerator(section("ap_fixed<13,5>", "float"));
    let res = AcceleratorConfigResolver::new(&catalog)
        .resolve(&raw, &one_input(), &one_output())
        .expect("resolve");

    let (input_type, _, input_tensor, _) = res.config.corrected_types();
    let custom = input_type.as_custom().expect("custom input");
    assert_eq!(custom.width, 16);
    assert_eq!(custom.integer_bits, 5);
    assert!(custom.signed);
    assert_eq!(res.config.io_bitwidths(), (16, 32));
    assert_eq!(input_tensor, &one_input()[0]);
}

#[test]
fn symbolic_names_bypass_the_catalog_parser() {
    let catalog = RecordingCatalog::new();
    let raw = RawConfig::new().with_accelerator(section("double", "ap_uint<12>"));
    let res = AcceleratorConfigResolver::new(&catalog)
        .resolve(&raw, &one_input(), &one_output())
        .expect("resolve");

    assert_eq!(res.config.io_bitwidths(), (64, 16));
    assert_eq!(*catalog.parsed.borrow(), vec!["ap_uint<12>".to_string()]);
}

#[test]
fn invalid_output_precision_is_reported() {
    let catalog = synthetic_catalog();
    let raw = RawConfig::new().with_accelerator(section("float", "ap_fixed<8,12>"));
    let err = AcceleratorConfigResolver::new(&catalog)
        .resolve(&raw, &one_input(), &one_output())
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPrecisionSpec { spec, .. } if spec == "ap_fixed<8,12>"));
}

#[test]
fn oversized_width_is_rejected_before_rounding() {
    let catalog = synthetic_catalog();
    let raw = RawConfig::new().with_accelerator(section("ap_uint<4294967295>", "float"));
    let err = AcceleratorConfigResolver::new(&catalog)
        .resolve(&raw, &one_input(), &one_output())
        .unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidPrecisionSpec { ref spec, .. } if spec == "ap_uint<4294967295>"),
        "got {:?}",
        err
    );
}

// ── Template paths ──────────────────────────────────────────────────────

#[test]
fn tcl_script_path_for_register_interface() {
    let catalog = synthetic_catalog();
    let raw = RawConfig::new()
        .with_accelerator(section("float", "float").with_interface(InterfaceKind::Register));
    let cfg = AcceleratorConfigResolver::new(&catalog)
        .with_template_root("templates")
        .resolve(&raw, &one_input(), &one_output())
        .expect("resolve")
        .into_config();
    assert_eq!(
        cfg.tcl_script_path().unwrap(),
        "templates/pynq-z2/tcl_scripts/axi_lite_design.tcl"
    );
    assert_eq!(cfg.driver_path(), "templates/pynq-z2/python_drivers/axi_lite_driver.py");
}

#[test]
fn board_without_scripts_reports_missing_tcl() {
    let catalog = synthetic_catalog();
    let raw = RawConfig::new()
        .with_board("bare-board")
        .with_accelerator(section("float", "float"));
    let cfg = AcceleratorConfigResolver::new(&catalog)
        .resolve(&raw, &one_input(), &one_output())
        .expect("resolve")
        .into_config();
    assert_eq!(
        cfg.tcl_script_path().unwrap_err(),
        ConfigError::MissingTclScript {
            board: "bare-board".to_string(),
            interface: InterfaceKind::Stream,
        }
    );
    // Other paths do not depend on the registry script table.
    assert_eq!(
        cfg.constraints_path(),
        "../templates/vivado_accelerator/bare-board/xdc_constraints"
    );
}
