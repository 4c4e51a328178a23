//! Subcommand implementations.
//!
//! Each command returns the text it would print so the binary stays a thin
//! dispatcher and the commands can be driven directly from tests.

use std::fmt::Write as _;
use std::path::Path;

use accel_config::{
    round_to_byte_boundary, AcceleratorConfigResolver, ConfigError, RawConfig, Resolution,
    TensorDescriptor,
};
use accel_precision::{parse_precision, PrecisionCatalog, StaticCatalog};
use anyhow::{Context, Result};
use tracing::info;

/// Read a board registry JSON file.
pub fn load_catalog(path: &Path) -> Result<StaticCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board registry {:?}", path))?;
    StaticCatalog::from_json_str(&content)
        .with_context(|| format!("Invalid board registry in {:?}", path))
}

/// Read a raw build configuration JSON file.
pub fn load_raw_config(path: &Path) -> Result<RawConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {:?}", path))?;
    RawConfig::from_json_str(&content).with_context(|| format!("Invalid JSON in {:?}", path))
}

fn tensors(names: &[String]) -> Vec<TensorDescriptor> {
    names.iter().map(TensorDescriptor::named).collect()
}

fn resolve(
    catalog: &StaticCatalog,
    raw: &RawConfig,
    board: Option<&str>,
    inputs: &[String],
    outputs: &[String],
) -> Result<Resolution> {
    let mut resolver = AcceleratorConfigResolver::new(catalog);
    if let Some(board) = board {
        resolver = resolver.with_board_override(board);
    }
    // Corrections are already logged by the resolver.
    match resolver.resolve(raw, &tensors(inputs), &tensors(outputs)) {
        Ok(resolution) => Ok(resolution),
        Err(err @ ConfigError::UnknownBoard { .. }) => Err(anyhow::Error::new(err).context(
            format!(
                "Failed to resolve accelerator config (known boards: {})",
                catalog.board_names().join(", ")
            ),
        )),
        Err(err) => Err(anyhow::Error::new(err).context("Failed to resolve accelerator config")),
    }
}

/// Resolve a configuration and render it as pretty JSON.
///
/// When `write_back` is given, the raw config with all corrections applied
/// is written there.
pub fn cmd_resolve(
    boards: &Path,
    config: &Path,
    board: Option<&str>,
    inputs: &[String],
    outputs: &[String],
    write_back: Option<&Path>,
) -> Result<String> {
    let catalog = load_catalog(boards)?;
    let mut raw = load_raw_config(config)?;
    let resolution = resolve(&catalog, &raw, board, inputs, outputs)?;

    if let Some(path) = write_back {
        resolution.apply_corrections(&mut raw);
        let json = serde_json::to_string_pretty(&raw)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
        info!(path = ?path, corrections = resolution.corrections.len(), "wrote corrected config");
    }

    Ok(serde_json::to_string_pretty(&resolution)?)
}

/// Resolve a configuration and list its derived template paths.
pub fn cmd_paths(boards: &Path, config: &Path, board: Option<&str>) -> Result<String> {
    let catalog = load_catalog(boards)?;
    let raw = load_raw_config(config)?;
    let cfg = resolve(
        &catalog,
        &raw,
        board,
        &["input".to_string()],
        &["output".to_string()],
    )?
    .into_config();

    let tcl = cfg.tcl_script_path()?;
    let mut out = String::new();
    writeln!(out, "driver: {}", cfg.driver_path())?;
    writeln!(out, "wrapper: {}", cfg.wrapper_path())?;
    writeln!(out, "constraints: {}", cfg.constraints_path())?;
    writeln!(out, "tcl: {}", tcl)?;
    Ok(out)
}

/// Parse one precision string and show its byte-aligned form.
pub fn cmd_precision(spec: &str) -> Result<String> {
    let parsed = parse_precision(spec)?;
    let rounded = round_to_byte_boundary(parsed);
    let mut out = String::new();
    writeln!(out, "parsed: {}", parsed)?;
    writeln!(out, "aligned: {}", rounded)?;
    writeln!(out, "bitwidth: {}", rounded.width())?;
    Ok(out)
}

/// List the boards of a registry with their parts.
pub fn cmd_boards(boards: &Path) -> Result<String> {
    let catalog = load_catalog(boards)?;
    let mut out = String::new();
    for (name, info) in catalog.iter() {
        writeln!(out, "{}\t{}", name, info.part)?;
    }
    Ok(out)
}
