//! Precision-string parsing.
//!
//! Grammar (whitespace around tokens is ignored):
//!
//! ```text
//! float | double
//! [ap_]fixed<W,I[,Q[,O[,N]]]>  | [ap_]ufixed<W,I[,Q[,O[,N]]]>
//! [ap_]int<W>                  | [ap_]uint<W>
//! ```
//!
//! `Q` is a rounding mode (`TRN`, `RND`, ...), `O` a saturation mode
//! (`WRAP`, `SAT`, ...) and `N` the saturation bit count.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CatalogError;
use crate::types::{CustomType, NumericType, RoundingMode, SaturationMode};

fn custom_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:ap_)?(u?)(fixed|int)\s*<([^<>]*)>$").expect("static precision pattern")
    })
}

/// Parse a precision specification into a concrete numeric type.
pub fn parse_precision(spec: &str) -> Result<NumericType, CatalogError> {
    let trimmed = spec.trim();
    match trimmed {
        "float" => return Ok(NumericType::FLOAT),
        "double" => return Ok(NumericType::DOUBLE),
        _ => {}
    }

    let caps = custom_pattern()
        .captures(trimmed)
        .ok_or_else(|| CatalogError::invalid(spec, "expected float, double, fixed<..> or int<..>"))?;

    let signed = caps[1].is_empty();
    let is_fixed = &caps[2] == "fixed";
    let params: Vec<&str> = caps[3].split(',').map(str::trim).collect();

    let width = parse_bits(spec, "width", params[0])?;
    if width == 0 {
        return Err(CatalogError::invalid(spec, "width must be positive"));
    }
    if width > CustomType::MAX_WIDTH {
        return Err(CatalogError::invalid(
            spec,
            format!("width exceeds {} bits", CustomType::MAX_WIDTH),
        ));
    }

    if !is_fixed {
        if params.len() > 1 {
            return Err(CatalogError::invalid(
                spec,
                "integer types take exactly one parameter",
            ));
        }
        return Ok(CustomType::integer(width, signed).into());
    }

    if params.len() < 2 {
        return Err(CatalogError::invalid(
            spec,
            "fixed types need at least width and integer bits",
        ));
    }
    if params.len() > 5 {
        return Err(CatalogError::invalid(spec, "too many parameters"));
    }

    let integer_bits = parse_bits(spec, "integer bits", params[1])?;
    if integer_bits > width {
        return Err(CatalogError::invalid(
            spec,
            format!(
                "integer bits ({}) exceed width ({})",
                integer_bits, width
            ),
        ));
    }

    let mut custom = CustomType::fixed(width, integer_bits, signed);
    if let Some(q) = params.get(2) {
        custom.rounding_mode = q
            .parse::<RoundingMode>()
            .map_err(|e| CatalogError::invalid(spec, e))?;
    }
    if let Some(o) = params.get(3) {
        custom.saturation_mode = o
            .parse::<SaturationMode>()
            .map_err(|e| CatalogError::invalid(spec, e))?;
    }
    if let Some(n) = params.get(4) {
        custom.saturation_bits = parse_bits(spec, "saturation bits", n)?;
    }

    Ok(custom.into())
}

fn parse_bits(spec: &str, what: &str, raw: &str) -> Result<u32, CatalogError> {
    raw.parse::<u32>()
        .map_err(|_| CatalogError::invalid(spec, format!("{} '{}' is not a bit count", what, raw)))
}
