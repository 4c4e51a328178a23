//! Corrections the resolver asks the caller to write back.
//!
//! Resolution never mutates the raw configuration. Anything it had to fix or
//! synthesize is returned as a [`ConfigCorrection`] which the caller applies
//! explicitly with [`ConfigCorrection::apply`].

use std::fmt;

use serde::Serialize;

use crate::raw::{RawAcceleratorSection, RawConfig};

/// A change the resolver made relative to the raw configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConfigCorrection {
    /// `XilinxPart` disagreed with the board's canonical part.
    PartCorrected { requested: String, canonical: String },

    /// No `AcceleratorConfig` was given; this default was used instead.
    AcceleratorSectionSynthesized { section: RawAcceleratorSection },
}

impl ConfigCorrection {
    /// Write this correction into `raw`.
    pub fn apply(&self, raw: &mut RawConfig) {
        match self {
            ConfigCorrection::PartCorrected { canonical, .. } => {
                raw.xilinx_part = Some(canonical.clone());
            }
            ConfigCorrection::AcceleratorSectionSynthesized { section } => {
                raw.accelerator = Some(section.clone());
            }
        }
    }

    /// Whether the correction overrode something the user asked for.
    pub fn is_warning(&self) -> bool {
        match self {
            ConfigCorrection::PartCorrected { .. } => true,
            ConfigCorrection::AcceleratorSectionSynthesized { .. } => false,
        }
    }
}

impl fmt::Display for ConfigCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigCorrection::PartCorrected {
                requested,
                canonical,
            } => write!(
                f,
                "XilinxPart '{}' does not correspond to the board; using '{}'",
                requested, canonical
            ),
            ConfigCorrection::AcceleratorSectionSynthesized { .. } => {
                write!(f, "no AcceleratorConfig given; using default section")
            }
        }
    }
}
