//! accel-config: accelerator interface configuration resolution
//!
//! Turns a raw build configuration plus the model's single input and output
//! tensor into an immutable [`AcceleratorConfig`]: board part, wire interface,
//! driver family, byte-aligned I/O types and bit-widths, and the template
//! paths downstream packaging reads from.
//!
//! ```ignore
//! let catalog = StaticCatalog::from_json_str(&registry_json)?;
//! let resolution = AcceleratorConfigResolver::new(&catalog)
//!     .resolve(&raw, &[input], &[output])?;
//! let (in_bits, out_bits) = resolution.config.io_bitwidths();
//! resolution.apply_corrections(&mut raw);
//! ```

mod config;
pub mod corrections;
mod error;
pub mod raw;
pub mod resolver;
pub mod rounding;
pub mod telemetry;

pub use config::{AcceleratorConfig, DEFAULT_TEMPLATE_ROOT};
pub use corrections::ConfigCorrection;
pub use error::{ConfigError, Result};
pub use raw::{RawAcceleratorSection, RawConfig, RawPrecision, TensorDescriptor};
pub use resolver::{AcceleratorConfigResolver, Resolution, DEFAULT_BOARD};
pub use rounding::{next_byte_multiple, round_to_byte_boundary};
pub use telemetry::init_tracing;

pub use accel_precision::{
    BoardInfo, CatalogError, CustomType, DriverKind, InterfaceKind, NumericType,
    PrecisionCatalog, RoundingMode, SaturationMode, StaticCatalog, SymbolicKind,
};
