//! accel-precision: numeric wire types and board catalog for accelcfg
//!
//! Leaf crate consulted by configuration resolution. It converts textual
//! precision specifications (`float`, `double`, `ap_fixed<W,I,..>`,
//! `ap_int<W>`) into [`NumericType`] values and looks up board metadata by
//! name through the [`PrecisionCatalog`] trait.
//!
//! ## Key Components
//!
//! - `NumericType`: symbolic float/double or custom fixed/integer format
//! - `parse_precision`: precision-string grammar
//! - `StaticCatalog`: read-only in-memory board registry

mod board;
pub mod catalog;
mod error;
mod interface;
pub mod parse;
mod types;

pub use board::BoardInfo;
pub use catalog::{PrecisionCatalog, StaticCatalog};
pub use error::CatalogError;
pub use interface::{DriverKind, InterfaceKind};
pub use parse::parse_precision;
pub use types::{CustomType, NumericType, RoundingMode, SaturationMode, SymbolicKind};

/// Result type for accel-precision operations
pub type Result<T> = std::result::Result<T, CatalogError>;
