//! Byte-alignment of custom wire types.

use accel_precision::{CustomType, NumericType};

/// Smallest multiple of 8 that is `>= width`.
///
/// Parsed types never exceed [`CustomType::MAX_WIDTH`]. Hand-built widths
/// past the last representable multiple saturate to it instead of wrapping.
pub fn next_byte_multiple(width: u32) -> u32 {
    width
        .checked_next_multiple_of(8)
        .unwrap_or(u32::MAX - u32::MAX % 8)
}

/// Round a custom type's storage width up to the next byte boundary.
///
/// Only `width` changes; integer bits, signedness and the quantization and
/// overflow modes are carried over as-is. Symbolic types are returned
/// unchanged. Idempotent.
///
/// Integer bits are kept, so a plain integer whose width is not a byte
/// multiple gains fractional bits: `ap_int<13>` becomes `ap_fixed<16,13>`,
/// with 3 fractional bits on the wire and the same value range.
pub fn round_to_byte_boundary(ty: NumericType) -> NumericType {
    match ty {
        NumericType::Symbolic { .. } => ty,
        NumericType::Custom(custom) => NumericType::Custom(CustomType {
            width: next_byte_multiple(custom.width),
            ..custom
        }),
    }
}
