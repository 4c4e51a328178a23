//! Numeric wire types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named floating-point formats with a fixed width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymbolicKind {
    Float,
    Double,
}

impl SymbolicKind {
    /// Canonical bit-width of the format.
    pub fn width(&self) -> u32 {
        match self {
            SymbolicKind::Float => 32,
            SymbolicKind::Double => 64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolicKind::Float => "float",
            SymbolicKind::Double => "double",
        }
    }
}

/// Quantization applied when a value has more fractional bits than the type.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    #[default]
    #[serde(rename = "TRN")]
    Trn,
    #[serde(rename = "TRN_ZERO")]
    TrnZero,
    #[serde(rename = "RND")]
    Rnd,
    #[serde(rename = "RND_ZERO")]
    RndZero,
    #[serde(rename = "RND_INF")]
    RndInf,
    #[serde(rename = "RND_MIN_INF")]
    RndMinInf,
    #[serde(rename = "RND_CONV")]
    RndConv,
}

impl RoundingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::Trn => "TRN",
            RoundingMode::TrnZero => "TRN_ZERO",
            RoundingMode::Rnd => "RND",
            RoundingMode::RndZero => "RND_ZERO",
            RoundingMode::RndInf => "RND_INF",
            RoundingMode::RndMinInf => "RND_MIN_INF",
            RoundingMode::RndConv => "RND_CONV",
        }
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRN" => Ok(RoundingMode::Trn),
            "TRN_ZERO" => Ok(RoundingMode::TrnZero),
            "RND" => Ok(RoundingMode::Rnd),
            "RND_ZERO" => Ok(RoundingMode::RndZero),
            "RND_INF" => Ok(RoundingMode::RndInf),
            "RND_MIN_INF" => Ok(RoundingMode::RndMinInf),
            "RND_CONV" => Ok(RoundingMode::RndConv),
            other => Err(format!("unknown rounding mode '{}'", other)),
        }
    }
}

/// Overflow behaviour when a value exceeds the integer range of the type.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SaturationMode {
    #[default]
    #[serde(rename = "WRAP")]
    Wrap,
    #[serde(rename = "SAT")]
    Sat,
    #[serde(rename = "SAT_ZERO")]
    SatZero,
    #[serde(rename = "SAT_SYM")]
    SatSym,
}

impl SaturationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaturationMode::Wrap => "WRAP",
            SaturationMode::Sat => "SAT",
            SaturationMode::SatZero => "SAT_ZERO",
            SaturationMode::SatSym => "SAT_SYM",
        }
    }
}

impl FromStr for SaturationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WRAP" => Ok(SaturationMode::Wrap),
            "SAT" => Ok(SaturationMode::Sat),
            "SAT_ZERO" => Ok(SaturationMode::SatZero),
            "SAT_SYM" => Ok(SaturationMode::SatSym),
            other => Err(format!("unknown saturation mode '{}'", other)),
        }
    }
}

/// Fixed-point or plain integer format.
///
/// Invariant: `0 < width <= MAX_WIDTH` and `integer_bits <= width`. Plain
/// integers are represented with `integer_bits == width`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CustomType {
    pub width: u32,
    pub integer_bits: u32,
    pub signed: bool,
    #[serde(default)]
    pub rounding_mode: RoundingMode,
    #[serde(default)]
    pub saturation_mode: SaturationMode,
    #[serde(default)]
    pub saturation_bits: u32,
}

impl CustomType {
    /// Widest `ap_[u]int`/`ap_[u]fixed` HLS accepts (`AP_INT_MAX_W` ceiling).
    pub const MAX_WIDTH: u32 = 32768;

    /// Fixed-point type with default quantization and overflow modes.
    pub fn fixed(width: u32, integer_bits: u32, signed: bool) -> Self {
        Self {
            width,
            integer_bits,
            signed,
            rounding_mode: RoundingMode::default(),
            saturation_mode: SaturationMode::default(),
            saturation_bits: 0,
        }
    }

    /// Plain integer of `width` bits.
    pub fn integer(width: u32, signed: bool) -> Self {
        Self::fixed(width, width, signed)
    }

    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    pub fn with_saturation(mut self, mode: SaturationMode, bits: u32) -> Self {
        self.saturation_mode = mode;
        self.saturation_bits = bits;
        self
    }

    /// Number of fractional bits.
    pub fn fractional_bits(&self) -> u32 {
        self.width.saturating_sub(self.integer_bits)
    }

    /// True when the type has no fractional part and only default modes,
    /// i.e. it spells as `ap_int`/`ap_uint`.
    pub fn is_plain_integer(&self) -> bool {
        self.integer_bits == self.width
            && self.rounding_mode == RoundingMode::default()
            && self.saturation_mode == SaturationMode::default()
            && self.saturation_bits == 0
    }
}

/// HLS spelling. Only `integer_bits == width` with default modes renders as
/// `ap_[u]int<W>`; an integer widened by byte rounding keeps its integer bits
/// and renders as `ap_[u]fixed<W,I>` with `W - I` fractional bits.
impl fmt::Display for CustomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = if self.signed { "" } else { "u" };
        if self.is_plain_integer() {
            return write!(f, "ap_{}int<{}>", u, self.width);
        }

        write!(f, "ap_{}fixed<{},{}", u, self.width, self.integer_bits)?;
        let needs_bits = self.saturation_bits != 0;
        let needs_sat = needs_bits || self.saturation_mode != SaturationMode::default();
        let needs_round = needs_sat || self.rounding_mode != RoundingMode::default();
        if needs_round {
            write!(f, ",{}", self.rounding_mode.as_str())?;
        }
        if needs_sat {
            write!(f, ",{}", self.saturation_mode.as_str())?;
        }
        if needs_bits {
            write!(f, ",{}", self.saturation_bits)?;
        }
        write!(f, ">")
    }
}

/// Concrete numeric type carried on the accelerator wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum NumericType {
    Symbolic { kind: SymbolicKind },
    Custom(CustomType),
}

impl NumericType {
    pub const FLOAT: NumericType = NumericType::Symbolic {
        kind: SymbolicKind::Float,
    };
    pub const DOUBLE: NumericType = NumericType::Symbolic {
        kind: SymbolicKind::Double,
    };

    /// Storage width in bits.
    pub fn width(&self) -> u32 {
        match self {
            NumericType::Symbolic { kind } => kind.width(),
            NumericType::Custom(custom) => custom.width,
        }
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, NumericType::Symbolic { .. })
    }

    pub fn as_custom(&self) -> Option<&CustomType> {
        match self {
            NumericType::Custom(custom) => Some(custom),
            NumericType::Symbolic { .. } => None,
        }
    }
}

impl From<CustomType> for NumericType {
    fn from(custom: CustomType) -> Self {
        NumericType::Custom(custom)
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericType::Symbolic { kind } => f.write_str(kind.as_str()),
            NumericType::Custom(custom) => fmt::Display::fmt(custom, f),
        }
    }
}
