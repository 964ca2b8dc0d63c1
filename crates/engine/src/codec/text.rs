//! Hexadecimal and binary text forms.
//!
//! Rendering is total: any vector renders. Parsing treats the digits as an unsigned
//! quantity and delegates range checking to [`decimal_to_bits`] with `signed = false`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::decimal::{bits_to_decimal, decimal_to_bits, parse_decimal};
use crate::common::{AluError, Bits};
use crate::validation::{sanitize_binary_string, sanitize_hex_string};

/// Renders `bits` as `0x` followed by `ceil(width / 4)` upper-case hex digits.
///
/// # Examples
///
/// ```
/// use hackalu_core::codec::{bits_to_hex, decimal_to_bits};
///
/// assert_eq!(bits_to_hex(&decimal_to_bits(5, 4, false).unwrap()), "0x5");
/// assert_eq!(bits_to_hex(&decimal_to_bits(5, 9, false).unwrap()), "0x005");
/// ```
pub fn bits_to_hex(bits: &Bits) -> String {
    let digits = bits.width().div_ceil(4);
    format!("0x{:0digits$X}", bits.to_u64())
}

/// Renders `bits` as `0b` followed by every bit, MSB first.
pub fn bits_to_binary(bits: &Bits) -> String {
    bits.to_string()
}

/// Parses hexadecimal text (optional `0x` prefix) as an unsigned `width`-bit value.
///
/// # Errors
///
/// [`AluError::InvalidHex`] for non-hex characters or empty digits,
/// [`AluError::LiteralTooLarge`] for literals beyond 128 bits, otherwise the range errors
/// of [`decimal_to_bits`].
pub fn hex_to_bits(text: &str, width: usize) -> Result<Bits, AluError> {
    let digits = sanitize_hex_string(text)?;
    decimal_to_bits(parse_unsigned(text, digits, 16)?, width, false)
}

/// Parses binary text (optional `0b` prefix) as an unsigned `width`-bit value.
///
/// # Errors
///
/// [`AluError::InvalidBinary`] for characters other than `0`/`1` or empty digits,
/// [`AluError::LiteralTooLarge`] for literals beyond 128 bits, otherwise the range errors
/// of [`decimal_to_bits`].
pub fn binary_to_bits(text: &str, width: usize) -> Result<Bits, AluError> {
    let digits = sanitize_binary_string(text)?;
    decimal_to_bits(parse_unsigned(text, digits, 2)?, width, false)
}

fn parse_unsigned(literal: &str, digits: &str, radix: u32) -> Result<i128, AluError> {
    u128::from_str_radix(digits, radix)
        .ok()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or_else(|| AluError::LiteralTooLarge {
            literal: literal.to_owned(),
        })
}

/// Radix used to display and enter operand values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericBase {
    /// Base 10; honours the signed/unsigned interpretation.
    #[default]
    Decimal,
    /// Base 16 with a `0x` prefix; always unsigned.
    Hex,
    /// Base 2 with a `0b` prefix; always unsigned.
    Binary,
}

impl NumericBase {
    /// Every base, in display order.
    pub const ALL: [Self; 3] = [Self::Decimal, Self::Hex, Self::Binary];

    /// Renders `bits` in this base.
    pub fn format(self, bits: &Bits, signed: bool) -> String {
        match self {
            Self::Decimal => bits_to_decimal(bits, signed).to_string(),
            Self::Hex => bits_to_hex(bits),
            Self::Binary => bits_to_binary(bits),
        }
    }

    /// Parses `text` in this base into `width` bits.
    ///
    /// `signed` only affects [`NumericBase::Decimal`]; hex and binary literals are raw
    /// unsigned patterns.
    ///
    /// # Errors
    ///
    /// The errors of [`parse_decimal`], [`hex_to_bits`] or [`binary_to_bits`].
    pub fn parse(self, text: &str, width: usize, signed: bool) -> Result<Bits, AluError> {
        match self {
            Self::Decimal => parse_decimal(text, width, signed),
            Self::Hex => hex_to_bits(text, width),
            Self::Binary => binary_to_bits(text, width),
        }
    }

    /// Short lowercase name (`decimal`, `hex`, `binary`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Hex => "hex",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for NumericBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "decimal" | "dec" => Ok(Self::Decimal),
            "hex" | "hexadecimal" => Ok(Self::Hex),
            "binary" | "bin" => Ok(Self::Binary),
            other => Err(format!("unknown numeric base: {other}")),
        }
    }
}
