//! Decimal conversions.
//!
//! Converts between integers and two's-complement bit vectors. Values are carried as `i128`
//! so that every unsigned and signed 64-bit quantity is exact.

use crate::common::{AluError, Bit, Bits};
use crate::validation::{check_width, parse_integer, validate_value};

/// Encodes `value` as an LSB-first vector of `width` bits.
///
/// Negative values (only legal when `signed`) are stored as `2^width + value`.
///
/// # Arguments
///
/// * `value`  - Integer to encode.
/// * `width`  - Target width in bits, `1..=64`.
/// * `signed` - Selects the two's-complement range `[-2^(w-1), 2^(w-1) - 1]` instead of
///   `[0, 2^w - 1]`.
///
/// # Errors
///
/// [`AluError::InvalidWidth`] for a bad width (checked first), then
/// [`AluError::ValueOutOfRange`] if `value` does not fit.
///
/// # Examples
///
/// ```
/// use hackalu_core::codec::decimal_to_bits;
///
/// assert_eq!(decimal_to_bits(5, 4, false).unwrap().to_raw(), vec![1, 0, 1, 0]);
/// assert_eq!(decimal_to_bits(-5, 4, true).unwrap().to_raw(), vec![1, 1, 0, 1]);
/// ```
pub fn decimal_to_bits(value: i128, width: usize, signed: bool) -> Result<Bits, AluError> {
    check_width(width)?;
    validate_value(value, width, signed)?;

    let encoded = if value < 0 { (1i128 << width) + value } else { value };
    Ok(Bits::from_vec_unchecked(
        (0..width)
            .map(|i| Bit::from_bool((encoded >> i) & 1 == 1))
            .collect(),
    ))
}

/// Decodes an LSB-first vector as an integer.
///
/// Sums `bit[i] * 2^i`; when `signed` and the MSB is set, subtracts `2^width`.
pub fn bits_to_decimal(bits: &Bits, signed: bool) -> i128 {
    let unsigned = i128::from(bits.to_u64());
    if signed && bits.msb() == Bit::One {
        unsigned - (1i128 << bits.width())
    } else {
        unsigned
    }
}

/// Parses decimal text and encodes it as `width` bits.
///
/// # Errors
///
/// [`AluError::NotAnInteger`] for text that is not an integer, otherwise the errors of
/// [`decimal_to_bits`].
pub fn parse_decimal(text: &str, width: usize, signed: bool) -> Result<Bits, AluError> {
    decimal_to_bits(parse_integer(text)?, width, signed)
}
