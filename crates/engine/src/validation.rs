//! Input validation.
//!
//! Range and format checks that sit in front of the codec and the engine. It provides:
//! 1. **Width Checks:** Engine bounds (`[1, 64]`) and the narrower interactive bounds (`[4, 64]`).
//! 2. **Value Ranges:** The representable interval for a width and signedness.
//! 3. **Text Checks:** Integer, hexadecimal and binary literal sanitisation.
//! 4. **Shape Checks:** Raw bit slices, raw control words and operation names.
//!
//! Predicates (`is_valid_*`) never fail; validators (`validate_*`, `check_*`, `sanitize_*`)
//! return the matching [`AluError`].

use std::ops::RangeInclusive;

use crate::common::constants::{
    CONTROL_BIT_COUNT, MAX_UI_WIDTH, MAX_WIDTH, MIN_UI_WIDTH, MIN_WIDTH,
};
use crate::common::AluError;
use crate::hack::Operation;

/// Smallest width accepted from interactive callers.
pub const MIN_BIT_WIDTH: usize = MIN_UI_WIDTH;

/// Largest width accepted from interactive callers.
pub const MAX_BIT_WIDTH: usize = MAX_UI_WIDTH;

/// Checks a width against the engine bounds `[1, 64]`.
///
/// # Errors
///
/// Returns [`AluError::InvalidWidth`] when `width` is out of bounds.
pub const fn check_width(width: usize) -> Result<(), AluError> {
    if width < MIN_WIDTH || width > MAX_WIDTH {
        return Err(AluError::InvalidWidth {
            width,
            min: MIN_WIDTH,
            max: MAX_WIDTH,
        });
    }
    Ok(())
}

/// Returns `true` when `width` is within the interactive bounds `[4, 64]`.
pub const fn is_valid_width(width: usize) -> bool {
    width >= MIN_BIT_WIDTH && width <= MAX_BIT_WIDTH
}

/// Checks a width against the interactive bounds `[4, 64]`.
///
/// # Errors
///
/// Returns [`AluError::InvalidWidth`] when `width` is out of bounds.
pub const fn validate_width(width: usize) -> Result<(), AluError> {
    if !is_valid_width(width) {
        return Err(AluError::InvalidWidth {
            width,
            min: MIN_BIT_WIDTH,
            max: MAX_BIT_WIDTH,
        });
    }
    Ok(())
}

/// Interval of integers representable in `width` bits under the engine bounds.
///
/// Signed widths cover `[-2^(w-1), 2^(w-1) - 1]`; unsigned widths cover `[0, 2^w - 1]`.
///
/// # Errors
///
/// Returns [`AluError::InvalidWidth`] if `width` is outside `[1, 64]`.
pub fn representable_range(width: usize, signed: bool) -> Result<RangeInclusive<i128>, AluError> {
    check_width(width)?;
    let span = 1i128 << width;
    Ok(if signed {
        -(span >> 1)..=(span >> 1) - 1
    } else {
        0..=span - 1
    })
}

/// Interval of integers representable in `width` bits under the interactive bounds.
///
/// # Errors
///
/// Returns [`AluError::InvalidWidth`] if `width` is outside `[4, 64]`.
pub fn value_range(width: usize, signed: bool) -> Result<RangeInclusive<i128>, AluError> {
    validate_width(width)?;
    representable_range(width, signed)
}

/// Returns `true` when `value` fits `width` bits (interactive bounds).
pub fn is_valid_value(value: i128, width: usize, signed: bool) -> bool {
    value_range(width, signed).is_ok_and(|range| range.contains(&value))
}

/// Checks that `value` fits `width` bits under the engine bounds.
///
/// # Errors
///
/// Returns [`AluError::InvalidWidth`] for a bad width, or [`AluError::ValueOutOfRange`]
/// naming the permitted interval.
pub fn validate_value(value: i128, width: usize, signed: bool) -> Result<(), AluError> {
    let range = representable_range(width, signed)?;
    if !range.contains(&value) {
        return Err(AluError::ValueOutOfRange {
            value,
            width,
            signed,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// Parses decimal text as an integer.
///
/// Accepts surrounding whitespace and one optional leading `+` or `-`. Anything else
/// (fractions, exponents, stray characters, empty text) is not an integer.
///
/// # Errors
///
/// Returns [`AluError::NotAnInteger`] for malformed text, or [`AluError::LiteralTooLarge`]
/// when the digits do not fit an `i128`.
pub fn parse_integer(text: &str) -> Result<i128, AluError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AluError::NotAnInteger {
            input: text.to_owned(),
        });
    }
    trimmed.parse::<i128>().map_err(|_| AluError::LiteralTooLarge {
        literal: text.to_owned(),
    })
}

/// Strips an optional `0x`/`0X` prefix and checks the remaining digits.
///
/// # Errors
///
/// Returns [`AluError::InvalidHex`] if no digits remain or any character is not a hex digit.
pub fn sanitize_hex_string(text: &str) -> Result<&str, AluError> {
    let trimmed = text.trim();
    let digits = strip_radix_prefix(trimmed, 'x');
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AluError::InvalidHex {
            input: text.to_owned(),
        });
    }
    Ok(digits)
}

/// Strips an optional `0b`/`0B` prefix and checks the remaining digits.
///
/// # Errors
///
/// Returns [`AluError::InvalidBinary`] if no digits remain or any character is not `0` or `1`.
pub fn sanitize_binary_string(text: &str) -> Result<&str, AluError> {
    let trimmed = text.trim();
    let digits = strip_radix_prefix(trimmed, 'b');
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(AluError::InvalidBinary {
            input: text.to_owned(),
        });
    }
    Ok(digits)
}

fn strip_radix_prefix(text: &str, marker: char) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some('0'), Some(c)) if c.eq_ignore_ascii_case(&marker) => chars.as_str(),
        _ => text,
    }
}

/// Returns `true` when every value is 0 or 1 and, if given, the length matches.
pub fn is_valid_bits(values: &[u8], expected_width: Option<usize>) -> bool {
    if expected_width.is_some_and(|w| values.len() != w) {
        return false;
    }
    values.iter().all(|&v| v <= 1)
}

/// Returns `true` for exactly six values of 0 or 1 (`zx nx zy ny f no`).
pub fn is_valid_control_bits(values: &[u8]) -> bool {
    is_valid_bits(values, Some(CONTROL_BIT_COUNT))
}

/// Returns `true` when `name` is one of the 18 Hack ALU operation symbols.
pub fn is_valid_operation(name: &str) -> bool {
    name.parse::<Operation>().is_ok()
}

/// All 18 operation symbols in truth-table order.
pub fn valid_operations() -> impl Iterator<Item = &'static str> {
    Operation::ALL.into_iter().map(Operation::symbol)
}
