//! Bit codec.
//!
//! Conversions between fixed-width two's-complement bit vectors and their numeric and
//! textual forms:
//! - [`decimal`]: integers ⇄ bits, plus decimal text parsing
//! - [`text`]:    `0x…` / `0b…` rendering and parsing, and the [`NumericBase`] selector
//! - [`resize`]:  truncation and zero/sign extension
//!
//! Every function returns a fresh vector; inputs are never modified.

/// Integer and decimal-text conversions.
pub mod decimal;

/// Width conversion.
pub mod resize;

/// Hexadecimal and binary text forms.
pub mod text;

pub use decimal::{bits_to_decimal, decimal_to_bits, parse_decimal};
pub use resize::resize_bits;
pub use text::{NumericBase, binary_to_bits, bits_to_binary, bits_to_hex, hex_to_bits};
