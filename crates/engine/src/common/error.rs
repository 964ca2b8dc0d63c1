//! Engine error definitions.
//!
//! This module defines the single error type returned by every fallible engine call. It provides:
//! 1. **Error Variants:** One variant per distinct failure, carrying the offending input.
//! 2. **Classification:** An [`ErrorKind`] grouping variants into range, type, width-mismatch
//!    and unknown-operation failures, so callers can react to the category without matching
//!    every variant.
//!
//! All errors are deterministic: retrying a call with the same input fails identically.

use thiserror::Error;

/// Failure category of an [`AluError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeric quantity (width or value) lies outside its permitted range.
    Range,
    /// An input has the wrong shape: non-integer text, illegal digits, a bit other than 0/1.
    Type,
    /// Two operands that must share a width do not.
    WidthMismatch,
    /// A named operation is not in the Hack ALU truth table.
    UnknownOperation,
}

/// Errors raised by the codec, the arithmetic layers and the Hack ALU engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AluError {
    /// Width outside the permitted `[min, max]` bounds.
    #[error("width must be an integer between {min} and {max}, got {width}")]
    InvalidWidth {
        /// Requested width.
        width: usize,
        /// Smallest permitted width.
        min: usize,
        /// Largest permitted width.
        max: usize,
    },

    /// Integer not representable at the requested width and signedness.
    #[error(
        "{} {width}-bit value must be in range [{min}, {max}], got {value}",
        signedness(.signed)
    )]
    ValueOutOfRange {
        /// Offending value.
        value: i128,
        /// Target width.
        width: usize,
        /// Whether the two's-complement range was applied.
        signed: bool,
        /// Lower bound of the permitted range.
        min: i128,
        /// Upper bound of the permitted range.
        max: i128,
    },

    /// Textual literal too large to parse at all.
    #[error("literal {literal:?} exceeds the representable range")]
    LiteralTooLarge {
        /// The literal as supplied.
        literal: String,
    },

    /// Decimal text that does not spell an integer.
    #[error("value must be an integer, got {input:?}")]
    NotAnInteger {
        /// The text as supplied.
        input: String,
    },

    /// Text containing characters outside `[0-9a-fA-F]` (after an optional `0x`).
    #[error("invalid hexadecimal string {input:?}")]
    InvalidHex {
        /// The text as supplied.
        input: String,
    },

    /// Text containing characters outside `[01]` (after an optional `0b`).
    #[error("invalid binary string {input:?}")]
    InvalidBinary {
        /// The text as supplied.
        input: String,
    },

    /// Raw value offered as a bit that is neither 0 nor 1.
    #[error("bit must be 0 or 1, got {value}")]
    InvalidBit {
        /// The raw value.
        value: u8,
    },

    /// Raw control word that is not exactly six 0/1 values.
    #[error("control bits must be six values of 0 or 1 (zx nx zy ny f no), got {len} values")]
    InvalidControlBits {
        /// Number of values supplied.
        len: usize,
    },

    /// Operands of different widths.
    #[error("width mismatch: operands must have the same width ({left} bits vs {right} bits)")]
    WidthMismatch {
        /// Width of the first operand.
        left: usize,
        /// Width of the second operand.
        right: usize,
    },

    /// Name not found in the operation table.
    #[error("unknown operation: {name:?}")]
    UnknownOperation {
        /// The name as supplied.
        name: String,
    },
}

impl AluError {
    /// Returns the failure category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWidth { .. } | Self::ValueOutOfRange { .. } | Self::LiteralTooLarge { .. } => {
                ErrorKind::Range
            }
            Self::NotAnInteger { .. }
            | Self::InvalidHex { .. }
            | Self::InvalidBinary { .. }
            | Self::InvalidBit { .. }
            | Self::InvalidControlBits { .. } => ErrorKind::Type,
            Self::WidthMismatch { .. } => ErrorKind::WidthMismatch,
            Self::UnknownOperation { .. } => ErrorKind::UnknownOperation,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn signedness(signed: &bool) -> &'static str {
    if *signed { "Signed" } else { "Unsigned" }
}
