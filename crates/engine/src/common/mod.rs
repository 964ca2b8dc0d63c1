//! Common types and constants used throughout the ALU engine.
//!
//! This module provides the building blocks shared by every layer. It includes:
//! 1. **Bits:** The [`Bit`] digit and the fixed-width, LSB-first [`Bits`] vector.
//! 2. **Constants:** Width bounds for the engine and for interactive callers.
//! 3. **Error Handling:** The [`AluError`] type and its [`ErrorKind`] classification.

/// Single binary digit.
pub mod bit;

/// Fixed-width bit vectors.
pub mod bits;

/// Width bounds and Hack constants.
pub mod constants;

/// Error types.
pub mod error;

pub use bit::Bit;
pub use bits::Bits;
pub use constants::{HACK_WORD_WIDTH, MAX_WIDTH, MIN_WIDTH};
pub use error::{AluError, ErrorKind};
