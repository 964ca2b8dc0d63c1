//! Arithmetic primitives.
//!
//! The gate-level building blocks used by the ripple-carry layer and the Hack ALU:
//! - [`adder`]:  the one-bit full adder
//! - [`negate`]: bitwise inversion and two's-complement negation with a per-bit trace

/// One-bit full adder.
pub mod adder;

/// Inversion and negation.
pub mod negate;

pub use adder::{FullAdderOutput, full_adder};
pub use negate::{IncrementStep, TwosComplement, invert_bits, twos_complement};
