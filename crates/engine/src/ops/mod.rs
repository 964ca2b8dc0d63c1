//! Ripple-carry operation layer.
//!
//! Generic addition and subtraction over any width, with a per-bit trace and flag
//! derivation:
//! - [`ripple`]: `add_stepwise`, `add_full`, `sub_via_twos_complement`
//! - [`flags`]:  the [`Flags`] record and the single overflow definition

/// Status flags.
pub mod flags;

/// Ripple-carry addition and subtraction.
pub mod ripple;

pub use flags::{Flags, signed_overflow};
pub use ripple::{AluResult, StepState, add_full, add_stepwise, sub_via_twos_complement};
