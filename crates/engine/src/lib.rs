//! Bit-precise Hack ALU simulation library.
//!
//! This crate models the Nand2Tetris Hack ALU at the level of individual bits, for any
//! operand width from 1 to 64. It provides:
//! 1. **Codec:** Conversions between integers, `0x`/`0b` text and fixed-width bit vectors.
//! 2. **Arithmetic:** The full adder, bitwise inversion and two's-complement negation.
//! 3. **Ripple Carry:** Addition and subtraction with a per-bit trace and status flags.
//! 4. **Hack ALU:** The six-control-bit pipeline, its 18 named operations and a four-stage trace.
//! 5. **Session:** Caller-owned interactive state with playback, configuration and snapshots.
//!
//! Everything below [`session`] is pure: inputs are borrowed and never modified, and every
//! result is freshly allocated.

/// Common types (bits, bit vectors, constants, errors).
pub mod common;
/// Session configuration (defaults, JSON loading, validation).
pub mod config;
/// Bit codec (decimal, hex, binary, resize).
pub mod codec;
/// Arithmetic primitives (full adder, inversion, negation).
pub mod arith;
/// Ripple-carry operation layer and flags.
pub mod ops;
/// Hack ALU engine (control bits, operations, pipeline).
pub mod hack;
/// Interactive session state.
pub mod session;
/// Input validation and range policy.
pub mod validation;

pub use crate::common::{AluError, Bit, Bits};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
pub use crate::hack::{
    ControlBits, HackAlu, HackAluResult, Operation, hack_alu, hack_alu_by_operation,
};
/// Caller-owned interactive state; construct with `AluSession::new`.
pub use crate::session::AluSession;
