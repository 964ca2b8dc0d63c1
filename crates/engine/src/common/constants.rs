//! Global Engine Constants.
//!
//! This module defines the width bounds shared by every layer of the engine. It includes:
//! 1. **Engine Bounds:** The widest and narrowest bit vectors the codec accepts.
//! 2. **Interface Bounds:** The narrower range offered to interactive callers.
//! 3. **Hack Constants:** The native word size of the Hack computer.

/// Narrowest bit vector the engine can represent.
pub const MIN_WIDTH: usize = 1;

/// Widest bit vector the engine can represent.
///
/// Values are carried as `i128` internally, so both the signed and the
/// unsigned range of a 64-bit vector are exact.
pub const MAX_WIDTH: usize = 64;

/// Narrowest width offered to interactive callers (widths 1-3 are engine-only).
pub const MIN_UI_WIDTH: usize = 4;

/// Widest width offered to interactive callers.
pub const MAX_UI_WIDTH: usize = MAX_WIDTH;

/// Word size of the Hack computer, and the default session width.
pub const HACK_WORD_WIDTH: usize = 16;

/// Number of control inputs on the Hack ALU (`zx nx zy ny f no`).
pub const CONTROL_BIT_COUNT: usize = 6;

/// Number of named operations in the Hack ALU truth table.
pub const OPERATION_COUNT: usize = 18;

/// Number of pipeline stages in every Hack ALU evaluation.
pub const STAGE_COUNT: usize = 4;
