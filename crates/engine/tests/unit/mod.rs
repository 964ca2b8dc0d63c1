//! # Unit Components
//!
//! Fine-grained tests for each layer of the engine, from single bits up to the
//! interactive session.

/// Bits, bit vectors and errors.
pub mod common;


/// Full adder, inversion and two's-complement negation.
pub mod arith;


/// The Hack ALU pipeline, its control bits and the operation table.
pub mod hack;




/// Algebraic laws checked over random and exhaustive inputs.
pub mod properties;
