//! Hack ALU engine.
//!
//! This module implements the ALU of the Nand2Tetris Hack computer, generalised to any
//! operand width in [1, 64]. It provides:
//! 1. **Control:** [`ControlBits`], the six selector inputs `zx nx zy ny f no`.
//! 2. **Catalog:** [`Operation`], the 18 named functions and their fixed control words.
//! 3. **Pipeline:** [`HackAlu`], which runs the four stages (preprocess x, preprocess y,
//!    compute, postprocess) in order and records one [`HackStepState`] per stage.
//!
//! The function unit adds with the ripple-carry chain from [`crate::ops`]; overflow and
//! carry come from that same pass over the processed operands.

/// Control inputs.
pub mod control;

/// Named operations.
pub mod operation;

/// Stage identifiers and trace records.
pub mod stage;

pub use control::{ControlBit, ControlBits};
pub use operation::Operation;
pub use stage::{HackStepState, Stage, StageOutput};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::common::{AluError, Bit, Bits};
use crate::ops::{Flags, add_full};
use crate::ops::ripple::ensure_same_width;

/// Result of one Hack ALU evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackAluResult {
    /// ALU output.
    pub result: Bits,
    /// Flags of the output; `overflow` and `carry` are only set when `f = 1`.
    ///
    /// `overflow` is the carry mismatch at the MSB of the adder, before `no`. For operations
    /// with `no = 1` (`x-y`, `-x`, `x+1`, ...) it can differ from a sign
    /// comparison of the processed operands against the final result.
    pub flags: Flags,
    /// One entry per stage, in [`Stage::ALL`] order.
    pub steps: Vec<HackStepState>,
    /// x after `zx`.
    pub x_after_zx: Bits,
    /// x after `zx` and `nx`.
    pub x_after_nx: Bits,
    /// y after `zy`.
    pub y_after_zy: Bits,
    /// y after `zy` and `ny`.
    pub y_after_ny: Bits,
    /// Function unit output, before `no`.
    pub raw_output: Bits,
}

impl HackAluResult {
    /// Trace entry for `stage`.
    pub fn step(&self, stage: Stage) -> Option<&HackStepState> {
        self.steps.get(stage.index())
    }
}

/// The Hack ALU.
///
/// Stateless; every call builds fresh output vectors and never touches its inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct HackAlu;

impl HackAlu {
    /// Runs the pipeline on `x` and `y` under `control`.
    ///
    /// # Arguments
    ///
    /// * `x`       - First operand.
    /// * `y`       - Second operand, same width as `x`.
    /// * `control` - The six selector inputs.
    ///
    /// # Returns
    ///
    /// The output, its flags, the four-stage trace and every intermediate vector.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::WidthMismatch`] if `x` and `y` differ in width.
    ///
    /// # Examples
    ///
    /// ```
    /// use hackalu_core::codec::{bits_to_decimal, decimal_to_bits};
    /// use hackalu_core::hack::{HackAlu, Operation};
    ///
    /// let x = decimal_to_bits(7, 16, true).unwrap();
    /// let y = decimal_to_bits(9, 16, true).unwrap();
    /// let out = HackAlu::execute(&x, &y, Operation::XMinusY.control_bits()).unwrap();
    /// assert_eq!(bits_to_decimal(&out.result, true), -2);
    /// assert!(out.flags.sign);
    /// ```
    pub fn execute(x: &Bits, y: &Bits, control: ControlBits) -> Result<HackAluResult, AluError> {
        ensure_same_width(x, y)?;
        let width = x.width();

        let (x_after_zx, x_after_nx) = preprocess(x, control.zx, control.nx);
        let (y_after_zy, y_after_ny) = preprocess(y, control.zy, control.ny);
        trace!(
            stage = Stage::PreprocessX.name(),
            width,
            x = %x_after_nx,
            "hack stage"
        );
        trace!(
            stage = Stage::PreprocessY.name(),
            width,
            y = %y_after_ny,
            "hack stage"
        );

        let (raw_output, overflow, carry) = if control.f.is_set() {
            let sum = add_full(&x_after_nx, &y_after_ny, true)?;
            (sum.result, sum.flags.overflow, sum.flags.carry)
        } else {
            (x_after_nx.zip_with(&y_after_ny, |a, b| a & b), false, false)
        };
        trace!(stage = Stage::Compute.name(), width, raw = %raw_output, "hack stage");

        let result = if control.no.is_set() {
            !&raw_output
        } else {
            raw_output.clone()
        };
        trace!(stage = Stage::Postprocess.name(), width, out = %result, "hack stage");

        let flags = Flags {
            zero: result.is_zero(),
            sign: result.msb() == Bit::One,
            overflow,
            carry,
        };

        let steps = vec![
            HackStepState {
                description: describe_preprocess("x", control.zx, control.nx),
                output: StageOutput::PreprocessX {
                    x_processed: x_after_nx.clone(),
                },
            },
            HackStepState {
                description: describe_preprocess("y", control.zy, control.ny),
                output: StageOutput::PreprocessY {
                    y_processed: y_after_ny.clone(),
                },
            },
            HackStepState {
                description: format!(
                    "Compute: {} processed inputs",
                    if control.f.is_set() { "add" } else { "and" }
                ),
                output: StageOutput::Compute {
                    x_processed: x_after_nx.clone(),
                    y_processed: y_after_ny.clone(),
                    raw_result: raw_output.clone(),
                },
            },
            HackStepState {
                description: format!(
                    "Postprocess: {} output",
                    if control.no.is_set() { "negate" } else { "keep" }
                ),
                output: StageOutput::Postprocess {
                    raw_result: raw_output.clone(),
                    final_result: result.clone(),
                },
            },
        ];

        debug!(
            control = %control,
            operation = control.operation().map_or("-", Operation::symbol),
            width,
            result = %result,
            zero = flags.zero,
            sign = flags.sign,
            overflow = flags.overflow,
            carry = flags.carry,
            "hack alu evaluated"
        );

        Ok(HackAluResult {
            result,
            flags,
            steps,
            x_after_zx,
            x_after_nx,
            y_after_zy,
            y_after_ny,
            raw_output,
        })
    }

    /// Runs a named operation.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::WidthMismatch`] if `x` and `y` differ in width.
    pub fn execute_operation(
        x: &Bits,
        y: &Bits,
        operation: Operation,
    ) -> Result<HackAluResult, AluError> {
        Self::execute(x, y, operation.control_bits())
    }

    /// Runs the operation whose symbol is `name` (`"x+y"`, `"!x"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`AluError::WidthMismatch`] if `x` and `y` differ in width, which is checked
    /// before the name; otherwise [`AluError::UnknownOperation`] if `name` is not one of the
    /// 18 symbols.
    pub fn execute_named(x: &Bits, y: &Bits, name: &str) -> Result<HackAluResult, AluError> {
        ensure_same_width(x, y)?;
        let operation: Operation = name.parse()?;
        Self::execute_operation(x, y, operation)
    }
}

/// Free-function form of [`HackAlu::execute`].
///
/// # Errors
///
/// See [`HackAlu::execute`].
pub fn hack_alu(x: &Bits, y: &Bits, control: ControlBits) -> Result<HackAluResult, AluError> {
    HackAlu::execute(x, y, control)
}

/// Free-function form of [`HackAlu::execute_named`].
///
/// # Errors
///
/// See [`HackAlu::execute_named`].
pub fn hack_alu_by_operation(x: &Bits, y: &Bits, name: &str) -> Result<HackAluResult, AluError> {
    HackAlu::execute_named(x, y, name)
}

/// Applies zero-then-negate, returning both intermediates.
fn preprocess(input: &Bits, zero: Bit, negate: Bit) -> (Bits, Bits) {
    let zeroed = if zero.is_set() {
        input.map(|_| Bit::Zero)
    } else {
        input.clone()
    };
    let negated = if negate.is_set() { !&zeroed } else { zeroed.clone() };
    (zeroed, negated)
}

fn describe_preprocess(name: &str, zero: Bit, negate: Bit) -> String {
    format!(
        "Preprocess {name}: {} {name}, then {}",
        if zero.is_set() { "zero" } else { "keep" },
        if negate.is_set() { "negate" } else { "keep" }
    )
}
