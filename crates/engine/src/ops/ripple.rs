//! Ripple-carry addition and subtraction.
//!
//! Addition walks the operands LSB to MSB through a chain of full adders, recording one
//! [`StepState`] per position so a caller can animate the carry. Subtraction is
//! `a + twos_complement(b)` over the same chain.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::flags::Flags;
use crate::arith::{full_adder, twos_complement};
use crate::common::{AluError, Bit, Bits};

/// State of the adder chain after processing one bit position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepState {
    /// Bit position processed (0 = LSB, processed first).
    pub index: usize,
    /// Carry arriving at this position.
    pub carry_in: Bit,
    /// Carry leaving this position.
    pub carry_out: Bit,
    /// Bit of operand `a` at this position.
    pub a_bit: Bit,
    /// Bit of operand `b` at this position.
    pub b_bit: Bit,
    /// Sum bit produced at this position.
    pub sum_bit: Bit,
    /// Result bits `0..=index`, LSB-first.
    pub partial_result: Bits,
    /// Flags so far. All `false` until the final (MSB) step, which carries the real flags.
    pub flags: Flags,
    /// Human-readable account of this position, e.g. `Bit 2: 1 + 0 + carry 1 = 0, carry out 1`.
    pub description: String,
}

/// Result of a ripple-carry operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AluResult {
    /// Final result bits.
    pub result: Bits,
    /// Flags of the final result.
    pub flags: Flags,
    /// Per-position trace, LSB first; length equals the operand width.
    pub steps: Vec<StepState>,
}

/// Fails with [`AluError::WidthMismatch`] unless `a` and `b` have the same width.
pub(crate) fn ensure_same_width(a: &Bits, b: &Bits) -> Result<(), AluError> {
    if a.width() != b.width() {
        return Err(AluError::WidthMismatch {
            left: a.width(),
            right: b.width(),
        });
    }
    Ok(())
}

/// Adds `a` and `b`, returning the trace of every bit position.
///
/// Overflow is evaluated once, at the MSB step, as carry-in ≠ carry-out; it is not
/// accumulated along the chain.
///
/// # Errors
///
/// Returns [`AluError::WidthMismatch`] if the operands differ in width.
pub fn add_stepwise(a: &Bits, b: &Bits, signed: bool) -> Result<Vec<StepState>, AluError> {
    Ok(ripple(a, b, signed)?.steps)
}

/// Adds `a` and `b`, returning the result, its flags and the trace.
///
/// # Errors
///
/// Returns [`AluError::WidthMismatch`] if the operands differ in width.
///
/// # Examples
///
/// ```
/// use hackalu_core::codec::{bits_to_decimal, decimal_to_bits};
/// use hackalu_core::ops::add_full;
///
/// let a = decimal_to_bits(15, 4, false).unwrap();
/// let b = decimal_to_bits(1, 4, false).unwrap();
/// let sum = add_full(&a, &b, false).unwrap();
/// assert_eq!(bits_to_decimal(&sum.result, false), 0);
/// assert!(sum.flags.carry);
/// ```
pub fn add_full(a: &Bits, b: &Bits, signed: bool) -> Result<AluResult, AluError> {
    ripple(a, b, signed)
}

/// Computes `a - b` as `a + (!b + 1)`.
///
/// The flags and trace are those of the final addition.
///
/// # Errors
///
/// Returns [`AluError::WidthMismatch`] if the operands differ in width.
pub fn sub_via_twos_complement(a: &Bits, b: &Bits, signed: bool) -> Result<AluResult, AluError> {
    ensure_same_width(a, b)?;
    let negated = twos_complement(b);
    ripple(a, &negated.result, signed)
}

fn ripple(a: &Bits, b: &Bits, signed: bool) -> Result<AluResult, AluError> {
    ensure_same_width(a, b)?;

    let width = a.width();
    let mut steps = Vec::with_capacity(width);
    let mut sum = Vec::with_capacity(width);
    let mut carry = Bit::Zero;
    let mut flags = Flags::default();

    for (index, (a_bit, b_bit)) in a.iter().zip(b.iter()).enumerate() {
        let out = full_adder(a_bit, b_bit, carry);
        sum.push(out.sum);
        let partial_result = Bits::from_vec_unchecked(sum.clone());

        let step_flags = if index + 1 == width {
            flags = Flags::for_sum(&partial_result, signed, carry, out.carry);
            flags
        } else {
            Flags::default()
        };

        trace!(
            index,
            carry_in = carry.as_u8(),
            carry_out = out.carry.as_u8(),
            sum_bit = out.sum.as_u8(),
            "ripple step"
        );

        steps.push(StepState {
            index,
            carry_in: carry,
            carry_out: out.carry,
            a_bit,
            b_bit,
            sum_bit: out.sum,
            partial_result,
            flags: step_flags,
            description: format!(
                "Bit {index}: {a_bit} + {b_bit} + carry {carry} = {}, carry out {}",
                out.sum, out.carry
            ),
        });
        carry = out.carry;
    }

    Ok(AluResult {
        result: Bits::from_vec_unchecked(sum),
        flags,
        steps,
    })
}
