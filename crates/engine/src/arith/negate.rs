//! Bitwise inversion and two's-complement negation.
//!
//! Negation is shown the way it happens in hardware: invert every bit, then ripple a
//! carry of 1 up from the LSB. The per-bit trace records that increment.

use serde::{Deserialize, Serialize};

use super::adder::full_adder;
use crate::common::{Bit, Bits};

/// Bitwise NOT of `bits`, same width.
pub fn invert_bits(bits: &Bits) -> Bits {
    !bits
}

/// One position of the `+1` increment applied after inversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementStep {
    /// Bit position (0 = LSB).
    pub index: usize,
    /// Carry arriving at this position (1 at the LSB).
    pub carry_in: Bit,
    /// Carry leaving this position.
    pub carry_out: Bit,
    /// Resulting bit at this position.
    pub sum_bit: Bit,
}

/// Result of [`twos_complement`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwosComplement {
    /// `!bits`, before the increment.
    pub inverted: Bits,
    /// `!bits + 1` modulo `2^width`.
    pub result: Bits,
    /// Increment trace, one entry per bit, LSB first.
    pub steps: Vec<IncrementStep>,
}

/// Computes `!bits + 1` with a ripple-carry increment.
///
/// Applying this twice returns the original pattern for every width. The most negative
/// value (`100…0`) maps to itself, and zero maps to zero with the final carry discarded.
pub fn twos_complement(bits: &Bits) -> TwosComplement {
    let inverted = invert_bits(bits);
    let mut steps = Vec::with_capacity(bits.width());
    let mut result = Vec::with_capacity(bits.width());
    let mut carry = Bit::One;

    for (index, bit) in inverted.iter().enumerate() {
        let out = full_adder(bit, Bit::Zero, carry);
        result.push(out.sum);
        steps.push(IncrementStep {
            index,
            carry_in: carry,
            carry_out: out.carry,
            sum_bit: out.sum,
        });
        carry = out.carry;
    }

    TwosComplement {
        inverted,
        result: Bits::from_vec_unchecked(result),
        steps,
    }
}
