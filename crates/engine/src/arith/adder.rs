//! One-bit full adder.

use serde::{Deserialize, Serialize};

use crate::common::Bit;

/// Outputs of a single full-adder cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullAdderOutput {
    /// `a ⊕ b ⊕ carry_in`.
    pub sum: Bit,
    /// Majority of `a`, `b`, `carry_in`.
    pub carry: Bit,
}

/// Adds three bits.
///
/// # Arguments
///
/// * `a`        - First addend bit.
/// * `b`        - Second addend bit.
/// * `carry_in` - Carry from the next-lower position.
///
/// # Returns
///
/// The sum bit and the carry into the next-higher position.
///
/// # Examples
///
/// ```
/// use hackalu_core::arith::full_adder;
/// use hackalu_core::common::Bit;
///
/// let out = full_adder(Bit::One, Bit::One, Bit::One);
/// assert_eq!((out.sum, out.carry), (Bit::One, Bit::One));
/// ```
#[inline]
pub fn full_adder(a: Bit, b: Bit, carry_in: Bit) -> FullAdderOutput {
    FullAdderOutput {
        sum: a ^ b ^ carry_in,
        carry: (a & b) | (b & carry_in) | (a & carry_in),
    }
}
