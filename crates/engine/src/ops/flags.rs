//! Status flags.
//!
//! Flags are always derived from a finished result; nothing sets them directly. Overflow has
//! exactly one definition in this crate, [`signed_overflow`], and both the ripple-carry
//! layer and the Hack ALU use it.

use serde::{Deserialize, Serialize};

use crate::common::{Bit, Bits};

/// Condition flags derived from a result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags {
    /// Every result bit is zero.
    pub zero: bool,
    /// The result is negative (MSB set under a signed interpretation).
    pub sign: bool,
    /// Signed addition left the representable range.
    pub overflow: bool,
    /// The addition carried out of the MSB.
    pub carry: bool,
}

impl Flags {
    /// Derives the flags of a completed ripple-carry addition.
    ///
    /// # Arguments
    ///
    /// * `sum`            - The finished sum.
    /// * `signed`         - Whether `sign` and `overflow` apply.
    /// * `carry_into_msb` - Carry arriving at the MSB cell.
    /// * `carry_out`      - Carry leaving the MSB cell.
    pub fn for_sum(sum: &Bits, signed: bool, carry_into_msb: Bit, carry_out: Bit) -> Self {
        Self {
            zero: sum.is_zero(),
            sign: signed && sum.msb() == Bit::One,
            overflow: signed && signed_overflow(carry_into_msb, carry_out),
            carry: carry_out == Bit::One,
        }
    }
}

/// Two's-complement overflow of an addition: the carry into the MSB differs from the carry
/// out of it.
///
/// For `a + b = s` this is equivalent to "`a` and `b` share a sign bit and `s` does not".
/// With MSB bits `a`, `b` and incoming carry `c`, the sum's MSB is `a ⊕ b ⊕ c` and the
/// outgoing carry is `maj(a, b, c)`. If `a ≠ b` the outgoing carry equals `c`, so neither
/// test fires. If `a = b` the outgoing carry is `a` and the sum's MSB is `c`, so both tests
/// reduce to `c ≠ a`.
#[inline]
pub fn signed_overflow(carry_into_msb: Bit, carry_out_of_msb: Bit) -> bool {
    carry_into_msb != carry_out_of_msb
}
