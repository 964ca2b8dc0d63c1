//! Width conversion.

use crate::common::{AluError, Bit, Bits};
use crate::validation::check_width;

/// Resizes `bits` to `new_width`.
///
/// Shrinking keeps the low `new_width` bits and silently discards the rest, sign bit
/// included; a negative value can become positive. Growing zero-extends, or sign-extends
/// when `signed` and the current MSB is set.
///
/// # Errors
///
/// Returns [`AluError::InvalidWidth`] if `new_width` is outside `[1, 64]`.
///
/// # Examples
///
/// ```
/// use hackalu_core::codec::resize_bits;
/// use hackalu_core::common::Bits;
///
/// let minus_one = Bits::try_from_raw(&[1, 1, 1, 1]).unwrap();
/// assert_eq!(resize_bits(&minus_one, 8, true).unwrap().to_raw(), vec![1; 8]);
/// ```
pub fn resize_bits(bits: &Bits, new_width: usize, signed: bool) -> Result<Bits, AluError> {
    check_width(new_width)?;

    if new_width <= bits.width() {
        return Ok(Bits::from_vec_unchecked(
            bits.as_slice()[..new_width].to_vec(),
        ));
    }

    let fill = if signed && bits.msb() == Bit::One {
        Bit::One
    } else {
        Bit::Zero
    };
    let mut extended = bits.as_slice().to_vec();
    extended.resize(new_width, fill);
    Ok(Bits::from_vec_unchecked(extended))
}
