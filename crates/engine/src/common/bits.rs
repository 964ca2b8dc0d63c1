//! Fixed-width bit vectors.
//!
//! This module defines [`Bits`], the value type that flows through every layer of the engine.
//! It provides:
//! 1. **Width Invariant:** Every constructor, including deserialization, rejects widths outside
//!    [`MIN_WIDTH`](super::constants::MIN_WIDTH)..=[`MAX_WIDTH`](super::constants::MAX_WIDTH).
//! 2. **Ordering:** Index 0 is the least-significant bit (LSB-first); display is MSB-first.
//! 3. **Value Semantics:** Operations return new vectors; nothing mutates a vector in place once
//!    it has been handed to a caller.

use std::fmt;
use std::ops::{Index, Not};

use serde::{Deserialize, Serialize};

use super::bit::Bit;
use super::error::AluError;
use crate::validation::check_width;

/// An LSB-first vector of 1 to 64 bits.
///
/// # Examples
///
/// ```
/// use hackalu_core::common::{Bit, Bits};
///
/// let five = Bits::from_u64(5, 4).unwrap();
/// assert_eq!(five.width(), 4);
/// assert_eq!(five[0], Bit::One);
/// assert_eq!(five.to_string(), "0b0101");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bit>", into = "Vec<Bit>")]
pub struct Bits(Vec<Bit>);

impl Bits {
    /// Creates a zero-filled vector.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidWidth`] if `width` is outside `[1, 64]`.
    pub fn zeroed(width: usize) -> Result<Self, AluError> {
        Self::filled(width, Bit::Zero)
    }

    /// Creates a vector with every position set to `bit`.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidWidth`] if `width` is outside `[1, 64]`.
    pub fn filled(width: usize, bit: Bit) -> Result<Self, AluError> {
        check_width(width)?;
        Ok(Self(vec![bit; width]))
    }

    /// Wraps an LSB-first sequence of bits.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidWidth`] if the sequence is empty or longer than 64.
    pub fn from_lsb(bits: Vec<Bit>) -> Result<Self, AluError> {
        check_width(bits.len())?;
        Ok(Self(bits))
    }

    /// Builds a vector from raw LSB-first integers, each of which must be 0 or 1.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidBit`] for the first value outside `{0, 1}`, or
    /// [`AluError::InvalidWidth`] if the slice length is outside `[1, 64]`.
    pub fn try_from_raw(values: &[u8]) -> Result<Self, AluError> {
        let bits = values
            .iter()
            .map(|&v| Bit::try_from(v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_lsb(bits)
    }

    /// Takes the low `width` bits of `value`.
    ///
    /// This is a raw pattern constructor: it never range-checks `value`, it
    /// simply truncates. Use [`decimal_to_bits`](crate::codec::decimal_to_bits)
    /// for range-checked conversion.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidWidth`] if `width` is outside `[1, 64]`.
    pub fn from_u64(value: u64, width: usize) -> Result<Self, AluError> {
        check_width(width)?;
        Ok(Self(
            (0..width)
                .map(|i| Bit::from_bool((value >> i) & 1 == 1))
                .collect(),
        ))
    }

    /// Wraps a sequence already known to satisfy the width invariant.
    pub(crate) fn from_vec_unchecked(bits: Vec<Bit>) -> Self {
        debug_assert!(check_width(bits.len()).is_ok());
        Self(bits)
    }

    /// Number of bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Bit at `index` (0 = LSB), or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Bit> {
        self.0.get(index).copied()
    }

    /// Most-significant bit (the sign bit under two's complement).
    #[inline]
    pub fn msb(&self) -> Bit {
        self.0.last().copied().unwrap_or_default()
    }

    /// Least-significant bit.
    #[inline]
    pub fn lsb(&self) -> Bit {
        self.0.first().copied().unwrap_or_default()
    }

    /// Returns `true` when every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == Bit::Zero)
    }

    /// Iterates the bits LSB-first.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Bit>> {
        self.0.iter().copied()
    }

    /// Borrows the bits as an LSB-first slice.
    #[inline]
    pub fn as_slice(&self) -> &[Bit] {
        &self.0
    }

    /// Raw unsigned value of the pattern.
    pub fn to_u64(&self) -> u64 {
        self.0
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &b)| acc | (u64::from(b.as_u8()) << i))
    }

    /// The bits as raw LSB-first integers.
    pub fn to_raw(&self) -> Vec<u8> {
        self.0.iter().map(|b| b.as_u8()).collect()
    }

    /// Applies `f` to every bit, producing a vector of the same width.
    pub(crate) fn map(&self, f: impl Fn(Bit) -> Bit) -> Self {
        Self(self.0.iter().map(|&b| f(b)).collect())
    }

    /// Combines two equal-width vectors position by position.
    pub(crate) fn zip_with(&self, other: &Self, f: impl Fn(Bit, Bit) -> Bit) -> Self {
        debug_assert_eq!(self.width(), other.width());
        Self(self.0.iter().zip(&other.0).map(|(&a, &b)| f(a, b)).collect())
    }
}

impl Index<usize> for Bits {
    type Output = Bit;

    fn index(&self, index: usize) -> &Bit {
        &self.0[index]
    }
}

impl Not for &Bits {
    type Output = Bits;

    fn not(self) -> Bits {
        self.map(|b| !b)
    }
}

impl<'a> IntoIterator for &'a Bits {
    type Item = Bit;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Bit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[Bit]> for Bits {
    fn as_ref(&self) -> &[Bit] {
        &self.0
    }
}

impl TryFrom<Vec<Bit>> for Bits {
    type Error = AluError;

    fn try_from(bits: Vec<Bit>) -> Result<Self, Self::Error> {
        Self::from_lsb(bits)
    }
}

impl From<Bits> for Vec<Bit> {
    fn from(bits: Bits) -> Self {
        bits.0
    }
}

impl fmt::Display for Bits {
    /// Formats as `0b` followed by every bit, MSB first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0b")?;
        for bit in self.0.iter().rev() {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}
