//! Single binary digit.
//!
//! [`Bit`] is the element type of every bit vector in the engine. It is a
//! two-variant enum rather than a `bool` or `u8` so that a value outside
//! `{0, 1}` cannot be constructed; raw integers are admitted only through
//! [`TryFrom<u8>`].

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use serde::{Deserialize, Serialize};

use super::error::AluError;

/// One binary digit, serialized as the integer `0` or `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Bit {
    /// Logic low.
    #[default]
    Zero = 0,
    /// Logic high.
    One = 1,
}

impl Bit {
    /// Converts a boolean into a bit (`true` is [`Bit::One`]).
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }

    /// Returns `true` for [`Bit::One`].
    #[inline]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::One)
    }

    /// Returns the bit as `0` or `1`.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Not for Bit {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl BitAnd for Bit {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_bool(self.is_set() && rhs.is_set())
    }
}

impl BitOr for Bit {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_bool(self.is_set() || rhs.is_set())
    }
}

impl BitXor for Bit {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_bool(self != rhs)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_set()
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.as_u8()
    }
}

impl TryFrom<u8> for Bit {
    type Error = AluError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            _ => Err(AluError::InvalidBit { value }),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
