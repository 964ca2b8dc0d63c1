//! Hack ALU control inputs.
//!
//! The six control bits are usually written as one word, `zx nx zy ny f no`, most
//! significant first; `x+y` is `000010`. [`ControlBits::from_word`] and
//! [`ControlBits::to_word`] use that packing (`zx` is bit 5, `no` is bit 0).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::operation::Operation;
use crate::common::constants::CONTROL_BIT_COUNT;
use crate::common::{AluError, Bit};
use crate::validation::{is_valid_control_bits, sanitize_binary_string};

/// The six selector inputs of the Hack ALU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlBits {
    /// Zero the x input.
    pub zx: Bit,
    /// Bitwise-negate the (possibly zeroed) x input.
    pub nx: Bit,
    /// Zero the y input.
    pub zy: Bit,
    /// Bitwise-negate the (possibly zeroed) y input.
    pub ny: Bit,
    /// Function select: 1 = add, 0 = bitwise AND.
    pub f: Bit,
    /// Bitwise-negate the output.
    pub no: Bit,
}

/// Names one of the six control inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlBit {
    /// `zx`
    Zx,
    /// `nx`
    Nx,
    /// `zy`
    Zy,
    /// `ny`
    Ny,
    /// `f`
    F,
    /// `no`
    No,
}

impl ControlBit {
    /// All control inputs in word order (`zx` first).
    pub const ALL: [Self; CONTROL_BIT_COUNT] =
        [Self::Zx, Self::Nx, Self::Zy, Self::Ny, Self::F, Self::No];

    /// Conventional lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zx => "zx",
            Self::Nx => "nx",
            Self::Zy => "zy",
            Self::Ny => "ny",
            Self::F => "f",
            Self::No => "no",
        }
    }

    /// Bit position within the packed control word.
    const fn shift(self) -> u8 {
        match self {
            Self::Zx => 5,
            Self::Nx => 4,
            Self::Zy => 3,
            Self::Ny => 2,
            Self::F => 1,
            Self::No => 0,
        }
    }
}

impl fmt::Display for ControlBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlBit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bit| bit.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown control bit: {s}"))
    }
}

impl ControlBits {
    /// Unpacks the low six bits of `word` (`zx` = bit 5 … `no` = bit 0).
    pub const fn from_word(word: u8) -> Self {
        Self {
            zx: Bit::from_bool((word >> 5) & 1 == 1),
            nx: Bit::from_bool((word >> 4) & 1 == 1),
            zy: Bit::from_bool((word >> 3) & 1 == 1),
            ny: Bit::from_bool((word >> 2) & 1 == 1),
            f: Bit::from_bool((word >> 1) & 1 == 1),
            no: Bit::from_bool(word & 1 == 1),
        }
    }

    /// Packs the six bits into a word (`zx` = bit 5 … `no` = bit 0).
    pub const fn to_word(self) -> u8 {
        (self.zx.as_u8() << 5)
            | (self.nx.as_u8() << 4)
            | (self.zy.as_u8() << 3)
            | (self.ny.as_u8() << 2)
            | (self.f.as_u8() << 1)
            | self.no.as_u8()
    }

    /// Builds control bits from six raw values in word order.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidControlBits`] unless `values` holds exactly six 0/1 values.
    pub fn try_from_raw(values: &[u8]) -> Result<Self, AluError> {
        if !is_valid_control_bits(values) {
            return Err(AluError::InvalidControlBits { len: values.len() });
        }
        Ok(Self::from_word(
            values.iter().fold(0u8, |word, &v| (word << 1) | v),
        ))
    }

    /// Value of one input.
    pub const fn get(self, which: ControlBit) -> Bit {
        Bit::from_bool((self.to_word() >> which.shift()) & 1 == 1)
    }

    /// Copy with one input replaced.
    #[must_use]
    pub const fn with(self, which: ControlBit, value: Bit) -> Self {
        let mask = 1u8 << which.shift();
        let cleared = self.to_word() & !mask;
        Self::from_word(cleared | (value.as_u8() << which.shift()))
    }

    /// Replaces one input in place.
    pub const fn set(&mut self, which: ControlBit, value: Bit) {
        *self = self.with(which, value);
    }

    /// The named operation these bits select, if any.
    pub fn operation(self) -> Option<Operation> {
        Operation::from_control_bits(self)
    }
}

impl From<Operation> for ControlBits {
    fn from(op: Operation) -> Self {
        op.control_bits()
    }
}

impl fmt::Display for ControlBits {
    /// Formats as the six-digit word, e.g. `000010`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06b}", self.to_word())
    }
}

impl FromStr for ControlBits {
    type Err = AluError;

    /// Parses a six-digit binary word, with or without a `0b` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = sanitize_binary_string(s)?;
        if digits.len() != CONTROL_BIT_COUNT {
            return Err(AluError::InvalidControlBits { len: digits.len() });
        }
        let raw: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
        Self::try_from_raw(&raw)
    }
}
