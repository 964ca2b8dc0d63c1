//! Named Hack ALU operations.
//!
//! The Hack ALU truth table defines 18 useful functions of `x` and `y`, each selected by one
//! fixed control word. The table below is the single source for the mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::control::ControlBits;
use crate::common::AluError;
use crate::common::constants::OPERATION_COUNT;

/// One of the 18 named Hack ALU operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operation {
    /// `0`
    Zero,
    /// `1`
    One,
    /// `-1`
    MinusOne,
    /// `x`
    X,
    /// `y`
    Y,
    /// `!x`
    NotX,
    /// `!y`
    NotY,
    /// `-x`
    NegX,
    /// `-y`
    NegY,
    /// `x+1`
    XPlusOne,
    /// `y+1`
    YPlusOne,
    /// `x-1`
    XMinusOne,
    /// `y-1`
    YMinusOne,
    /// `x+y`
    XPlusY,
    /// `x-y`
    XMinusY,
    /// `y-x`
    YMinusX,
    /// `x&y`
    XAndY,
    /// `x|y`
    XOrY,
}

/// `(operation, symbol, control word zx nx zy ny f no, description)`.
const OPERATION_TABLE: [(Operation, &str, u8, &str); OPERATION_COUNT] = [
    (Operation::Zero, "0", 0b101010, "Output constant 0"),
    (Operation::One, "1", 0b111111, "Output constant 1"),
    (Operation::MinusOne, "-1", 0b111010, "Output constant -1"),
    (Operation::X, "x", 0b001100, "Pass through x input"),
    (Operation::Y, "y", 0b110000, "Pass through y input"),
    (Operation::NotX, "!x", 0b001101, "Bitwise NOT of x"),
    (Operation::NotY, "!y", 0b110001, "Bitwise NOT of y"),
    (Operation::NegX, "-x", 0b001111, "Negate x (two's complement)"),
    (Operation::NegY, "-y", 0b110011, "Negate y (two's complement)"),
    (Operation::XPlusOne, "x+1", 0b011111, "Increment x by 1"),
    (Operation::YPlusOne, "y+1", 0b110111, "Increment y by 1"),
    (Operation::XMinusOne, "x-1", 0b001110, "Decrement x by 1"),
    (Operation::YMinusOne, "y-1", 0b110010, "Decrement y by 1"),
    (Operation::XPlusY, "x+y", 0b000010, "Add x and y"),
    (Operation::XMinusY, "x-y", 0b010011, "Subtract y from x"),
    (Operation::YMinusX, "y-x", 0b000111, "Subtract x from y"),
    (Operation::XAndY, "x&y", 0b000000, "Bitwise AND of x and y"),
    (Operation::XOrY, "x|y", 0b010101, "Bitwise OR of x and y"),
];

impl Operation {
    /// Every operation in truth-table order.
    pub const ALL: [Self; OPERATION_COUNT] = [
        Self::Zero,
        Self::One,
        Self::MinusOne,
        Self::X,
        Self::Y,
        Self::NotX,
        Self::NotY,
        Self::NegX,
        Self::NegY,
        Self::XPlusOne,
        Self::YPlusOne,
        Self::XMinusOne,
        Self::YMinusOne,
        Self::XPlusY,
        Self::XMinusY,
        Self::YMinusX,
        Self::XAndY,
        Self::XOrY,
    ];

    const fn entry(self) -> (Self, &'static str, u8, &'static str) {
        OPERATION_TABLE[self as usize]
    }

    /// Symbol as written in the truth table, e.g. `x+y`.
    pub const fn symbol(self) -> &'static str {
        self.entry().1
    }

    /// Control bits selecting this operation.
    pub const fn control_bits(self) -> ControlBits {
        ControlBits::from_word(self.entry().2)
    }

    /// One-line explanation of what the operation computes.
    pub const fn description(self) -> &'static str {
        self.entry().3
    }

    /// Reverse lookup: the operation selected by `bits`, if it is one of the 18.
    pub fn from_control_bits(bits: ControlBits) -> Option<Self> {
        let word = bits.to_word();
        OPERATION_TABLE
            .iter()
            .find(|entry| entry.2 == word)
            .map(|entry| entry.0)
    }

    /// Looks up an operation by its exact symbol.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::UnknownOperation`] if `symbol` is not in the table.
    pub fn from_symbol(symbol: &str) -> Result<Self, AluError> {
        OPERATION_TABLE
            .iter()
            .find(|entry| entry.1 == symbol)
            .map(|entry| entry.0)
            .ok_or_else(|| AluError::UnknownOperation {
                name: symbol.to_owned(),
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = AluError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl TryFrom<String> for Operation {
    type Error = AluError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_symbol(&value)
    }
}

impl From<Operation> for String {
    fn from(op: Operation) -> Self {
        op.symbol().to_owned()
    }
}
