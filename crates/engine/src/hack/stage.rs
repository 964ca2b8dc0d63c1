//! Pipeline stages and their trace records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::Bits;
use crate::common::constants::STAGE_COUNT;

/// One of the four fixed stages of the Hack ALU pipeline, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Apply `zx` then `nx` to x.
    PreprocessX,
    /// Apply `zy` then `ny` to y.
    PreprocessY,
    /// Add (`f = 1`) or AND (`f = 0`) the processed inputs.
    Compute,
    /// Apply `no` to the compute output.
    Postprocess,
}

impl Stage {
    /// Stages in execution order.
    pub const ALL: [Self; STAGE_COUNT] = [
        Self::PreprocessX,
        Self::PreprocessY,
        Self::Compute,
        Self::Postprocess,
    ];

    /// Kebab-case name, e.g. `preprocess-x`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PreprocessX => "preprocess-x",
            Self::PreprocessY => "preprocess-y",
            Self::Compute => "compute",
            Self::Postprocess => "postprocess",
        }
    }

    /// Position of the stage in the trace.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Intermediate vectors produced by a stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum StageOutput {
    /// x after `zx` and `nx`.
    PreprocessX {
        /// Processed x.
        x_processed: Bits,
    },
    /// y after `zy` and `ny`.
    PreprocessY {
        /// Processed y.
        y_processed: Bits,
    },
    /// The adder or AND output.
    Compute {
        /// Processed x fed to the function unit.
        x_processed: Bits,
        /// Processed y fed to the function unit.
        y_processed: Bits,
        /// Function unit output, before `no`.
        raw_result: Bits,
    },
    /// The ALU output.
    Postprocess {
        /// Function unit output, before `no`.
        raw_result: Bits,
        /// Output after `no`.
        final_result: Bits,
    },
}

impl StageOutput {
    /// The stage that produced this output.
    pub const fn stage(&self) -> Stage {
        match self {
            Self::PreprocessX { .. } => Stage::PreprocessX,
            Self::PreprocessY { .. } => Stage::PreprocessY,
            Self::Compute { .. } => Stage::Compute,
            Self::Postprocess { .. } => Stage::Postprocess,
        }
    }
}

/// Trace entry for one pipeline stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackStepState {
    /// Human-readable account, e.g. `Preprocess x: zero x, then negate`.
    pub description: String,
    /// Stage tag and intermediate vectors.
    #[serde(flatten)]
    pub output: StageOutput,
}

impl HackStepState {
    /// The stage this entry records.
    pub const fn stage(&self) -> Stage {
        self.output.stage()
    }
}
