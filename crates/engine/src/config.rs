//! Configuration for an interactive ALU session.
//!
//! This module defines the settings an [`AluSession`](crate::session::AluSession) starts
//! from. It provides:
//! 1. **Defaults:** Baseline width, signedness, operation, display and animation settings.
//! 2. **Structures:** Hierarchical config for general, display and animation settings.
//! 3. **Enums:** Input mode; the numeric base is [`NumericBase`] from the codec.
//!
//! Configuration is supplied as JSON via [`Config::from_json`], or use `Config::default()`.

use serde::Deserialize;
use thiserror::Error;

use crate::codec::NumericBase;
use crate::common::AluError;
use crate::hack::Operation;
use crate::validation::validate_width;

/// Default configuration constants.
mod defaults {
    use crate::hack::Operation;

    /// Operand width in bits; the Hack word size.
    pub const WIDTH: usize = crate::common::HACK_WORD_WIDTH;

    /// Operands are read as two's-complement by default.
    pub const SIGNED: bool = true;

    /// Operation selected on start-up.
    pub const OPERATION: Operation = Operation::XPlusY;

    /// Seed for the xorshift generator behind `randomize`.
    pub const SEED: u64 = 123_456_789;

    /// Milliseconds each pipeline stage stays on screen while playing.
    pub const SPEED_MS: u64 = 500;
}

/// How operands are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Type a number in the active [`NumericBase`].
    #[default]
    Numeric,
    /// Toggle individual bits.
    Pin,
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document did not match the configuration schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value was syntactically valid but out of bounds.
    #[error(transparent)]
    Alu(#[from] AluError),
    /// `animation.speed_ms` was zero.
    #[error("animation speed must be at least 1 ms")]
    ZeroSpeed,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use hackalu_core::config::{Config, InputMode};
///
/// let json = r#"{
///     "general": { "width": 8, "operation": "x-y" },
///     "display": { "input_mode": "pin", "numeric_base": "hex" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.width, 8);
/// assert!(config.general.signed);
/// assert_eq!(config.display.input_mode, InputMode::Pin);
/// assert_eq!(config.animation.speed_ms, 500);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Operand and operation settings
    pub general: GeneralConfig,
    /// Input presentation
    pub display: DisplayConfig,
    /// Stage-by-stage playback
    pub animation: AnimationConfig,
}

impl Config {
    /// Parses and validates a JSON configuration; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown enum values, and the
    /// errors of [`Config::validate`] otherwise.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the width against the interactive bounds [4, 64] and that playback speed is
    /// non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Alu`] wrapping [`AluError::InvalidWidth`], or
    /// [`ConfigError::ZeroSpeed`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_width(self.general.width)?;
        if self.animation.speed_ms == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        Ok(())
    }
}

/// Operand and operation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Operand width in bits
    pub width: usize,
    /// Read operands as two's-complement
    pub signed: bool,
    /// Initially selected operation
    pub operation: Operation,
    /// Seed for `randomize`; zero is replaced by the default seed
    pub seed: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            signed: defaults::SIGNED,
            operation: defaults::OPERATION,
            seed: defaults::SEED,
        }
    }
}

impl GeneralConfig {
    /// The seed actually used; xorshift never leaves the all-zero state.
    pub const fn effective_seed(&self) -> u64 {
        if self.seed == 0 { defaults::SEED } else { self.seed }
    }
}

/// Input presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Numeric entry or bit toggles
    pub input_mode: InputMode,
    /// Base for numeric entry and display
    pub numeric_base: NumericBase,
}

/// Stage-by-stage playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Milliseconds per stage
    pub speed_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed_ms: defaults::SPEED_MS,
        }
    }
}
