//! Interactive ALU session.
//!
//! This module holds the caller-owned state behind an interactive front end. It provides:
//! 1. **Inputs:** x, y, width, control bits and display preferences, each setter
//!    recomputing through the pure [`HackAlu`].
//! 2. **Playback:** an [`AnimationState`] that walks the four pipeline stages, driven by
//!    explicit steps or by [`AluSession::advance`] from a frame loop.
//! 3. **Snapshots:** [`SessionSnapshot`], the `{x, y, width, controlBits}` record (plus
//!    optional preferences) a front end persists and restores.
//!
//! A failed recomputation is logged and leaves the session without a result; it is never
//! returned to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::codec::NumericBase;
use crate::common::{AluError, Bit, Bits};
use crate::config::{Config, ConfigError};
pub use crate::config::InputMode;
use crate::hack::{ControlBit, ControlBits, HackAlu, HackAluResult, HackStepState, Operation};
use crate::validation::validate_width;

/// Errors raised while decoding or restoring a [`SessionSnapshot`].
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The document is not valid JSON, or a field has the wrong shape or a non-0/1 bit.
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    /// The fields parsed but are inconsistent (width out of bounds, operand length mismatch).
    #[error("invalid snapshot: {0}")]
    Invalid(#[from] AluError),
}

/// Persisted session state.
///
/// Serialises with camelCase keys: `x`, `y`, `width`, `controlBits`, and, when present,
/// `signed`, `inputMode` and `numericBase`. Operands are LSB-first arrays of 0/1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// First operand.
    pub x: Bits,
    /// Second operand.
    pub y: Bits,
    /// Operand width.
    pub width: usize,
    /// Selected control bits.
    pub control_bits: ControlBits,
    /// Signed display preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed: Option<bool>,
    /// Input mode preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<InputMode>,
    /// Numeric base preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_base: Option<NumericBase>,
}

impl SessionSnapshot {
    /// Serialises to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and validates a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] for malformed input and [`SnapshotError::Invalid`]
    /// when [`SessionSnapshot::validate`] fails.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks the width against the interactive bounds and that both operands have exactly
    /// `width` bits.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidWidth`] or [`AluError::WidthMismatch`].
    pub fn validate(&self) -> Result<(), AluError> {
        validate_width(self.width)?;
        for operand in [&self.x, &self.y] {
            if operand.width() != self.width {
                return Err(AluError::WidthMismatch {
                    left: operand.width(),
                    right: self.width,
                });
            }
        }
        Ok(())
    }
}

/// Stage-by-stage playback state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Whether [`AluSession::advance`] moves through stages.
    pub playing: bool,
    /// Index of the stage on display.
    pub current_step: usize,
    /// Milliseconds per stage.
    pub speed_ms: u64,
    /// Time accumulated towards the next stage.
    pub elapsed_ms: u64,
}

impl AnimationState {
    const fn new(speed_ms: u64) -> Self {
        Self {
            playing: false,
            current_step: 0,
            speed_ms,
            elapsed_ms: 0,
        }
    }
}

/// Caller-owned state of one interactive ALU.
#[derive(Clone, Debug)]
pub struct AluSession {
    x: Bits,
    y: Bits,
    width: usize,
    control_bits: ControlBits,
    signed: bool,
    input_mode: InputMode,
    numeric_base: NumericBase,
    animation: AnimationState,
    result: Option<HackAluResult>,
    default_control: ControlBits,
    default_speed_ms: u64,
    rng: u64,
}

impl AluSession {
    /// Creates a session from `config` and computes the initial result.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Config::validate`].
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let width = config.general.width;
        let default_control = config.general.operation.control_bits();

        let mut session = Self {
            x: Bits::zeroed(width)?,
            y: Bits::zeroed(width)?,
            width,
            control_bits: default_control,
            signed: config.general.signed,
            input_mode: config.display.input_mode,
            numeric_base: config.display.numeric_base,
            animation: AnimationState::new(config.animation.speed_ms),
            result: None,
            default_control,
            default_speed_ms: config.animation.speed_ms,
            rng: config.general.effective_seed(),
        };
        session.recompute();
        Ok(session)
    }

    /// First operand.
    pub const fn x(&self) -> &Bits {
        &self.x
    }

    /// Second operand.
    pub const fn y(&self) -> &Bits {
        &self.y
    }

    /// Operand width.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Selected control bits.
    pub const fn control_bits(&self) -> ControlBits {
        self.control_bits
    }

    /// Signed display preference.
    pub const fn signed(&self) -> bool {
        self.signed
    }

    /// Input mode preference.
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Numeric base preference.
    pub const fn numeric_base(&self) -> NumericBase {
        self.numeric_base
    }

    /// Playback state.
    pub const fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Latest result, or `None` if the last recomputation failed.
    pub const fn result(&self) -> Option<&HackAluResult> {
        self.result.as_ref()
    }

    /// The named operation the control bits select, if any.
    pub fn current_operation(&self) -> Option<Operation> {
        self.control_bits.operation()
    }

    /// `x` rendered in the active base.
    pub fn x_text(&self) -> String {
        self.numeric_base.format(&self.x, self.signed)
    }

    /// `y` rendered in the active base.
    pub fn y_text(&self) -> String {
        self.numeric_base.format(&self.y, self.signed)
    }

    /// Replaces x and recomputes.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::WidthMismatch`] if `x` is not the session width; x is left
    /// unchanged.
    pub fn set_x(&mut self, x: Bits) -> Result<(), AluError> {
        self.ensure_session_width(&x)?;
        self.x = x;
        self.recompute();
        Ok(())
    }

    /// Replaces y and recomputes.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::WidthMismatch`] if `y` is not the session width; y is left
    /// unchanged.
    pub fn set_y(&mut self, y: Bits) -> Result<(), AluError> {
        self.ensure_session_width(&y)?;
        self.y = y;
        self.recompute();
        Ok(())
    }

    /// Parses `text` in the active base and width, then replaces x.
    ///
    /// # Errors
    ///
    /// Returns the parse error; x is left unchanged.
    pub fn set_x_text(&mut self, text: &str) -> Result<(), AluError> {
        let x = self.numeric_base.parse(text, self.width, self.signed)?;
        self.set_x(x)
    }

    /// Parses `text` in the active base and width, then replaces y.
    ///
    /// # Errors
    ///
    /// Returns the parse error; y is left unchanged.
    pub fn set_y_text(&mut self, text: &str) -> Result<(), AluError> {
        let y = self.numeric_base.parse(text, self.width, self.signed)?;
        self.set_y(y)
    }

    /// Changes the width and resets both operands to zero.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidWidth`] outside [4, 64]; the session is left unchanged.
    pub fn set_width(&mut self, width: usize) -> Result<(), AluError> {
        validate_width(width)?;
        self.x = Bits::zeroed(width)?;
        self.y = Bits::zeroed(width)?;
        self.width = width;
        debug!(width, "session width changed");
        self.recompute();
        Ok(())
    }

    /// Sets one control input and recomputes.
    pub fn set_control_bit(&mut self, which: ControlBit, value: Bit) {
        self.control_bits.set(which, value);
        self.recompute();
    }

    /// Replaces all control inputs and recomputes.
    pub fn set_control_bits(&mut self, bits: ControlBits) {
        self.control_bits = bits;
        self.recompute();
    }

    /// Selects the control bits of the operation named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::UnknownOperation`]; the session is left unchanged.
    pub fn set_operation(&mut self, name: &str) -> Result<(), AluError> {
        let operation: Operation = name.parse()?;
        self.set_control_bits(operation.control_bits());
        Ok(())
    }

    /// Sets the signed display preference. The Hack pipeline itself is sign-agnostic.
    pub const fn set_signed(&mut self, signed: bool) {
        self.signed = signed;
    }

    /// Sets the input mode preference.
    pub const fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    /// Sets the numeric base preference.
    pub const fn set_numeric_base(&mut self, base: NumericBase) {
        self.numeric_base = base;
    }

    /// Number of stages available to step through; zero without a result.
    pub fn step_count(&self) -> usize {
        self.result.as_ref().map_or(0, |r| r.steps.len())
    }

    /// Stage on display.
    pub const fn current_step(&self) -> usize {
        self.animation.current_step
    }

    /// Trace entry of the stage on display.
    pub fn current_stage(&self) -> Option<&HackStepState> {
        self.result
            .as_ref()
            .and_then(|r| r.steps.get(self.animation.current_step))
    }

    /// Starts playback.
    pub const fn play(&mut self) {
        self.animation.playing = true;
    }

    /// Stops playback, keeping the current stage.
    pub const fn pause(&mut self) {
        self.animation.playing = false;
    }

    /// Moves one stage forward, stopping at the last; pauses playback.
    pub fn step_forward(&mut self) {
        let last = self.step_count().saturating_sub(1);
        self.animation.current_step = (self.animation.current_step + 1).min(last);
        self.animation.playing = false;
        self.animation.elapsed_ms = 0;
    }

    /// Moves one stage back, stopping at the first; pauses playback.
    pub const fn step_backward(&mut self) {
        self.animation.current_step = self.animation.current_step.saturating_sub(1);
        self.animation.playing = false;
        self.animation.elapsed_ms = 0;
    }

    /// Sets milliseconds per stage; zero is raised to one.
    pub fn set_speed(&mut self, speed_ms: u64) {
        self.animation.speed_ms = speed_ms.max(1);
    }

    /// Returns to the first stage and pauses.
    pub const fn reset_animation(&mut self) {
        self.animation.current_step = 0;
        self.animation.playing = false;
        self.animation.elapsed_ms = 0;
    }

    /// Feeds elapsed frame time to the player.
    ///
    /// While playing, every full `speed_ms` of accumulated time moves one stage forward.
    /// Playback pauses on reaching the last stage.
    ///
    /// # Returns
    ///
    /// `true` if the stage on display changed.
    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        if !self.animation.playing {
            return false;
        }
        let last = self.step_count().saturating_sub(1);
        let start = self.animation.current_step;

        self.animation.elapsed_ms = self.animation.elapsed_ms.saturating_add(elapsed_ms);
        while self.animation.current_step < last
            && self.animation.elapsed_ms >= self.animation.speed_ms
        {
            self.animation.elapsed_ms -= self.animation.speed_ms;
            self.animation.current_step += 1;
        }
        if self.animation.current_step >= last {
            self.animation.playing = false;
            self.animation.elapsed_ms = 0;
        }
        self.animation.current_step != start
    }

    /// Zeroes both operands, restores the start-up control bits and playback speed, and
    /// rewinds playback. Width and display preferences are kept.
    pub fn reset(&mut self) {
        self.x = self.x.map(|_| Bit::Zero);
        self.y = self.y.map(|_| Bit::Zero);
        self.control_bits = self.default_control;
        self.animation = AnimationState::new(self.default_speed_ms);
        self.recompute();
    }

    /// Fills both operands with pseudo-random bits from the session's xorshift generator.
    pub fn randomize(&mut self) {
        let x = self.next_random();
        let y = self.next_random();
        match (Bits::from_u64(x, self.width), Bits::from_u64(y, self.width)) {
            (Ok(x), Ok(y)) => {
                self.x = x;
                self.y = y;
            }
            (Err(e), _) | (_, Err(e)) => warn!(error = %e, "randomize skipped"),
        }
        self.recompute();
    }

    /// Captures inputs and preferences for persistence.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            x: self.x.clone(),
            y: self.y.clone(),
            width: self.width,
            control_bits: self.control_bits,
            signed: Some(self.signed),
            input_mode: Some(self.input_mode),
            numeric_base: Some(self.numeric_base),
        }
    }

    /// Restores a snapshot; absent preferences keep their current values.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Invalid`] if the snapshot fails validation; the session is
    /// left unchanged.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;
        self.x = snapshot.x;
        self.y = snapshot.y;
        self.width = snapshot.width;
        self.control_bits = snapshot.control_bits;
        if let Some(signed) = snapshot.signed {
            self.signed = signed;
        }
        if let Some(mode) = snapshot.input_mode {
            self.input_mode = mode;
        }
        if let Some(base) = snapshot.numeric_base {
            self.numeric_base = base;
        }
        self.reset_animation();
        self.recompute();
        Ok(())
    }

    fn ensure_session_width(&self, operand: &Bits) -> Result<(), AluError> {
        if operand.width() == self.width {
            Ok(())
        } else {
            Err(AluError::WidthMismatch {
                left: operand.width(),
                right: self.width,
            })
        }
    }

    fn recompute(&mut self) {
        match HackAlu::execute(&self.x, &self.y, self.control_bits) {
            Ok(result) => self.result = Some(result),
            Err(e) => {
                warn!(error = %e, "ALU computation failed");
                self.result = None;
            }
        }
    }

    /// xorshift64.
    const fn next_random(&mut self) -> u64 {
        let mut x = self.rng;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng = x;
        x
    }
}
