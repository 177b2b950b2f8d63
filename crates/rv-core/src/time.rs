//! Simulation time model.
//!
//! Time is a monotonically increasing `Step` counter.  There is no wall
//! clock: one step is one synchronized move of both trains, and every
//! timeout is expressed as a step budget.

use std::fmt;

use crate::{RvError, RvResult};

/// Step budget used by [`RunConfig::default`] and the free `run` helper.
pub const DEFAULT_MAX_STEPS: u64 = 10_000;

// ── Step ──────────────────────────────────────────────────────────────────────

/// An absolute step counter.
///
/// Stored as `u64`.  The collision step grows as `2·D²` in the separation
/// `D`, so any run that fits a `u64` budget fits the counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// The step after `self`.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }

    /// Steps elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Step) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl std::ops::Sub for Step {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Step) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Parameters of one simulation run.
///
/// Typically built from command-line flags or loaded from a TOML file by the
/// application crate and passed to the simulation runner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Signed starting coordinate of train B.  Train A always starts at 0.
    /// Any integer is valid, including 0 and negative values.
    pub separation: i64,

    /// Stop after this many steps even without a collision.  Running out of
    /// budget is a normal outcome, not an error.
    pub max_steps: u64,

    /// Report a snapshot to output writers every N steps.  1 = every step.
    pub output_interval_steps: u64,
}

impl RunConfig {
    /// Configuration for `separation` with the default budget and interval.
    pub fn new(separation: i64) -> Self {
        Self { separation, ..Self::default() }
    }

    /// The step at which the run gives up (inclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.max_steps)
    }

    /// `true` if a snapshot should be reported after `step`.
    #[inline]
    pub fn is_output_step(&self, step: Step) -> bool {
        self.output_interval_steps > 0 && step.0.is_multiple_of(self.output_interval_steps)
    }

    /// Reject values the runner cannot honour.
    pub fn validate(&self) -> RvResult<()> {
        if self.output_interval_steps == 0 {
            return Err(RvError::Config(
                "output_interval_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            separation:            1,
            max_steps:             DEFAULT_MAX_STEPS,
            output_interval_steps: 1,
        }
    }
}
