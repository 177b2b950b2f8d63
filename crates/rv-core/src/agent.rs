//! Per-train state record.

use std::fmt;

// ── SweepPhase ────────────────────────────────────────────────────────────────

/// One of the four sub-phases of a search cycle.
///
/// The cycle is fixed:
///
/// ```text
/// SweepForward → ReturnFromForward → SweepBackward → ReturnFromBackward → SweepForward …
/// ```
///
/// Every sub-phase lasts `phase_number` steps, so one cycle walks out and
/// back on both sides of the home marker.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepPhase {
    #[default]
    SweepForward,
    ReturnFromForward,
    SweepBackward,
    ReturnFromBackward,
}

impl SweepPhase {
    /// The sub-phase entered after this one completes.
    #[inline]
    pub fn next(self) -> SweepPhase {
        match self {
            SweepPhase::SweepForward       => SweepPhase::ReturnFromForward,
            SweepPhase::ReturnFromForward  => SweepPhase::SweepBackward,
            SweepPhase::SweepBackward      => SweepPhase::ReturnFromBackward,
            SweepPhase::ReturnFromBackward => SweepPhase::SweepForward,
        }
    }

    /// `true` for the last sub-phase of a cycle.  Completing it grows
    /// `phase_number`.
    #[inline]
    pub fn completes_cycle(self) -> bool {
        matches!(self, SweepPhase::ReturnFromBackward)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SweepPhase::SweepForward       => "sweep_forward",
            SweepPhase::ReturnFromForward  => "return_from_forward",
            SweepPhase::SweepBackward      => "sweep_backward",
            SweepPhase::ReturnFromBackward => "return_from_backward",
        }
    }
}

impl fmt::Display for SweepPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// Everything one train knows about itself.
///
/// `AgentState` is a plain `Copy` value.  Transitions build a new record and
/// leave the old one untouched, so snapshots held elsewhere never change
/// underneath their owner.
///
/// # Invariants
///
/// - `offset_from_home == position - home`.  The offset is carried rather
///   than recomputed because a train's odometer reports displacement, not
///   absolute position.
/// - `phase_number >= 1` and never decreases.
/// - `steps_in_phase < phase_number`.
/// - `is_waiting` never goes back to `false`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    /// Absolute coordinate on the line.
    pub position: i64,

    /// Coordinate of this train's own marker.  Fixed at creation.
    pub home: i64,

    /// Signed displacement accumulated by moves.
    pub offset_from_home: i64,

    /// Current sub-phase of the search cycle.
    pub sweep_phase: SweepPhase,

    /// Length in steps of each sub-phase in the current cycle.  Starts at 1.
    pub phase_number: u64,

    /// Steps taken since entering the current sub-phase.
    pub steps_in_phase: u64,

    /// Latched once the train has found the foreign marker.
    pub is_waiting: bool,
}

impl AgentState {
    /// A fresh train parked on its own marker at `position`.
    pub fn new(position: i64) -> Self {
        Self {
            position,
            home:             position,
            offset_from_home: 0,
            sweep_phase:      SweepPhase::SweepForward,
            phase_number:     1,
            steps_in_phase:   0,
            is_waiting:       false,
        }
    }

    /// `true` while the train stands on its own marker.
    #[inline]
    pub fn is_home(&self) -> bool {
        self.position == self.home
    }

    /// Check the per-agent invariants listed on the type.
    pub fn is_consistent(&self) -> bool {
        let offset_ok = self
            .position
            .checked_sub(self.home)
            .is_some_and(|d| d == self.offset_from_home);
        offset_ok && self.phase_number >= 1 && self.steps_in_phase < self.phase_number
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos={} home={} off={:+} {}[{}/{}]{}",
            self.position,
            self.home,
            self.offset_from_home,
            self.sweep_phase,
            self.steps_in_phase,
            self.phase_number,
            if self.is_waiting { " waiting" } else { "" },
        )
    }
}
