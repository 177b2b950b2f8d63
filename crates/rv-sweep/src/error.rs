use thiserror::Error;

/// Native integer range exhausted during a transition.
///
/// Only reachable with coordinates or cycle counts at the edge of `i64` /
/// `u64`; the algorithm has no other failure mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepError {
    #[error("position {position} cannot move by {delta} without leaving the i64 range")]
    PositionOverflow { position: i64, delta: i64 },

    #[error("offset {offset} cannot move by {delta} without leaving the i64 range")]
    OffsetOverflow { offset: i64, delta: i64 },

    #[error("phase number {phase_number} cannot grow past u64::MAX")]
    PhaseOverflow { phase_number: u64 },
}

pub type SweepResult<T> = Result<T, SweepError>;
