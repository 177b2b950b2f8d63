//! Identifiers for the two trains and the markers they sense.

use std::fmt;

// ── AgentSlot ─────────────────────────────────────────────────────────────────

/// Which of the two trains a record belongs to.
///
/// Only observers and output writers care about the slot.  The sweep
/// algorithm never sees it: both trains run identical code.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentSlot {
    /// The train that starts at coordinate 0.
    A,
    /// The train that starts at the signed separation.
    B,
}

impl AgentSlot {
    /// Both slots in ascending order.
    pub const ALL: [AgentSlot; 2] = [AgentSlot::A, AgentSlot::B];

    /// The other train.
    #[inline]
    pub fn other(self) -> AgentSlot {
        match self {
            AgentSlot::A => AgentSlot::B,
            AgentSlot::B => AgentSlot::A,
        }
    }

    /// Single-letter label used in output rows.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentSlot::A => "A",
            AgentSlot::B => "B",
        }
    }
}

impl fmt::Display for AgentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ── Marker ────────────────────────────────────────────────────────────────────

/// Coordinate of a stationary parachute marker.
///
/// A train senses a marker when it stands on one; it can tell whether the
/// marker is its own but learns nothing else about the other train.  The
/// algorithm receives the foreign marker only as a `Marker`, never as the
/// other train's `AgentState`, so it cannot read a live position or phase.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker(pub i64);

impl Marker {
    /// `true` if a train at `position` is standing on this marker.
    #[inline(always)]
    pub fn is_at(self, position: i64) -> bool {
        self.0 == position
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marker({})", self.0)
    }
}

impl From<Marker> for i64 {
    #[inline(always)]
    fn from(m: Marker) -> i64 {
        m.0
    }
}
