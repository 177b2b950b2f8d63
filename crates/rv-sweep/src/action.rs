//! Train actions: what a train does with one tick.

use std::fmt;

/// The move a train makes during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// One unit towards `+∞`.
    Forward,
    /// One unit towards `−∞`.
    Backward,
    /// Hold position.
    Wait,
}

impl Action {
    /// Signed change in position this action causes.
    #[inline]
    pub fn delta(self) -> i64 {
        match self {
            Action::Forward  => 1,
            Action::Backward => -1,
            Action::Wait     => 0,
        }
    }

    /// `true` for `Forward` and `Backward`.
    #[inline]
    pub fn is_move(self) -> bool {
        !matches!(self, Action::Wait)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Forward  => "forward",
            Action::Backward => "backward",
            Action::Wait     => "wait",
        })
    }
}
