//! The world snapshot shared by both trains.

use rv_core::{AgentSlot, AgentState, Marker, Step};

/// One immutable snapshot of the whole simulation.
///
/// `WorldState` is `Copy`: [`step`][crate::step] reads one value and returns
/// a new one, never touching the input.  Once `collision_position` is set the
/// world is frozen and further steps return it unchanged.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    /// The train that started at 0.
    pub agent_a: AgentState,

    /// The train that started at the separation.
    pub agent_b: AgentState,

    /// Synchronized ticks executed so far.
    pub step_count: Step,

    /// Shared coordinate at the moment of collision.  `Some` exactly when
    /// the trains have met.
    pub collision_position: Option<i64>,
}

impl WorldState {
    /// `true` once both trains have occupied the same coordinate.
    #[inline]
    pub fn has_collided(&self) -> bool {
        self.collision_position.is_some()
    }

    /// The record for `slot`.
    #[inline]
    pub fn agent(&self, slot: AgentSlot) -> &AgentState {
        match slot {
            AgentSlot::A => &self.agent_a,
            AgentSlot::B => &self.agent_b,
        }
    }

    /// The marker `slot` can sense besides its own: the other train's home.
    #[inline]
    pub fn foreign_marker(&self, slot: AgentSlot) -> Marker {
        Marker(self.agent(slot.other()).home)
    }

    /// Current positions as `(a, b)`.
    #[inline]
    pub fn positions(&self) -> (i64, i64) {
        (self.agent_a.position, self.agent_b.position)
    }
}

/// Build the starting world: train A parked at 0, train B at `separation`.
///
/// A zero separation puts both trains on the same coordinate, so that world
/// starts out collided at 0 with no steps taken.
pub fn create_world(separation: i64) -> WorldState {
    let agent_a = AgentState::new(0);
    let agent_b = AgentState::new(separation);
    WorldState {
        agent_a,
        agent_b,
        step_count:         Step::ZERO,
        collision_position: (agent_a.position == agent_b.position).then_some(agent_a.position),
    }
}
