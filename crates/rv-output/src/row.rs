//! Plain data row types written by output backends.

use rv_core::{AgentSlot, AgentState, SweepPhase};
use rv_sim::{SurveyRow, WorldState};

/// One train's state at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrajectoryRow {
    pub step:             u64,
    pub agent:            AgentSlot,
    pub position:         i64,
    pub home:             i64,
    pub offset_from_home: i64,
    pub sweep_phase:      SweepPhase,
    pub phase_number:     u64,
    pub steps_in_phase:   u64,
    pub is_waiting:       bool,
}

impl TrajectoryRow {
    pub fn new(step: u64, agent: AgentSlot, state: &AgentState) -> Self {
        Self {
            step,
            agent,
            position:         state.position,
            home:             state.home,
            offset_from_home: state.offset_from_home,
            sweep_phase:      state.sweep_phase,
            phase_number:     state.phase_number,
            steps_in_phase:   state.steps_in_phase,
            is_waiting:       state.is_waiting,
        }
    }

    /// Rows for both trains, A first.
    pub fn pair(world: &WorldState) -> [TrajectoryRow; 2] {
        AgentSlot::ALL.map(|slot| Self::new(world.step_count.0, slot, world.agent(slot)))
    }
}

/// How one run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeRow {
    pub separation:         i64,
    pub steps:              u64,
    /// `None` when the step budget ran out first.
    pub collision_position: Option<i64>,
}

impl OutcomeRow {
    pub fn from_world(separation: i64, world: &WorldState) -> Self {
        Self {
            separation,
            steps:              world.step_count.0,
            collision_position: world.collision_position,
        }
    }

    #[inline]
    pub fn collided(&self) -> bool {
        self.collision_position.is_some()
    }
}

impl From<SurveyRow> for OutcomeRow {
    fn from(row: SurveyRow) -> Self {
        Self {
            separation:         row.separation,
            steps:              row.steps.0,
            collision_position: row.collision_position,
        }
    }
}
