//! The `SearchStrategy` trait, the seam between the driver and the algorithm.

use rv_core::{AgentState, Marker};

use crate::{Action, SweepResult};

/// Pluggable per-train search algorithm.
///
/// The driver in rv-sim calls [`decide`][Self::decide] for both trains from
/// one snapshot, then [`try_advance`][Self::try_advance] for each.  Neither
/// method is given the other train's state, only the foreign marker.
///
/// Implementations must be pure: the same inputs always produce the same
/// output.  They are `Send + Sync` so surveys can run on a thread pool.
///
/// # Example
///
/// ```rust,ignore
/// struct StandStill;
///
/// impl SearchStrategy for StandStill {
///     fn decide(&self, _agent: &AgentState, _foreign: Marker) -> Action {
///         Action::Wait
///     }
///     fn try_advance(&self, agent: &AgentState, _a: Action, _f: Marker) -> SweepResult<AgentState> {
///         Ok(*agent)
///     }
/// }
/// ```
pub trait SearchStrategy: Send + Sync + 'static {
    /// Pick this tick's action.
    fn decide(&self, agent: &AgentState, foreign: Marker) -> Action;

    /// Build the next state, reporting integer range exhaustion.
    fn try_advance(
        &self,
        agent:   &AgentState,
        action:  Action,
        foreign: Marker,
    ) -> SweepResult<AgentState>;

    /// Build the next state.
    ///
    /// # Panics
    ///
    /// Panics where [`try_advance`][Self::try_advance] would return an error.
    fn advance(&self, agent: &AgentState, action: Action, foreign: Marker) -> AgentState {
        match self.try_advance(agent, action, foreign) {
            Ok(next) => next,
            Err(e)   => panic!("sweep transition out of range: {e}"),
        }
    }
}

/// The Sweep & Wait algorithm from [`crate::sweep`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepAndWait;

impl SearchStrategy for SweepAndWait {
    #[inline]
    fn decide(&self, agent: &AgentState, foreign: Marker) -> Action {
        crate::decide(agent, foreign)
    }

    #[inline]
    fn try_advance(
        &self,
        agent:   &AgentState,
        action:  Action,
        foreign: Marker,
    ) -> SweepResult<AgentState> {
        crate::try_advance(agent, action, foreign)
    }
}
