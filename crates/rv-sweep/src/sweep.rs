//! Sweep & Wait: the decision and transition functions for one train.
//!
//! A train walks `n` steps forward, `n` back to its marker, `n` backward and
//! `n` back again, then repeats with `n + 1`.  The first time it stands on a
//! marker that is not its own it stops for good.  The other train, still
//! sweeping with the same widening radius, eventually walks into it.

use rv_core::{AgentState, Marker};

use crate::{Action, SweepError, SweepResult};

/// `true` when the train stands on the foreign marker and not on its own.
///
/// This is the only way information about the other train reaches the
/// algorithm.
#[inline]
fn at_foreign_marker(agent: &AgentState, foreign: Marker) -> bool {
    foreign.is_at(agent.position) && !agent.is_home()
}

/// Choose the action for this tick.
///
/// Rules, first match wins:
///
/// 1. latched trains wait;
/// 2. a train on the foreign marker waits (the latch is set by the
///    following [`advance`], not here);
/// 3. otherwise the sweep phase alone picks the direction.
pub fn decide(agent: &AgentState, foreign: Marker) -> Action {
    use rv_core::SweepPhase::*;

    if agent.is_waiting || at_foreign_marker(agent, foreign) {
        return Action::Wait;
    }
    match agent.sweep_phase {
        SweepForward | ReturnFromBackward => Action::Forward,
        ReturnFromForward | SweepBackward => Action::Backward,
    }
}

/// Build the train's next state from `action`, reporting range exhaustion.
///
/// - `Forward`/`Backward` move one unit and count one step in the phase.
/// - `Wait` leaves the position alone and sets the latch if the input state
///   stands on the foreign marker.
///
/// Once the resulting state is not latched, a phase that has run for
/// `phase_number` steps rolls over to the next one; finishing
/// `ReturnFromBackward` also grows `phase_number` by one.
///
/// A latched input is returned unchanged whatever `action` says.
pub fn try_advance(
    agent:   &AgentState,
    action:  Action,
    foreign: Marker,
) -> SweepResult<AgentState> {
    if agent.is_waiting {
        return Ok(*agent);
    }

    let mut next = *agent;
    match action {
        Action::Wait => {
            if at_foreign_marker(agent, foreign) {
                next.is_waiting = true;
            }
        }
        Action::Forward | Action::Backward => {
            let delta = action.delta();
            next.position = agent
                .position
                .checked_add(delta)
                .ok_or(SweepError::PositionOverflow { position: agent.position, delta })?;
            next.offset_from_home = agent
                .offset_from_home
                .checked_add(delta)
                .ok_or(SweepError::OffsetOverflow { offset: agent.offset_from_home, delta })?;
            next.steps_in_phase = agent
                .steps_in_phase
                .checked_add(1)
                .ok_or(SweepError::PhaseOverflow { phase_number: agent.phase_number })?;
        }
    }

    if !next.is_waiting && next.steps_in_phase >= next.phase_number {
        next.steps_in_phase = 0;
        if next.sweep_phase.completes_cycle() {
            next.phase_number = next
                .phase_number
                .checked_add(1)
                .ok_or(SweepError::PhaseOverflow { phase_number: next.phase_number })?;
        }
        next.sweep_phase = next.sweep_phase.next();
    }

    debug_assert!(next.is_consistent(), "transition broke an invariant: {next}");
    Ok(next)
}

/// Build the train's next state from `action`.
///
/// # Panics
///
/// Panics if the move would leave the `i64` coordinate range or grow
/// `phase_number` past `u64::MAX`.  Use [`try_advance`] to handle that
/// boundary without panicking.
pub fn advance(agent: &AgentState, action: Action, foreign: Marker) -> AgentState {
    match try_advance(agent, action, foreign) {
        Ok(next) => next,
        Err(e)   => panic!("sweep transition out of range: {e}"),
    }
}
