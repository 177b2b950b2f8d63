//! Pure step and run functions over [`WorldState`] values.

use rv_core::{AgentSlot, Step};
use rv_sweep::{SearchStrategy, SweepAndWait};
use tracing::{debug, info, trace};

use crate::{SimError, SimResult, WorldState, create_world};

/// Advance `world` by one synchronized tick using `strategy`.
///
/// Both actions are decided from `world` before either train moves, and each
/// transition only sees its own train's record plus the foreign marker.  A
/// collided world is returned unchanged.
pub fn try_step_with<S: SearchStrategy>(strategy: &S, world: &WorldState) -> SimResult<WorldState> {
    if world.has_collided() {
        return Ok(*world);
    }

    let step = world.step_count.next();
    let (a, b) = (&world.agent_a, &world.agent_b);
    let marker_a = world.foreign_marker(AgentSlot::A);
    let marker_b = world.foreign_marker(AgentSlot::B);

    // ── Decide: one snapshot, two independent choices ─────────────────────
    let action_a = strategy.decide(a, marker_a);
    let action_b = strategy.decide(b, marker_b);

    // ── Advance ───────────────────────────────────────────────────────────
    let next_a = strategy
        .try_advance(a, action_a, marker_a)
        .map_err(|source| SimError::Sweep { slot: AgentSlot::A, step, source })?;
    let next_b = strategy
        .try_advance(b, action_b, marker_b)
        .map_err(|source| SimError::Sweep { slot: AgentSlot::B, step, source })?;

    trace!(%step, %action_a, %action_b, a = next_a.position, b = next_b.position, "step");
    for (slot, before, after) in [(AgentSlot::A, a, &next_a), (AgentSlot::B, b, &next_b)] {
        if after.is_waiting && !before.is_waiting {
            debug!(%step, %slot, position = after.position, "train latched on foreign marker");
        }
    }

    let collision_position = (next_a.position == next_b.position).then_some(next_a.position);
    if let Some(position) = collision_position {
        debug!(%step, position, "trains collided");
    }

    Ok(WorldState {
        agent_a: next_a,
        agent_b: next_b,
        step_count: step,
        collision_position,
    })
}

/// [`try_step_with`] using [`SweepAndWait`].
pub fn try_step(world: &WorldState) -> SimResult<WorldState> {
    try_step_with(&SweepAndWait, world)
}

/// [`try_step_with`] for callers that treat range exhaustion as a bug.
///
/// # Panics
///
/// Panics if a train would leave the `i64` coordinate range.
pub fn step_with<S: SearchStrategy>(strategy: &S, world: &WorldState) -> WorldState {
    match try_step_with(strategy, world) {
        Ok(next) => next,
        Err(e)   => panic!("{e}"),
    }
}

/// Advance `world` by one tick of Sweep & Wait.
///
/// Calling this on a collided world returns the same value, so a UI can keep
/// stepping on a timer without special-casing the end of the run.
///
/// # Panics
///
/// Panics if a train would leave the `i64` coordinate range.
pub fn step(world: &WorldState) -> WorldState {
    step_with(&SweepAndWait, world)
}

/// Start from [`create_world`]`(separation)` and step until the trains
/// collide or `max_steps` ticks have run.
///
/// Running out of budget is not an error: the returned world simply has no
/// collision.
pub fn try_run(separation: i64, max_steps: u64) -> SimResult<WorldState> {
    let end = Step(max_steps);
    let mut world = create_world(separation);
    while !world.has_collided() && world.step_count < end {
        world = try_step(&world)?;
    }
    match world.collision_position {
        Some(position) => info!(separation, steps = world.step_count.0, position, "run collided"),
        None           => info!(separation, max_steps, "run exhausted its step budget"),
    }
    Ok(world)
}

/// [`try_run`] for separations far from the `i64` limits.
///
/// # Panics
///
/// Panics if a train would leave the `i64` coordinate range.
pub fn run(separation: i64, max_steps: u64) -> WorldState {
    match try_run(separation, max_steps) {
        Ok(world) => world,
        Err(e)    => panic!("{e}"),
    }
}
