//! Simulation observer trait for progress reporting and data collection.

use rv_core::{AgentSlot, AgentState, Step};

use crate::WorldState;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// run loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers own whatever they collect;
/// the simulation keeps no global counters.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, world: &WorldState) {
///         if step.0 % self.interval == 0 {
///             println!("{step}: a={} b={}", world.agent_a.position, world.agent_b.position);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once with the starting world, before the first step.
    fn on_sim_start(&mut self, _world: &WorldState) {}

    /// Called at the start of each step, before any processing.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called after each step with the freshly produced world.
    fn on_step_end(&mut self, _step: Step, _world: &WorldState) {}

    /// Called at snapshot intervals (every `config.output_interval_steps`
    /// steps, at step 0, and on the colliding step).
    fn on_snapshot(&mut self, _step: Step, _world: &WorldState) {}

    /// Called on the step a train's waiting latch is set.
    fn on_latch(&mut self, _step: Step, _slot: AgentSlot, _agent: &AgentState) {}

    /// Called on the step the trains first share a coordinate.
    fn on_collision(&mut self, _step: Step, _position: i64) {}

    /// Called once after the run stops, collided or not.
    fn on_sim_end(&mut self, _world: &WorldState) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Records every snapshot the run produces, starting world included.
///
/// Snapshots are plain values, so the recorded history stays valid for
/// replay or undo no matter how the simulation continues.
#[derive(Debug, Default, Clone)]
pub struct HistoryObserver {
    pub worlds: Vec<WorldState>,
}

impl HistoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions `(a, b)` for every recorded snapshot.
    pub fn trajectory(&self) -> Vec<(i64, i64)> {
        self.worlds.iter().map(WorldState::positions).collect()
    }

    /// The last recorded snapshot.
    pub fn last(&self) -> Option<&WorldState> {
        self.worlds.last()
    }
}

impl SimObserver for HistoryObserver {
    fn on_sim_start(&mut self, world: &WorldState) {
        self.worlds.push(*world);
    }

    fn on_step_end(&mut self, _step: Step, world: &WorldState) {
        self.worlds.push(*world);
    }
}
