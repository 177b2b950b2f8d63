//! The `Sim` struct and its run loop.

use rv_core::{AgentSlot, RunConfig, Step};
use rv_sweep::{SearchStrategy, SweepAndWait};
use tracing::info;

use crate::{SimObserver, SimResult, WorldState, create_world, try_step_with};

/// Stateful runner around the pure [`try_step_with`] function.
///
/// `Sim` holds the current snapshot and replaces it with a new value on every
/// step.  Observers see each snapshot by reference and copy whatever they
/// want to keep.
pub struct Sim<S: SearchStrategy = SweepAndWait> {
    /// Separation, step budget, and snapshot interval.
    pub config: RunConfig,

    /// The current snapshot.
    pub world: WorldState,

    /// The per-train algorithm.
    pub strategy: S,

    /// Whether `on_sim_start` has been delivered.
    started: bool,
}

impl Sim<SweepAndWait> {
    /// A Sweep & Wait run for `config`.
    pub fn new(config: RunConfig) -> SimResult<Self> {
        Self::with_strategy(config, SweepAndWait)
    }
}

impl<S: SearchStrategy> Sim<S> {
    /// A run for `config` driven by `strategy`.
    pub fn with_strategy(config: RunConfig, strategy: S) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            world: create_world(config.separation),
            config,
            strategy,
            started: false,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one step without observers.  A collided world stays as it is.
    pub fn step(&mut self) -> SimResult<&WorldState> {
        self.world = try_step_with(&self.strategy, &self.world)?;
        Ok(&self.world)
    }

    /// Run until the trains collide or `config.max_steps` is reached.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<&WorldState> {
        self.start(observer);
        let end = self.config.end_step();
        while !self.world.has_collided() && self.world.step_count < end {
            self.process_step(observer)?;
        }
        self.finish(observer);
        Ok(&self.world)
    }

    /// Run at most `n` steps from the current position (ignores
    /// `max_steps`), stopping early on collision.
    ///
    /// Useful for tests and incremental stepping.  `on_sim_end` is not
    /// called.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<&WorldState> {
        self.start(observer);
        for _ in 0..n {
            if self.world.has_collided() {
                break;
            }
            self.process_step(observer)?;
        }
        Ok(&self.world)
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn start<O: SimObserver>(&mut self, observer: &mut O) {
        if self.started {
            return;
        }
        self.started = true;
        observer.on_sim_start(&self.world);
        if self.config.is_output_step(self.world.step_count) || self.world.has_collided() {
            observer.on_snapshot(self.world.step_count, &self.world);
        }
    }

    fn process_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let step = self.world.step_count.next();
        observer.on_step_start(step);

        let prev = self.world;
        self.world = try_step_with(&self.strategy, &prev)?;

        for slot in AgentSlot::ALL {
            let agent = self.world.agent(slot);
            if agent.is_waiting && !prev.agent(slot).is_waiting {
                observer.on_latch(step, slot, agent);
            }
        }
        if let Some(position) = self.world.collision_position {
            observer.on_collision(step, position);
        }

        observer.on_step_end(step, &self.world);
        if self.config.is_output_step(step) || self.world.has_collided() {
            observer.on_snapshot(step, &self.world);
        }
        Ok(())
    }

    fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        let steps: Step = self.world.step_count;
        match self.world.collision_position {
            Some(position) => info!(
                separation = self.config.separation,
                steps = steps.0,
                position,
                "simulation ended in collision"
            ),
            None => info!(
                separation = self.config.separation,
                max_steps = self.config.max_steps,
                "simulation exhausted its step budget"
            ),
        }
        observer.on_sim_end(&self.world);
    }
}
