//! Integration tests for rv-sim.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rv_core::{AgentSlot, AgentState, Marker, RunConfig, Step, SweepPhase};
use rv_sweep::{Action, SearchStrategy, SweepAndWait, SweepResult};

use crate::{
    HistoryObserver, NoopObserver, Sim, SimError, SimObserver, WorldState, create_world, run,
    step, survey, try_run, try_step_with,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Every snapshot from `create_world(separation)` to the end of the run.
fn history(separation: i64, max_steps: u64) -> Vec<WorldState> {
    let config = RunConfig { max_steps, ..RunConfig::new(separation) };
    let mut sim = Sim::new(config).unwrap();
    let mut obs = HistoryObserver::new();
    sim.run(&mut obs).unwrap();
    obs.worlds
}

/// Budget that comfortably covers the `2·D²` collision step.
fn budget(separation: i64) -> u64 {
    let d = separation.unsigned_abs();
    2 * d * d + 10
}

// ── create_world ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod world_tests {
    use super::*;

    #[test]
    fn positive_separation() {
        let w = create_world(7);
        assert_eq!(w.agent_a, AgentState::new(0));
        assert_eq!(w.agent_b, AgentState::new(7));
        assert_eq!(w.step_count, Step::ZERO);
        assert!(!w.has_collided());
        assert_eq!(w.collision_position, None);
    }

    #[test]
    fn negative_separation() {
        let w = create_world(-4);
        assert_eq!(w.agent_b.home, -4);
        assert_eq!(w.positions(), (0, -4));
        assert!(!w.has_collided());
    }

    #[test]
    fn zero_separation_starts_collided() {
        let w = create_world(0);
        assert!(w.has_collided());
        assert_eq!(w.collision_position, Some(0));
        assert_eq!(w.step_count, Step::ZERO);
    }

    #[test]
    fn foreign_marker_is_other_home() {
        let w = create_world(9);
        assert_eq!(w.foreign_marker(AgentSlot::A), Marker(9));
        assert_eq!(w.foreign_marker(AgentSlot::B), Marker(0));
        assert_eq!(w.agent(AgentSlot::B).home, 9);
    }
}

// ── step ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn step_matches_manual_decide_and_advance() {
        let mut w = create_world(3);
        for _ in 0..10 {
            let ma = Marker(w.agent_b.home);
            let mb = Marker(w.agent_a.home);
            let act_a = rv_sweep::decide(&w.agent_a, ma);
            let act_b = rv_sweep::decide(&w.agent_b, mb);
            let expect_a = rv_sweep::advance(&w.agent_a, act_a, ma);
            let expect_b = rv_sweep::advance(&w.agent_b, act_b, mb);
            let next = step(&w);
            assert_eq!(next.agent_a, expect_a);
            assert_eq!(next.agent_b, expect_b);
            assert_eq!(next.step_count, w.step_count.next());
            w = next;
        }
    }

    #[test]
    fn input_snapshot_is_untouched() {
        let w0 = create_world(2);
        let copy = w0;
        let w1 = step(&w0);
        let _w2 = step(&w1);
        assert_eq!(w0, copy);
        assert_ne!(w1, w0);
    }

    #[test]
    fn stale_snapshot_replays_identically() {
        let w0 = create_world(5);
        let w1 = step(&w0);
        let w2 = step(&w1);
        // Stepping an older snapshot again gives the same successor.
        assert_eq!(step(&w0), w1);
        assert_eq!(step(&w1), w2);
    }

    #[test]
    fn collided_world_is_frozen() {
        let done = run(3, 100);
        assert!(done.has_collided());
        let again = step(&done);
        assert_eq!(again, done);
        assert_eq!(step(&step(&again)), done);
    }

    #[test]
    fn crossing_without_sharing_a_coordinate_is_not_collision() {
        struct Opposite;
        impl SearchStrategy for Opposite {
            fn decide(&self, agent: &AgentState, _f: Marker) -> Action {
                if agent.home == 0 { Action::Forward } else { Action::Backward }
            }
            fn try_advance(&self, agent: &AgentState, action: Action, _f: Marker) -> SweepResult<AgentState> {
                let mut next = *agent;
                next.position += action.delta();
                next.offset_from_home += action.delta();
                Ok(next)
            }
        }
        let next = try_step_with(&Opposite, &create_world(1)).unwrap();
        assert_eq!(next.positions(), (1, 0));
        assert!(!next.has_collided());
    }
}

// ── Reference scenarios ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn zero_separation() {
        let w = run(0, 10);
        assert!(w.has_collided());
        assert!(w.step_count <= Step(1));
        assert_eq!(w.collision_position, Some(0));
    }

    #[test]
    fn separation_one() {
        let w = run(1, 10);
        assert!(w.has_collided());
        assert_eq!(w.collision_position, Some(1));
        assert_eq!(w.step_count, Step(2));
    }

    #[test]
    fn separation_three_latches_before_collision() {
        let worlds = history(3, 30);
        let last = worlds.last().unwrap();
        assert!(last.has_collided());
        assert_eq!(last.collision_position, Some(3));
        let before_collision = &worlds[..worlds.len() - 1];
        assert!(
            before_collision
                .iter()
                .any(|w| w.agent_a.is_waiting || w.agent_b.is_waiting),
            "a train should latch before the collision step"
        );
    }

    #[test]
    fn negative_five() {
        let w = run(-5, 100);
        assert!(w.has_collided());
        assert_eq!(w.step_count, run(5, 100).step_count);
    }

    #[test]
    fn separation_one_hundred() {
        let w = run(100, 50_000);
        assert!(w.has_collided());
        assert_eq!(w.collision_position, Some(100));
        assert_eq!(w.step_count, Step(20_000));
    }

    #[test]
    fn budget_exhaustion_is_benign() {
        let w = run(10, 50);
        assert!(!w.has_collided());
        assert_eq!(w.collision_position, None);
        assert_eq!(w.step_count, Step(50));
    }

    #[test]
    fn zero_budget_returns_start() {
        assert_eq!(run(4, 0), create_world(4));
    }
}

// ── Properties over many separations ──────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn eventual_collision_within_two_d_squared() {
        for d in -40i64..=40 {
            let w = run(d, budget(d));
            assert!(w.has_collided(), "separation {d} did not collide");
            let dd = d.unsigned_abs();
            assert_eq!(w.step_count, Step(2 * dd * dd), "separation {d}");
        }
    }

    #[test]
    fn required_budget_grows_with_distance() {
        let steps: Vec<u64> = (1..=20).map(|d| run(d, budget(d)).step_count.0).collect();
        assert!(steps.windows(2).all(|w| w[0] < w[1]), "{steps:?}");
    }

    #[test]
    fn non_negative_separation_collides_at_b_home() {
        for d in 0i64..=40 {
            assert_eq!(run(d, budget(d)).collision_position, Some(d), "separation {d}");
        }
    }

    #[test]
    fn negative_separation_collides_at_a_home() {
        for d in -40i64..0 {
            assert_eq!(run(d, budget(d)).collision_position, Some(0), "separation {d}");
        }
    }

    #[test]
    fn invariants_hold_in_every_snapshot() {
        for d in [-9i64, -4, -1, 1, 2, 6, 11] {
            let worlds = history(d, budget(d));
            for pair in worlds.windows(2) {
                let (prev, next) = (&pair[0], &pair[1]);
                assert_eq!(next.step_count, prev.step_count.next());
                for slot in AgentSlot::ALL {
                    let (p, n) = (prev.agent(slot), next.agent(slot));
                    assert!(n.is_consistent(), "separation {d} {slot}: {n}");
                    assert_eq!(n.offset_from_home, n.position - n.home);
                    assert_eq!(n.home, p.home);
                    assert!(n.phase_number >= p.phase_number);
                    if p.is_waiting {
                        assert!(n.is_waiting, "latch released for {slot}");
                        assert_eq!(n, p, "latched train {slot} changed");
                    }
                }
                assert_eq!(prev.has_collided(), prev.collision_position.is_some());
                assert!(!prev.has_collided(), "run continued after collision");
            }
        }
    }

    #[test]
    fn phase_number_grows_by_one_per_cycle() {
        let worlds = history(7, budget(7));
        for pair in worlds.windows(2) {
            for slot in AgentSlot::ALL {
                let (p, n) = (pair[0].agent(slot), pair[1].agent(slot));
                if n.phase_number != p.phase_number {
                    assert_eq!(n.phase_number, p.phase_number + 1);
                    assert_eq!(p.sweep_phase, SweepPhase::ReturnFromBackward);
                    assert_eq!(n.sweep_phase, SweepPhase::SweepForward);
                    assert!(n.is_home(), "a cycle ends at the home marker");
                }
            }
        }
    }

    #[test]
    fn mirrored_separation_swaps_and_translates_trains() {
        // Both trains sweep forward first, so −D is not the negation of +D.
        // Shifting the −D world by D gives the +D world with A and B
        // exchanged; the dynamics are translation-invariant, so the
        // trajectories match tick for tick under that relabelling.
        for d in [1i64, 2, 3, 5, 8] {
            let pos = history(d, budget(d));
            let neg = history(-d, budget(d));
            assert_eq!(pos.len(), neg.len(), "separation ±{d}");
            for (p, n) in pos.iter().zip(&neg) {
                assert_eq!(n.agent_a.position, p.agent_b.position - d);
                assert_eq!(n.agent_b.position, p.agent_a.position - d);
                assert_eq!(n.agent_a.is_waiting, p.agent_b.is_waiting);
                assert_eq!(n.agent_b.is_waiting, p.agent_a.is_waiting);
            }
            let (pc, nc) = (pos.last().unwrap(), neg.last().unwrap());
            assert_eq!(nc.collision_position.map(|x| x + d), pc.collision_position);
        }
    }

    #[test]
    fn sampled_separations_collide() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let d: i64 = rng.gen_range(-150..=150);
            let w = run(d, budget(d));
            assert!(w.has_collided(), "separation {d}");
            if d >= 0 {
                assert_eq!(w.collision_position, Some(d));
            }
        }
    }
}

// ── Integer range boundary ────────────────────────────────────────────────────

#[cfg(test)]
mod overflow_tests {
    use super::*;

    #[test]
    fn try_run_reports_overflow() {
        match try_run(i64::MAX, 10) {
            Err(SimError::Sweep { slot, step, .. }) => {
                assert_eq!(slot, AgentSlot::B);
                assert_eq!(step, Step(1));
            }
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    #[test]
    fn sim_step_reports_overflow() {
        let mut sim = Sim::new(RunConfig::new(i64::MAX)).unwrap();
        assert!(sim.step().is_err());
        // The stored world is left at the last good snapshot.
        assert_eq!(sim.world, create_world(i64::MAX));
    }

    #[test]
    #[should_panic]
    fn run_panics_on_overflow() {
        let _ = run(i64::MAX, 10);
    }

    #[test]
    fn far_negative_separation_is_fine() {
        // B starts at i64::MIN and sweeps forward first; the third step
        // would take it below the range.
        let w = try_run(i64::MIN, 2).unwrap();
        assert_eq!(w.step_count, Step(2));
        assert_eq!(w.agent_b.position, i64::MIN);
        assert!(try_run(i64::MIN, 3).is_err());
        assert!(w.agent_b.is_consistent());
    }
}

// ── Sim runner ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sim_tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        starts:     usize,
        step_ends:  usize,
        snapshots:  Vec<Step>,
        latches:    Vec<(Step, AgentSlot)>,
        collisions: Vec<(Step, i64)>,
        ended:      usize,
    }

    impl SimObserver for Counter {
        fn on_step_start(&mut self, _s: Step) { self.starts += 1; }
        fn on_step_end(&mut self, _s: Step, _w: &WorldState) { self.step_ends += 1; }
        fn on_snapshot(&mut self, s: Step, _w: &WorldState) { self.snapshots.push(s); }
        fn on_latch(&mut self, s: Step, slot: AgentSlot, _a: &AgentState) { self.latches.push((s, slot)); }
        fn on_collision(&mut self, s: Step, p: i64) { self.collisions.push((s, p)); }
        fn on_sim_end(&mut self, _w: &WorldState) { self.ended += 1; }
    }

    #[test]
    fn run_matches_free_function() {
        let mut sim = Sim::new(RunConfig::new(6)).unwrap();
        let world = *sim.run(&mut NoopObserver).unwrap();
        assert_eq!(world, run(6, RunConfig::default().max_steps));
    }

    #[test]
    fn observer_hooks_fire() {
        let mut sim = Sim::new(RunConfig::new(3)).unwrap();
        let mut obs = Counter::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.starts, 18);
        assert_eq!(obs.step_ends, 18);
        assert_eq!(obs.latches, vec![(Step(16), AgentSlot::A)]);
        assert_eq!(obs.collisions, vec![(Step(18), 3)]);
        assert_eq!(obs.ended, 1);
        // Interval 1: the start plus every step.
        assert_eq!(obs.snapshots.len(), 19);
    }

    #[test]
    fn snapshot_interval_respected() {
        let config = RunConfig { output_interval_steps: 5, ..RunConfig::new(3) };
        let mut sim = Sim::new(config).unwrap();
        let mut obs = Counter::default();
        sim.run(&mut obs).unwrap();
        // 0, 5, 10, 15, then the colliding step 18.
        assert_eq!(obs.snapshots, vec![Step(0), Step(5), Step(10), Step(15), Step(18)]);
    }

    #[test]
    fn run_stops_at_budget() {
        let config = RunConfig { max_steps: 7, ..RunConfig::new(20) };
        let mut sim = Sim::new(config).unwrap();
        let mut obs = Counter::default();
        let world = *sim.run(&mut obs).unwrap();
        assert!(!world.has_collided());
        assert_eq!(world.step_count, Step(7));
        assert!(obs.collisions.is_empty());
        assert_eq!(obs.ended, 1);
    }

    #[test]
    fn run_steps_is_incremental() {
        let mut sim = Sim::new(RunConfig::new(4)).unwrap();
        sim.run_steps(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.world.step_count, Step(5));
        sim.run_steps(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.world.step_count, Step(8));
        // Stops at the collision (step 32) even with a larger request.
        sim.run_steps(1_000, &mut NoopObserver).unwrap();
        assert_eq!(sim.world.step_count, Step(32));
        assert_eq!(sim.world.collision_position, Some(4));
    }

    #[test]
    fn history_starts_with_initial_world() {
        let mut sim = Sim::new(RunConfig::new(2)).unwrap();
        let mut obs = HistoryObserver::new();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.worlds[0], create_world(2));
        assert_eq!(obs.worlds.len(), 9);
        assert_eq!(obs.trajectory()[1], (1, 3));
        assert_eq!(obs.last().unwrap().collision_position, Some(2));
    }

    #[test]
    fn zero_interval_config_rejected() {
        let config = RunConfig { output_interval_steps: 0, ..RunConfig::new(2) };
        assert!(matches!(Sim::new(config), Err(SimError::Config(_))));
    }

    #[test]
    fn custom_strategy_drives_sim() {
        struct StandStill;
        impl SearchStrategy for StandStill {
            fn decide(&self, _a: &AgentState, _f: Marker) -> Action { Action::Wait }
            fn try_advance(&self, a: &AgentState, _x: Action, _f: Marker) -> SweepResult<AgentState> {
                Ok(*a)
            }
        }
        let config = RunConfig { max_steps: 25, ..RunConfig::new(1) };
        let mut sim = Sim::with_strategy(config, StandStill).unwrap();
        let world = *sim.run(&mut NoopObserver).unwrap();
        assert_eq!(world.positions(), (0, 1));
        assert_eq!(world.step_count, Step(25));
        assert!(!world.has_collided());
    }

    #[test]
    fn default_strategy_is_sweep_and_wait() {
        let sim = Sim::new(RunConfig::new(1)).unwrap();
        let _: &SweepAndWait = &sim.strategy;
    }
}

// ── survey ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod survey_tests {
    use super::*;

    #[test]
    fn rows_follow_input_order() {
        let seps = [5i64, -2, 0, 9, -7];
        let rows = survey(&seps, 500).unwrap();
        let got: Vec<i64> = rows.iter().map(|r| r.separation).collect();
        assert_eq!(got, seps);
        assert!(rows.iter().all(|r| r.collided()));
        assert_eq!(rows[0].steps, Step(50));
        assert_eq!(rows[2].steps, Step(0));
    }

    #[test]
    fn small_budget_leaves_far_runs_unfinished() {
        let rows = survey(&[1, 30], 100).unwrap();
        assert!(rows[0].collided());
        assert!(!rows[1].collided());
        assert_eq!(rows[1].steps, Step(100));
    }

    #[test]
    fn overflow_surfaces_as_error() {
        assert!(survey(&[1, i64::MAX], 10).is_err());
    }
}
