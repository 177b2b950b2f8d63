//! trains: command-line front end for the two-train rendezvous simulator.
//!
//! Two trains are dropped at unknown integer offsets on an infinite track,
//! each leaving a parachute marker where it lands.  Both run Sweep & Wait
//! and never communicate; this binary runs one meeting or surveys a range of
//! separations and reports how long each took.

mod config;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rv_core::{AgentSlot, AgentState, DEFAULT_MAX_STEPS, RunConfig, Step};
use rv_output::{CsvWriter, OutcomeRow, OutputWriter, TrajectoryObserver};
use rv_sim::{NoopObserver, Sim, SimObserver, SurveyRow, WorldState, survey};

use config::{Overrides, load_config};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "trains")]
#[command(about = "Two trains, no radio: Sweep & Wait rendezvous on an infinite line", version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one rendezvous until the trains meet or the budget runs out
    Run {
        /// Starting coordinate of train B (train A starts at 0)
        #[arg(short, long, allow_hyphen_values = true)]
        separation: Option<i64>,

        /// Step budget
        #[arg(short, long)]
        max_steps: Option<u64>,

        /// Write a trajectory row every N steps
        #[arg(short, long)]
        interval: Option<u64>,

        /// TOML file with `separation`, `max_steps`, `output_interval_steps`
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory for trajectory.csv and outcome.csv
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the final world as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every separation in an inclusive range
    Survey {
        /// First separation
        #[arg(long, allow_hyphen_values = true)]
        from: i64,

        /// Last separation
        #[arg(long, allow_hyphen_values = true)]
        to: i64,

        /// Step budget for each run
        #[arg(short, long, default_value_t = DEFAULT_MAX_STEPS)]
        max_steps: u64,

        /// Directory for outcome.csv
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the rows as JSON
        #[arg(long)]
        json: bool,
    },
}

// ── Progress reporting ────────────────────────────────────────────────────────

/// Logs the two events worth knowing about while a run is in flight.
struct EventLog;

impl SimObserver for EventLog {
    fn on_latch(&mut self, step: Step, slot: AgentSlot, agent: &AgentState) {
        info!(%step, %slot, position = agent.position, "train found the foreign marker and stopped");
    }

    fn on_collision(&mut self, step: Step, position: i64) {
        info!(%step, position, "trains met");
    }
}

/// Forwards every hook to two observers.
struct Both<'a, A: SimObserver, B: SimObserver>(&'a mut A, &'a mut B);

impl<A: SimObserver, B: SimObserver> SimObserver for Both<'_, A, B> {
    fn on_sim_start(&mut self, w: &WorldState) {
        self.0.on_sim_start(w);
        self.1.on_sim_start(w);
    }
    fn on_step_start(&mut self, s: Step) {
        self.0.on_step_start(s);
        self.1.on_step_start(s);
    }
    fn on_step_end(&mut self, s: Step, w: &WorldState) {
        self.0.on_step_end(s, w);
        self.1.on_step_end(s, w);
    }
    fn on_snapshot(&mut self, s: Step, w: &WorldState) {
        self.0.on_snapshot(s, w);
        self.1.on_snapshot(s, w);
    }
    fn on_latch(&mut self, s: Step, slot: AgentSlot, a: &AgentState) {
        self.0.on_latch(s, slot, a);
        self.1.on_latch(s, slot, a);
    }
    fn on_collision(&mut self, s: Step, p: i64) {
        self.0.on_collision(s, p);
        self.1.on_collision(s, p);
    }
    fn on_sim_end(&mut self, w: &WorldState) {
        self.0.on_sim_end(w);
        self.1.on_sim_end(w);
    }
}

// ── JSON shapes ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RunSummary<'a> {
    config:     &'a RunConfig,
    world:      &'a WorldState,
    elapsed_ms: f64,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Run { separation, max_steps, interval, config, output, json } => {
            let base = match config {
                Some(path) => load_config(&path)?,
                None       => RunConfig::default(),
            };
            let config = Overrides { separation, max_steps, interval }.apply(base)?;
            run_one(config, output.as_deref(), json)
        }
        Commands::Survey { from, to, max_steps, output, json } => {
            run_survey(from, to, max_steps, output.as_deref(), json)
        }
    }
}

fn run_one(config: RunConfig, output: Option<&Path>, json: bool) -> Result<()> {
    info!(separation = config.separation, max_steps = config.max_steps, "starting run");
    let mut sim = Sim::new(config.clone())?;
    let mut log = EventLog;

    let t0 = Instant::now();
    match output {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let mut obs = TrajectoryObserver::new(CsvWriter::new(dir)?, &config);
            sim.run(&mut Both(&mut log, &mut obs))?;
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
        }
        None => {
            sim.run(&mut Both(&mut log, &mut NoopObserver))?;
        }
    }
    let elapsed = t0.elapsed();
    let world = sim.world;

    if json {
        let summary = RunSummary {
            config:     &config,
            world:      &world,
            elapsed_ms: elapsed.as_secs_f64() * 1_000.0,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== trains — Sweep & Wait rendezvous ===");
    println!(
        "Separation: {}  |  Budget: {} steps",
        config.separation, config.max_steps
    );
    match world.collision_position {
        Some(p) => println!("Met at {p} after {} steps", world.step_count.0),
        None    => println!(
            "No meeting within {} steps (retry with a larger --max-steps)",
            world.step_count.0
        ),
    }
    println!("Finished in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    println!();

    println!("{:<6} {:>8} {:>8} {:>7} {:<22} {:>6} {:<7}", "Train", "Pos", "Home", "Offset", "Phase", "Cycle", "Waiting");
    println!("{}", "-".repeat(70));
    for slot in AgentSlot::ALL {
        let a = world.agent(slot);
        println!(
            "{:<6} {:>8} {:>8} {:>+7} {:<22} {:>6} {:<7}",
            slot,
            a.position,
            a.home,
            a.offset_from_home,
            a.sweep_phase,
            a.phase_number,
            if a.is_waiting { "yes" } else { "no" },
        );
    }
    if let Some(dir) = output {
        println!();
        println!("Wrote {}", dir.join("trajectory.csv").display());
        println!("Wrote {}", dir.join("outcome.csv").display());
    }
    Ok(())
}

fn run_survey(from: i64, to: i64, max_steps: u64, output: Option<&Path>, json: bool) -> Result<()> {
    if from > to {
        bail!("--from ({from}) must not exceed --to ({to})");
    }
    let separations: Vec<i64> = (from..=to).collect();
    info!(runs = separations.len(), max_steps, "starting survey");

    let t0 = Instant::now();
    let rows: Vec<SurveyRow> = survey(&separations, max_steps)?;
    let elapsed = t0.elapsed();

    if let Some(dir) = output {
        std::fs::create_dir_all(dir)?;
        let mut writer = CsvWriter::new(dir)?;
        for row in &rows {
            writer.write_outcome(&OutcomeRow::from(*row))?;
        }
        writer.finish()?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:>11} {:>10} {:>10}", "Separation", "Steps", "Met at");
    println!("{}", "-".repeat(33));
    for row in &rows {
        let met = row
            .collision_position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:>11} {:>10} {:>10}", row.separation, row.steps.0, met);
    }
    let missed = rows.iter().filter(|r| !r.collided()).count();
    println!();
    println!(
        "{} runs in {:.3} s, {} without a meeting",
        rows.len(),
        elapsed.as_secs_f64(),
        missed
    );
    Ok(())
}
