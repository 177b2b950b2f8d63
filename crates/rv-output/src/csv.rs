//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trajectory.csv`
//! - `outcome.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutcomeRow, OutputResult, TrajectoryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    trajectory: Writer<File>,
    outcomes:   Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trajectory = Writer::from_path(dir.join("trajectory.csv"))?;
        trajectory.write_record([
            "step",
            "agent",
            "position",
            "home",
            "offset_from_home",
            "sweep_phase",
            "phase_number",
            "steps_in_phase",
            "is_waiting",
        ])?;

        let mut outcomes = Writer::from_path(dir.join("outcome.csv"))?;
        outcomes.write_record(["separation", "steps", "collided", "collision_position"])?;

        Ok(Self {
            trajectory,
            outcomes,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.trajectory.write_record(&[
                row.step.to_string(),
                row.agent.to_string(),
                row.position.to_string(),
                row.home.to_string(),
                row.offset_from_home.to_string(),
                row.sweep_phase.to_string(),
                row.phase_number.to_string(),
                row.steps_in_phase.to_string(),
                (row.is_waiting as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_outcome(&mut self, row: &OutcomeRow) -> OutputResult<()> {
        self.outcomes.write_record(&[
            row.separation.to_string(),
            row.steps.to_string(),
            (row.collided() as u8).to_string(),
            row.collision_position.map(|p| p.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectory.flush()?;
        self.outcomes.flush()?;
        Ok(())
    }
}
