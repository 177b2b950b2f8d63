//! `TrajectoryObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use rv_core::{RunConfig, Step};
use rv_sim::{SimObserver, WorldState};

use crate::row::{OutcomeRow, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes both trains' rows at every snapshot and the
/// run outcome at the end to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TrajectoryObserver<W: OutputWriter> {
    writer:     W,
    separation: i64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryObserver<W> {
    /// Create an observer backed by `writer` for the run described by
    /// `config`.
    pub fn new(writer: W, config: &RunConfig) -> Self {
        Self {
            writer,
            separation: config.separation,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TrajectoryObserver<W> {
    fn on_snapshot(&mut self, _step: Step, world: &WorldState) {
        let rows = TrajectoryRow::pair(world);
        let result = self.writer.write_trajectory(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, world: &WorldState) {
        let row = OutcomeRow::from_world(self.separation, world);
        let result = self.writer.write_outcome(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
