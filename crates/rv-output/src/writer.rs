//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutcomeRow, OutputResult, TrajectoryRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`TrajectoryObserver::take_error`][crate::TrajectoryObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of per-train rows.
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Write one run outcome row.
    fn write_outcome(&mut self, row: &OutcomeRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
