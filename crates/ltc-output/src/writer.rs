//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, TickSummaryRow, TruckSnapshotRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors never reach the engine; [`SnapshotRecorder`][crate::SnapshotRecorder]
/// stores them for [`take_error`][crate::SnapshotRecorder::take_error].
pub trait OutputWriter {
    /// Write a batch of truck snapshots.
    fn write_snapshots(&mut self, rows: &[TruckSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
