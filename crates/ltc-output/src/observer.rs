//! `SnapshotRecorder<W>` — bridges `SimObserver` to an `OutputWriter`.

use ltc_core::{SimConfig, Tick};
use ltc_sim::{SimObserver, Snapshot, TickReport};

use crate::row::{TickSummaryRow, TruckSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes truck snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  Check for them with [`take_error`][Self::take_error].
pub struct SnapshotRecorder<W: OutputWriter> {
    writer:           W,
    tick_interval_ms: u64,
    run:              u64,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> SnapshotRecorder<W> {
    /// Create a recorder backed by `writer`, using `config` for elapsed-time
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_interval_ms: config.tick_interval_ms,
            run:              0,
            last_error:       None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.  Only the first error is kept.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SnapshotRecorder<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        if report.paused {
            return;
        }
        // `report.tick` is the tick that was processed; count it as done.
        let done = report.tick.0 + 1;
        let row = TickSummaryRow {
            run:              self.run,
            tick:             done,
            elapsed_ms:       done * self.tick_interval_ms,
            trucks_processed: report.processed as u64,
            events:           report.events.len() as u64,
            departures:       report.departures() as u64,
            docks_available:  report.docks_available,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        let rows: Vec<TruckSnapshotRow> = snapshot
            .trucks
            .iter()
            .map(|t| TruckSnapshotRow {
                run:            self.run,
                tick:           snapshot.tick.0,
                truck_id:       t.id.0,
                lat:            t.coordinates.lat,
                lon:            t.coordinates.lon,
                zone:           t.zone.label(),
                status:         t.status.label(),
                redirect_to:    t.redirect_to.label(),
                queue_position: t.queue_position.map(|p| p as u32),
                unload_timer:   t.unload_timer,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_reset(&mut self, resets: u64) {
        self.run = resets;
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
