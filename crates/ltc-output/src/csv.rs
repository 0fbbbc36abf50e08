//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `truck_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, TruckSnapshotRow};

pub const SNAPSHOT_HEADER: [&str; 10] = [
    "run", "tick", "truck_id", "lat", "lon", "zone", "status", "redirect_to", "queue_position", "unload_timer",
];

pub const SUMMARY_HEADER: [&str; 7] = [
    "run", "tick", "elapsed_ms", "trucks_processed", "events", "departures", "docks_available",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("truck_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[TruckSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.run.to_string(),
                row.tick.to_string(),
                row.truck_id.to_string(),
                format!("{:.6}", row.lat),
                format!("{:.6}", row.lon),
                row.zone.to_owned(),
                row.status.to_owned(),
                row.redirect_to.to_owned(),
                row.queue_position.map(|p| p.to_string()).unwrap_or_default(),
                row.unload_timer.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.run.to_string(),
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            row.trucks_processed.to_string(),
            row.events.to_string(),
            row.departures.to_string(),
            row.docks_available.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
