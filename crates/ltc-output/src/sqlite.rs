//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `truck_snapshots` and `tick_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, TruckSnapshotRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS truck_snapshots (
                 run            INTEGER NOT NULL,
                 tick           INTEGER NOT NULL,
                 truck_id       INTEGER NOT NULL,
                 lat            REAL    NOT NULL,
                 lon            REAL    NOT NULL,
                 zone           TEXT    NOT NULL,
                 status         TEXT    NOT NULL,
                 redirect_to    TEXT    NOT NULL,
                 queue_position INTEGER,
                 unload_timer   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 run              INTEGER NOT NULL,
                 tick             INTEGER NOT NULL,
                 elapsed_ms       INTEGER NOT NULL,
                 trucks_processed INTEGER NOT NULL,
                 events           INTEGER NOT NULL,
                 departures       INTEGER NOT NULL,
                 docks_available  INTEGER NOT NULL,
                 PRIMARY KEY (run, tick)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[TruckSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO truck_snapshots \
                 (run, tick, truck_id, lat, lon, zone, status, redirect_to, queue_position, unload_timer) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.run,
                    row.tick,
                    row.truck_id,
                    row.lat,
                    row.lon,
                    row.zone,
                    row.status,
                    row.redirect_to,
                    row.queue_position,
                    row.unload_timer,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (run, tick, elapsed_ms, trucks_processed, events, departures, docks_available) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.run,
                row.tick,
                row.elapsed_ms,
                row.trucks_processed,
                row.events,
                row.departures,
                row.docks_available,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
