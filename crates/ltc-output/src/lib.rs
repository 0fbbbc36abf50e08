//! `ltc-output` — recording simulation runs to disk.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                   |
//! |-----------|---------|-------------------------------------------------|
//! | *(none)*  | CSV     | `truck_snapshots.csv`, `tick_summaries.csv`     |
//! | `sqlite`  | SQLite  | `output.db`                                     |
//!
//! Both implement [`OutputWriter`] and are driven by [`SnapshotRecorder`],
//! which implements `ltc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ltc_output::{CsvWriter, SnapshotRecorder};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut recorder = SnapshotRecorder::new(writer, &config);
//! engine.run_until_idle(10_000, &mut recorder);
//! if let Some(e) = recorder.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SnapshotRecorder;
pub use row::{TickSummaryRow, TruckSnapshotRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
