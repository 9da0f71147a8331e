//! `antsort-output` — persistence backends for simulation output.
//!
//! Two streams leave a run: a [`TickSummaryRow`] per tick (aggregate object
//! and cooperation counts) and a batch of [`CellSnapshotRow`]s per snapshot
//! interval (every occupied cell, enough to replay cluster formation).
//! [`SimOutputObserver`] adapts the simulation's observer hooks to any
//! [`OutputWriter`] backend:
//!
//! | Backend        | Feature  | Output                                      |
//! |----------------|----------|---------------------------------------------|
//! | [`CsvWriter`]  | built-in | `cell_snapshots.csv`, `tick_summaries.csv`  |
//! | `SqliteWriter` | `sqlite` | one database, same two tables               |
//!
//! # Example
//!
//! ```no_run
//! use antsort_output::{CsvWriter, SimOutputObserver};
//! use antsort_sim::SimBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = antsort_core::SimConfig::default();
//! let writer = CsvWriter::new(std::path::Path::new("out"))?;
//! let mut observer = SimOutputObserver::new(writer, &config);
//!
//! let mut sim = SimBuilder::new(config).build()?;
//! sim.run(&mut observer);
//!
//! if let Some(err) = observer.take_error() {
//!     return Err(err.into());
//! }
//! # Ok(())
//! # }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CellSnapshotRow, TickSummaryRow};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
pub use writer::OutputWriter;
