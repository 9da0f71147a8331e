//! Backend-agnostic sink for simulation output.

use crate::OutputResult;
use crate::row::{CellSnapshotRow, TickSummaryRow};

/// A sink that persists snapshot and summary rows.
///
/// Implementations buffer or write eagerly as they see fit, but must make
/// all rows durable by the time [`finish`](OutputWriter::finish) returns.
/// `finish` is idempotent; calling it twice is a no-op.
pub trait OutputWriter {
    /// Writes one snapshot's worth of occupied-cell rows.
    fn write_cells(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()>;

    /// Writes the aggregate row for one completed tick.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flushes buffered rows and releases the underlying resources.
    fn finish(&mut self) -> OutputResult<()>;
}
