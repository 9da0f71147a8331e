//! CSV backend: two plain-text files in one output directory.

use std::fs::File;
use std::path::Path;

use crate::OutputResult;
use crate::row::{CellSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes `cell_snapshots.csv` and `tick_summaries.csv` under one directory.
///
/// Header rows are written up front so the files are self-describing even
/// when a run produces no rows.
pub struct CsvWriter {
    cells:     csv::Writer<File>,
    summaries: csv::Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Creates both files under `dir`, truncating any previous run's output.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut cells = csv::Writer::from_path(dir.join("cell_snapshots.csv"))?;
        cells.write_record(["tick", "x", "z", "object", "agent_id", "carried", "marker"])?;

        let mut summaries = csv::Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "elapsed_secs",
            "a_in_grid",
            "b_in_grid",
            "c_in_grid",
            "a_carried",
            "b_carried",
            "c_carried",
            "bonds",
            "asking",
        ])?;

        Ok(Self { cells, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_cells(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.cells.write_record([
                row.tick.to_string(),
                row.x.to_string(),
                row.z.to_string(),
                row.object.to_string(),
                row.agent_id.to_string(),
                row.carried.to_string(),
                row.marker.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record([
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.a_in_grid.to_string(),
            row.b_in_grid.to_string(),
            row.c_in_grid.to_string(),
            row.a_carried.to_string(),
            row.b_carried.to_string(),
            row.c_carried.to_string(),
            row.bonds.to_string(),
            row.asking.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.cells.flush()?;
        self.summaries.flush()?;
        self.finished = true;
        Ok(())
    }
}
