//! SQLite backend: one database file holding both tables.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::OutputResult;
use crate::row::{CellSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes `cell_snapshots` and `tick_summaries` tables into one database.
///
/// The connection runs in WAL mode with `synchronous = NORMAL`; snapshot
/// batches are inserted inside a single transaction per call.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Opens (or creates) the database at `path` and ensures both tables exist.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             CREATE TABLE IF NOT EXISTS cell_snapshots (
                 tick     INTEGER NOT NULL,
                 x        INTEGER NOT NULL,
                 z        INTEGER NOT NULL,
                 object   TEXT    NOT NULL,
                 agent_id INTEGER NOT NULL,
                 carried  TEXT    NOT NULL,
                 marker   REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick         INTEGER PRIMARY KEY,
                 elapsed_secs REAL    NOT NULL,
                 a_in_grid    INTEGER NOT NULL,
                 b_in_grid    INTEGER NOT NULL,
                 c_in_grid    INTEGER NOT NULL,
                 a_carried    INTEGER NOT NULL,
                 b_carried    INTEGER NOT NULL,
                 c_carried    INTEGER NOT NULL,
                 bonds        INTEGER NOT NULL,
                 asking       INTEGER NOT NULL
             );",
        )?;
        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_cells(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO cell_snapshots (tick, x, z, object, agent_id, carried, marker)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.tick,
                    row.x,
                    row.z,
                    row.object,
                    row.agent_id,
                    row.carried,
                    row.marker,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries
                 (tick, elapsed_secs, a_in_grid, b_in_grid, c_in_grid,
                  a_carried, b_carried, c_carried, bonds, asking)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                row.tick,
                row.elapsed_secs,
                row.a_in_grid,
                row.b_in_grid,
                row.c_in_grid,
                row.a_carried,
                row.b_carried,
                row.c_carried,
                row.bonds,
                row.asking,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        self.finished = true;
        Ok(())
    }
}
