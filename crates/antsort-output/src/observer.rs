//! Bridge from the simulation's observer hooks to an [`OutputWriter`].

use antsort_agent::AgentTable;
use antsort_core::{AgentId, ObjectKind, SimConfig, Tick};
use antsort_sim::{SimObserver, TickSummary};
use antsort_world::World;

use crate::error::{OutputError, OutputResult};
use crate::row::{CellSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// Streams summaries and snapshots into a writer as the simulation runs.
///
/// Observer hooks cannot return errors, so the first write failure is kept
/// and every later hook becomes a no-op.  Drivers check
/// [`take_error`](SimOutputObserver::take_error) after the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    tick_dt_secs: f32,
    show_markers: bool,
    error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_dt_secs: config.tick_dt_secs,
            show_markers: config.show_markers,
            error: None,
        }
    }

    /// Takes the first error a hook produced, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.error.take()
    }

    /// Consumes the observer and hands back the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(err) = result {
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        if self.error.is_some() {
            return;
        }
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: tick.0 as f32 * self.tick_dt_secs,
            a_in_grid:    summary.in_grid[0] as u64,
            b_in_grid:    summary.in_grid[1] as u64,
            c_in_grid:    summary.in_grid[2] as u64,
            a_carried:    summary.carried[0] as u64,
            b_carried:    summary.carried[1] as u64,
            c_carried:    summary.carried[2] as u64,
            bonds:        summary.bonds as u64,
            asking:       summary.asking as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World, agents: &AgentTable) {
        if self.error.is_some() {
            return;
        }
        let mut rows = Vec::new();
        for cell in world.cells() {
            let marker = if self.show_markers { cell.marker() } else { 0.0 };
            if !cell.has_object() && !cell.has_agent() && marker <= 0.0 {
                continue;
            }
            let (agent_id, carried) = match cell.agent() {
                Some(agent) => (
                    agent.0,
                    agents.carried[agent.index()].map_or("", ObjectKind::as_str),
                ),
                None => (AgentId::INVALID.0, ""),
            };
            rows.push(CellSnapshotRow {
                tick: tick.0,
                x: cell.x(),
                z: cell.z(),
                object: cell.object().map_or("", ObjectKind::as_str),
                agent_id,
                carried,
                marker,
            });
        }
        let result = self.writer.write_cells(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
