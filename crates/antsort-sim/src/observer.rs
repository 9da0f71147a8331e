//! The hook trait through which runs report progress and expose state.

use antsort_agent::AgentTable;
use antsort_core::Tick;
use antsort_world::World;

// ── TickSummary ───────────────────────────────────────────────────────────────

/// Aggregate counts for one completed tick, handed to
/// [`SimObserver::on_tick_end`].
///
/// `in_grid[k] + carried[k]` stays constant over a run: objects are only
/// ever lifted out of cells and set back down, never created or destroyed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    /// The tick these counts were taken at.
    pub tick: Tick,

    /// Objects lying in grid cells, per kind in `ObjectKind::ALL` order.
    pub in_grid: [usize; 3],

    /// Objects in agents' hands, same indexing.
    pub carried: [usize; 3],

    /// Carrier/helper pairs currently bound.
    pub bonds: usize,

    /// Heavy carriers currently broadcasting for help.
    pub asking: usize,
}

impl TickSummary {
    /// Total objects accounted for, in cells and in hands.
    pub fn total_objects(&self) -> usize {
        self.in_grid.iter().sum::<usize>() + self.carried.iter().sum::<usize>()
    }
}

// ── SimObserver ───────────────────────────────────────────────────────────────

/// Hooks [`Sim::run`][crate::Sim::run] fires as the tick loop turns.
///
/// Every method defaults to a no-op, so an implementor overrides only the
/// hooks it cares about.
///
/// # Example — periodic console report
///
/// ```rust,ignore
/// struct Report { every: u64 }
///
/// impl SimObserver for Report {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.every == 0 {
///             println!("{tick}: {} objects loose, {} carried",
///                 summary.in_grid.iter().sum::<usize>(),
///                 summary.carried.iter().sum::<usize>());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before marker decay.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with that tick's aggregate counts.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks, tick 0 included).
    ///
    /// Provides read-only access to the full grid and agent state so that
    /// output writers can record a snapshot without the sim needing to know
    /// about any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _world: &World, _agents: &AgentTable) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns, after the
    /// final processed tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] with every hook left at its no-op default, for callers
/// of `run` that want no reporting at all.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
