//! Flat row types shared by every output backend.
//!
//! Rows are plain-value structs so each backend can serialize them without
//! touching the live [`World`](antsort_world::World). Column order in the
//! backends follows field order here.

/// One occupied cell at snapshot time.
///
/// Empty cells are never written; a cell qualifies when it holds an object,
/// an agent, or a positive help-marker intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSnapshotRow {
    pub tick: u64,
    pub x:    i32,
    pub z:    i32,
    /// Kind letter of the object resting here, empty when there is none.
    pub object: &'static str,
    /// Agent standing here; `u32::MAX` when the cell has no agent.
    pub agent_id: u32,
    /// Kind letter of that agent's load, empty when unloaded or no agent.
    pub carried: &'static str,
    /// Help-marker intensity, `0.0` when the cell is unmarked.
    pub marker: f32,
}

/// Per-tick aggregate counts, one row per simulated tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: f32,
    pub a_in_grid:    u64,
    pub b_in_grid:    u64,
    pub c_in_grid:    u64,
    pub a_carried:    u64,
    pub b_carried:    u64,
    pub c_carried:    u64,
    /// Helper/asker pairs currently bound.
    pub bonds:  u64,
    /// Agents with an active help marker underfoot.
    pub asking: u64,
}
