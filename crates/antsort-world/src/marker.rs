//! The help-marker field: broadcast, removal, decay, and the gradient query.
//!
//! A broadcast writes `1 / (euclidean_distance + 1)` into every in-bounds
//! cell of the Chebyshev box around the source — a direct OVERWRITE.  It is
//! not additive and takes no maximum with the existing value, so a later
//! broadcast from a farther source can lower a cell.  That asymmetry is
//! load-bearing for reproducing the model and is pinned by a test; see
//! DESIGN.md before changing it.

use antsort_core::{AgentId, Direction};

use crate::grid::World;

/// Decayed markers below this intensity snap to exactly 0, keeping the
/// field free of floating-point tails.
pub const MARKER_EPSILON: f32 = 0.05;

impl World {
    /// Broadcast a help marker around the agent's cell: every in-bounds
    /// cell within Chebyshev radius `radius` gets
    /// `marker = 1 / (euclidean_distance + 1)`.  The source cell itself
    /// gets exactly 1.0.  No-op for unplaced agents.
    pub fn put_marker(&mut self, agent: AgentId, radius: u32) {
        let Some((cx, cz)) = self.position_of(agent) else {
            return;
        };
        let r = radius as i32;
        for dz in -r..=r {
            for dx in -r..=r {
                let Some(id) = self.cell_id(cx + dx, cz + dz) else {
                    continue;
                };
                let dist = ((dx * dx + dz * dz) as f32).sqrt();
                self.cells[id.index()].marker = 1.0 / (dist + 1.0);
            }
        }
    }

    /// Zero the marker over the same box a broadcast would cover — used
    /// when a carrier's call for help is answered or abandoned.
    pub fn remove_marker(&mut self, agent: AgentId, radius: u32) {
        let Some((cx, cz)) = self.position_of(agent) else {
            return;
        };
        let r = radius as i32;
        for dz in -r..=r {
            for dx in -r..=r {
                if let Some(id) = self.cell_id(cx + dx, cz + dz) {
                    self.cells[id.index()].marker = 0.0;
                }
            }
        }
    }

    /// Multiply every cell's marker by `attenuation`, snapping to 0 below
    /// [`MARKER_EPSILON`].  Called exactly once per tick, before any agent
    /// acts.
    pub fn decay_markers(&mut self, attenuation: f32) {
        for cell in &mut self.cells {
            cell.marker *= attenuation;
            if cell.marker < MARKER_EPSILON {
                cell.marker = 0.0;
            }
        }
    }

    /// Marker intensity at `(x, z)`; 0 out of bounds.
    pub fn marker_at(&self, x: i32, z: i32) -> f32 {
        self.cell_at(x, z).map_or(0.0, |c| c.marker)
    }

    /// Adjacent marker intensities for the 8 movement directions, sorted
    /// descending.  Ties keep `Direction` declaration order (the sort is
    /// stable over the `MOVES` table).  Out-of-bounds neighbors are
    /// omitted — there is nothing to walk toward there.
    pub fn marker_gradient(&self, agent: AgentId) -> Vec<(f32, Direction)> {
        let Some((x, z)) = self.position_of(agent) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(8);
        for dir in Direction::MOVES {
            let (dx, dz) = dir.delta();
            if let Some(id) = self.cell_id(x + dx, z + dz) {
                out.push((self.cells[id.index()].marker, dir));
            }
        }
        out.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        out
    }
}
