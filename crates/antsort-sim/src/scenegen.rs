//! Random scene generation: scatter agents and objects across the grid.
//!
//! Placement draws uniform cells and retries on collision, giving up on an
//! entity after [`PLACEMENT_ATTEMPTS`] occupied draws.  A crowded grid
//! therefore yields *fewer* entities than requested rather than looping
//! forever; the shortfall is recorded in [`PlacementReport`].
//!
//! Agents and objects occupy independent layers: an agent may spawn on a
//! cell holding an object, but two agents (or two objects) never share one.
//! Generation order is agents first, then kind A, B, C objects, all drawn
//! from a single seeded [`SimRng`] stream.

use std::collections::HashSet;

use antsort_core::{ObjectKind, SimConfig, SimRng};

/// Uniform draws per entity before scene generation gives up on it.
pub const PLACEMENT_ATTEMPTS: usize = 10;

// ── Plan types ────────────────────────────────────────────────────────────────

/// What scene generation decided: a concrete spawn cell for every placed
/// entity, plus the tally of what fit.
#[derive(Clone, Debug)]
pub struct ScenePlan {
    /// Spawn cell per agent; list index becomes the `AgentId`.
    pub agents: Vec<(i32, i32)>,

    /// Kind and spawn cell per object.
    pub objects: Vec<(ObjectKind, i32, i32)>,

    /// Requested-versus-placed tallies.
    pub report: PlacementReport,
}

/// Requested and actually-placed entity counts for one generated scene.
///
/// On a grid with room to spare the two sides match; the placed side falls
/// short when retries keep hitting occupied cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementReport {
    pub agents_requested: usize,
    pub agents_placed:    usize,

    /// Per kind, in `ObjectKind::ALL` order.
    pub objects_requested: [usize; 3],
    pub objects_placed:    [usize; 3],
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Generate a scene for `config`, drawing every cell from `rng`.
pub fn generate(config: &SimConfig, rng: &mut SimRng) -> ScenePlan {
    let size = config.world_size as i32;

    // Agents block agents.
    let mut agent_cells: HashSet<(i32, i32)> = HashSet::new();
    let mut agents = Vec::with_capacity(config.agent_count);
    for _ in 0..config.agent_count {
        if let Some(cell) = draw_free(size, &agent_cells, rng) {
            agent_cells.insert(cell);
            agents.push(cell);
        }
    }

    // Objects block objects, across all kinds.
    let requested = [
        (ObjectKind::A, config.a_count),
        (ObjectKind::B, config.b_count),
        (ObjectKind::C, config.c_count),
    ];
    let mut object_cells: HashSet<(i32, i32)> = HashSet::new();
    let mut objects = Vec::new();
    let mut objects_placed = [0usize; 3];
    for (kind, count) in requested {
        for _ in 0..count {
            if let Some(cell) = draw_free(size, &object_cells, rng) {
                object_cells.insert(cell);
                objects.push((kind, cell.0, cell.1));
                objects_placed[kind.index()] += 1;
            }
        }
    }

    let report = PlacementReport {
        agents_requested:  config.agent_count,
        agents_placed:     agents.len(),
        objects_requested: [config.a_count, config.b_count, config.c_count],
        objects_placed,
    };

    ScenePlan { agents, objects, report }
}

/// Draw an unoccupied cell, or `None` after too many collisions.
fn draw_free(size: i32, taken: &HashSet<(i32, i32)>, rng: &mut SimRng) -> Option<(i32, i32)> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let cell = (rng.gen_range(0..size), rng.gen_range(0..size));
        if !taken.contains(&cell) {
            return Some(cell);
        }
    }
    None
}
