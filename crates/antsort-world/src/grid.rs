//! The grid world: sole authority over spatial state.
//!
//! # Data layout
//!
//! Cells live in one dense row-major `Vec` (`CellId = z * size_x + x`), so
//! every coordinate lookup is two integer ops — the grid is its own spatial
//! index.  Agent positions are a dense `Vec<CellId>` indexed by `AgentId`
//! (`CellId::INVALID` = not yet placed), giving O(1) "where am I" in both
//! directions: cells back-reference their occupant and the position index
//! back-references the cell.
//!
//! # Mutation discipline
//!
//! Agents never touch cells directly; they issue requests
//! (`move_agent`, `pick_up`, `put_down`, `put_marker`) and the world either
//! applies them atomically or rejects them with `false`/`None`.  Nothing
//! here panics on a blocked request — a refused move is an ordinary outcome
//! of the stochastic decision loop, not an error.

use antsort_core::{AgentId, CellId, Direction, ObjectKind};

use crate::cell::Cell;
use crate::perception::Perception;

/// A `size_x × size_z` grid of cells plus the agent position index and the
/// per-agent movement history consumed by external animation layers.
pub struct World {
    pub(crate) size_x: i32,
    pub(crate) size_z: i32,
    pub(crate) cells:  Vec<Cell>,

    /// `AgentId → CellId`; `INVALID` until the agent is placed.
    pub(crate) positions: Vec<CellId>,

    // ── Movement history (read-only to callers) ───────────────────────────
    pub(crate) last_positions: Vec<CellId>,
    pub(crate) facings:        Vec<Direction>,
    pub(crate) last_facings:   Vec<Direction>,
}

impl World {
    /// Construct an empty world.  `agent_count` fixes the size of the
    /// position index; callers place agents afterwards with
    /// [`place_agent`](Self::place_agent).
    ///
    /// Dimensions are taken as already validated (`SimConfig::validate`
    /// runs before any world is built).
    pub fn new(size_x: usize, size_z: usize, agent_count: usize) -> Self {
        let mut cells = Vec::with_capacity(size_x * size_z);
        for z in 0..size_z as i32 {
            for x in 0..size_x as i32 {
                cells.push(Cell::new(x, z));
            }
        }
        Self {
            size_x: size_x as i32,
            size_z: size_z as i32,
            cells,
            positions:      vec![CellId::INVALID; agent_count],
            last_positions: vec![CellId::INVALID; agent_count],
            facings:        vec![Direction::None; agent_count],
            last_facings:   vec![Direction::None; agent_count],
        }
    }

    // ── Dimensions & lookup ───────────────────────────────────────────────

    #[inline]
    pub fn size_x(&self) -> i32 {
        self.size_x
    }

    #[inline]
    pub fn size_z(&self) -> i32 {
        self.size_z
    }

    /// Number of agent slots in the position index.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn contains(&self, x: i32, z: i32) -> bool {
        x >= 0 && x < self.size_x && z >= 0 && z < self.size_z
    }

    /// Row-major cell id for in-bounds coordinates.
    #[inline]
    pub(crate) fn cell_id(&self, x: i32, z: i32) -> Option<CellId> {
        self.contains(x, z)
            .then(|| CellId((z * self.size_x + x) as u32))
    }

    /// Read-only view of a cell.
    pub fn cell_at(&self, x: i32, z: i32) -> Option<&Cell> {
        self.cell_id(x, z).map(|id| &self.cells[id.index()])
    }

    /// Read-only iteration over all cells in row-major order — the
    /// renderer/output surface.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The agent standing at `(x, z)`, if any.
    pub fn agent_at(&self, x: i32, z: i32) -> Option<AgentId> {
        self.cell_at(x, z).and_then(Cell::agent)
    }

    /// The object resting at `(x, z)`, if any.
    pub fn object_at(&self, x: i32, z: i32) -> Option<ObjectKind> {
        self.cell_at(x, z).and_then(Cell::object)
    }

    /// In-grid object tally per kind, in `ObjectKind::ALL` order.  Carried
    /// objects are not counted — they are in no cell.
    pub fn object_counts(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for cell in &self.cells {
            if let Some(kind) = cell.object {
                counts[kind.index()] += 1;
            }
        }
        counts
    }

    // ── Agent position & history accessors ────────────────────────────────

    /// Current coordinates of `agent`, or `None` if it was never placed.
    pub fn position_of(&self, agent: AgentId) -> Option<(i32, i32)> {
        let id = *self.positions.get(agent.index())?;
        (id != CellId::INVALID).then(|| self.coords_of(id))
    }

    /// Coordinates before the agent's most recent successful move.
    pub fn last_position_of(&self, agent: AgentId) -> Option<(i32, i32)> {
        let id = *self.last_positions.get(agent.index())?;
        (id != CellId::INVALID).then(|| self.coords_of(id))
    }

    /// Facing after the most recent displacing move (`None` until the agent
    /// first moves to a different cell).
    pub fn facing_of(&self, agent: AgentId) -> Direction {
        self.facings.get(agent.index()).copied().unwrap_or(Direction::None)
    }

    /// Facing before the most recent successful move.
    pub fn last_facing_of(&self, agent: AgentId) -> Direction {
        self.last_facings.get(agent.index()).copied().unwrap_or(Direction::None)
    }

    #[inline]
    fn coords_of(&self, id: CellId) -> (i32, i32) {
        let i = id.0 as i32;
        (i % self.size_x, i / self.size_x)
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// `true` iff `(x, z)` is in-bounds and free of *other* agents.  An
    /// agent may always "move" onto its own cell — a legal rest step.
    pub fn can_move_to(&self, agent: AgentId, x: i32, z: i32) -> bool {
        match self.cell_at(x, z) {
            Some(cell) => cell.agent.is_none() || cell.agent == Some(agent),
            None => false,
        }
    }

    /// Like [`can_move_to`](Self::can_move_to), with the target computed as
    /// `direction × distance` from the agent's current cell.  `false` for
    /// unplaced agents.
    pub fn can_move(&self, agent: AgentId, direction: Direction, distance: u32) -> bool {
        let Some((x, z)) = self.position_of(agent) else {
            return false;
        };
        let (dx, dz) = direction.displacement(distance as i32);
        self.can_move_to(agent, x + dx, z + dz)
    }

    /// Apply a move if it is legal.  On success the position index, the old
    /// and new cells, and the movement history are all updated together;
    /// on failure nothing changes.
    pub fn move_agent(&mut self, agent: AgentId, direction: Direction, distance: u32) -> bool {
        let Some((x, z)) = self.position_of(agent) else {
            return false;
        };
        let (dx, dz) = direction.displacement(distance as i32);
        let (nx, nz) = (x + dx, z + dz);
        if !self.can_move_to(agent, nx, nz) {
            return false;
        }

        let from = self.positions[agent.index()];
        // can_move_to guaranteed the target is in-bounds.
        let Some(to) = self.cell_id(nx, nz) else {
            return false;
        };

        self.last_positions[agent.index()] = from;
        self.last_facings[agent.index()]   = self.facings[agent.index()];

        if to != from {
            self.cells[from.index()].agent = None;
            self.cells[to.index()].agent   = Some(agent);
            self.positions[agent.index()]  = to;
            self.facings[agent.index()]    = Direction::from_delta(dx, dz);
        }
        true
    }

    /// Initial placement (scene generation, explicit test setups).  Subject
    /// to the same occupancy rule as movement; history starts at the placed
    /// cell so renderers never see an `INVALID` previous position.
    pub fn place_agent(&mut self, agent: AgentId, x: i32, z: i32) -> bool {
        if agent.index() >= self.positions.len() || !self.can_move_to(agent, x, z) {
            return false;
        }
        let Some(to) = self.cell_id(x, z) else {
            return false;
        };

        let from = self.positions[agent.index()];
        if from != CellId::INVALID {
            self.cells[from.index()].agent = None;
        }
        self.cells[to.index()].agent       = Some(agent);
        self.positions[agent.index()]      = to;
        self.last_positions[agent.index()] = to;
        true
    }

    // ── Objects ───────────────────────────────────────────────────────────

    /// Place an object if the cell is in-bounds and has no object.  The
    /// cell's agent occupancy is irrelevant — an agent can stand on an
    /// object.
    pub fn put_object(&mut self, kind: ObjectKind, x: i32, z: i32) -> bool {
        let Some(id) = self.cell_id(x, z) else {
            return false;
        };
        let cell = &mut self.cells[id.index()];
        if cell.object.is_some() {
            return false;
        }
        cell.object = Some(kind);
        true
    }

    /// Atomically remove and return the object at the agent's cell.
    pub fn pick_up(&mut self, agent: AgentId) -> Option<ObjectKind> {
        let id = *self.positions.get(agent.index())?;
        if id == CellId::INVALID {
            return None;
        }
        self.cells[id.index()].object.take()
    }

    /// Drop `kind` at the agent's cell; fails if an object already rests
    /// there (the carried object stays with the agent on failure).
    pub fn put_down(&mut self, agent: AgentId, kind: ObjectKind) -> bool {
        match self.position_of(agent) {
            Some((x, z)) => self.put_object(kind, x, z),
            None => false,
        }
    }

    // ── Perception & neighbor scan ────────────────────────────────────────

    /// What the agent senses at its own cell.
    pub fn perceive(&self, agent: AgentId) -> Perception {
        match self.position_of(agent) {
            Some((x, z)) => match self.cell_at(x, z) {
                Some(cell) => Perception { object: cell.object, marker: cell.marker },
                None => Perception::EMPTY,
            },
            None => Perception::EMPTY,
        }
    }

    /// Scan the 3×3 neighborhood in row-major order (south row first, west
    /// to east) for the first agent, other than `agent` itself, for which
    /// `is_asking` holds.  With several candidates the scan order decides
    /// the winner, so the result is reproducible.
    pub fn neighbor_in_need(
        &self,
        agent:     AgentId,
        mut is_asking: impl FnMut(AgentId) -> bool,
    ) -> Option<AgentId> {
        let (x, z) = self.position_of(agent)?;
        for dz in -1..=1 {
            for dx in -1..=1 {
                let Some(found) = self.agent_at(x + dx, z + dz) else {
                    continue;
                };
                if found != agent && is_asking(found) {
                    return Some(found);
                }
            }
        }
        None
    }
}
