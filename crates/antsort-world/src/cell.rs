//! A single grid cell.
//!
//! Cells are created once at world construction and never move; their
//! coordinates are identity.  All mutation goes through [`World`] methods —
//! the occupancy fields are crate-private so external code (renderers,
//! output writers) can only observe.
//!
//! [`World`]: crate::World

use antsort_core::{AgentId, ObjectKind};

/// One cell of the grid: at most one object, at most one agent, and a
/// marker intensity in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct Cell {
    x: i32,
    z: i32,
    pub(crate) object: Option<ObjectKind>,
    pub(crate) agent:  Option<AgentId>,
    pub(crate) marker: f32,
}

impl Cell {
    pub(crate) fn new(x: i32, z: i32) -> Self {
        Self { x, z, object: None, agent: None, marker: 0.0 }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn z(&self) -> i32 {
        self.z
    }

    /// The object resting here, if any.  A carried object is in no cell.
    #[inline]
    pub fn object(&self) -> Option<ObjectKind> {
        self.object
    }

    /// The agent standing here, if any.
    #[inline]
    pub fn agent(&self) -> Option<AgentId> {
        self.agent
    }

    /// Current help-marker intensity.
    #[inline]
    pub fn marker(&self) -> f32 {
        self.marker
    }

    #[inline]
    pub fn has_object(&self) -> bool {
        self.object.is_some()
    }

    #[inline]
    pub fn has_agent(&self) -> bool {
        self.agent.is_some()
    }
}
