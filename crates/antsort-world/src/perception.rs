//! The per-tick sensory snapshot handed to an agent.

use antsort_core::ObjectKind;

/// What an agent senses at its own cell: the object underfoot (if any) and
/// the local help-marker intensity.  Plain value, one per agent per tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Perception {
    pub object: Option<ObjectKind>,
    pub marker: f32,
}

impl Perception {
    /// What an unplaced agent senses: nothing.
    pub const EMPTY: Perception = Perception { object: None, marker: 0.0 };
}
