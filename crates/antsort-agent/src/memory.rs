//! Fixed-capacity perception memory.
//!
//! Each agent remembers the last `capacity` perceptions as
//! `Option<ObjectKind>` slots — `None` for "saw an empty cell".  The
//! frequency estimate divides by *capacity*, not by how much has been seen
//! so far, so a fresh agent reports frequency 0 for every kind and its
//! first pick-up is guaranteed.

use std::collections::VecDeque;

use antsort_core::ObjectKind;

/// Ring buffer of recent perceptions, newest first.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Memory {
    slots: VecDeque<Option<ObjectKind>>,
}

impl Memory {
    /// A blank memory of `capacity` slots, all `None`.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat(None).take(capacity).collect(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Push the newest perception, evicting the oldest.
    pub fn record(&mut self, seen: Option<ObjectKind>) {
        self.slots.push_front(seen);
        self.slots.pop_back();
    }

    /// Fraction of slots holding `kind`, in `[0, 1]`.
    pub fn frequency(&self, kind: ObjectKind) -> f32 {
        let hits = self.slots.iter().filter(|s| **s == Some(kind)).count();
        hits as f32 / self.slots.len() as f32
    }

    /// Newest-first iteration over the raw slots.
    pub fn iter(&self) -> impl Iterator<Item = Option<ObjectKind>> + '_ {
        self.slots.iter().copied()
    }
}
