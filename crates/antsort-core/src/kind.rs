//! Object kind enum shared across the world, agent, and output crates.
//!
//! The three kinds are behaviorally identical for pick-up/put-down scoring;
//! only `C` differs, being too heavy for a single agent to carry without a
//! recruited helper.

use crate::AgentRng;

/// The kind of a sortable object.  Declaration order is stable and public:
/// output columns and tie-breaks rely on it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectKind {
    A,
    B,
    C,
}

impl ObjectKind {
    /// All kinds in declaration order.
    pub const ALL: [ObjectKind; 3] = [ObjectKind::A, ObjectKind::B, ObjectKind::C];

    /// `true` for the heavy kind that requires a second carrier.
    #[inline]
    pub fn is_heavy(self) -> bool {
        matches!(self, ObjectKind::C)
    }

    /// Position of this kind in [`ObjectKind::ALL`], for kind-indexed arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// A uniformly random kind *different* from `self` — the sensor-noise
    /// model: a misread is never the true kind.
    pub fn misperceive(self, rng: &mut AgentRng) -> ObjectKind {
        let others: [ObjectKind; 2] = match self {
            ObjectKind::A => [ObjectKind::B, ObjectKind::C],
            ObjectKind::B => [ObjectKind::A, ObjectKind::C],
            ObjectKind::C => [ObjectKind::A, ObjectKind::B],
        };
        others[rng.gen_range(0..2usize)]
    }

    /// Human-readable label, useful for CSV/SQLite column values.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::A => "A",
            ObjectKind::B => "B",
            ObjectKind::C => "C",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
