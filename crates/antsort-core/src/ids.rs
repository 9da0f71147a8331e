//! Typed indices for the simulation's dense arrays.
//!
//! `AgentId` doubles as the subscript into every SoA column of the agent
//! table; `CellId` subscripts the world's cell arena.  Both are plain `u32`
//! newtypes whose inner value is `pub`, so hot loops can index without an
//! accessor, with an all-ones `INVALID` sentinel where "no ID" must fit in
//! the same column width.

use std::fmt;

/// Declare a `u32`-backed index newtype with the shared ID surface.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel for "no ID": the all-ones bit pattern.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// This ID as a `usize` subscript.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// An agent's stable identity and its row in the agent table.
    ///
    /// The per-tick sweep visits agents in ascending `AgentId` order, so the
    /// ordering is part of the determinism contract.
    pub struct AgentId(u32);
}

typed_id! {
    /// A cell's row in the world's row-major arena (`z * size_x + x`).
    /// Only the world converts between `CellId` and coordinates.
    pub struct CellId(u32);
}
