//! The 8-connected movement vocabulary plus a rest sentinel.
//!
//! Declaration order is part of the public contract: the marker-gradient
//! query breaks equal-intensity ties by this order, which keeps gradient
//! walks reproducible across runs.

use crate::AgentRng;

/// A movement direction on the grid.  `None` is a legal draw meaning "stay
/// put this step".
///
/// The grid is right-handed: `x` grows east, `z` grows north.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    #[default]
    None,
}

impl Direction {
    /// All nine values in declaration order.
    pub const ALL: [Direction; 9] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::None,
    ];

    /// The eight actual movement directions, in declaration order.  This is
    /// the iteration order of the marker-gradient query.
    pub const MOVES: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Unit displacement `(dx, dz)`.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North     => (0, 1),
            Direction::South     => (0, -1),
            Direction::East      => (1, 0),
            Direction::West      => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
            Direction::None      => (0, 0),
        }
    }

    /// Displacement after `distance` steps in this direction.
    #[inline]
    pub fn displacement(self, distance: i32) -> (i32, i32) {
        let (dx, dz) = self.delta();
        (dx * distance, dz * distance)
    }

    /// Inverse lookup from an arbitrary displacement: only the signs matter,
    /// so `(3, -7)` maps to `SouthEast`.  `(0, 0)` maps to `None`.
    pub fn from_delta(dx: i32, dz: i32) -> Direction {
        match (dx.signum(), dz.signum()) {
            (0, 1)   => Direction::North,
            (0, -1)  => Direction::South,
            (1, 0)   => Direction::East,
            (-1, 0)  => Direction::West,
            (1, 1)   => Direction::NorthEast,
            (-1, 1)  => Direction::NorthWest,
            (1, -1)  => Direction::SouthEast,
            (-1, -1) => Direction::SouthWest,
            _        => Direction::None,
        }
    }

    /// Uniform draw over the movement vocabulary.  With `allow_rest` the
    /// draw covers all nine values, so an agent can burn a step standing
    /// still; without it only the eight real moves are candidates.
    pub fn random(rng: &mut AgentRng, allow_rest: bool) -> Direction {
        let table: &[Direction] = if allow_rest { &Self::ALL } else { &Self::MOVES };
        *rng.choose(table).unwrap_or(&Direction::None)
    }

    /// Lowercase label used by `Display`.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North     => "north",
            Direction::South     => "south",
            Direction::East      => "east",
            Direction::West      => "west",
            Direction::NorthEast => "northeast",
            Direction::NorthWest => "northwest",
            Direction::SouthEast => "southeast",
            Direction::SouthWest => "southwest",
            Direction::None      => "none",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
