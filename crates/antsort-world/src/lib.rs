//! `antsort-world` — the grid world and help-marker field.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`grid`]       | `World`: cells, position index, movement, perception   |
//! | [`marker`]     | marker broadcast/removal/decay, gradient query         |
//! | [`cell`]       | `Cell` (read-only outside the crate)                   |
//! | [`perception`] | `Perception` value type                                |
//!
//! The world is the *sole* mutator of spatial state: agents issue requests
//! and get `bool`/`Option` answers, never errors.  Precondition failures
//! (occupied cell, out of bounds) are ordinary outcomes here.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Propagates serde derives to `antsort-core` types.            |

pub mod cell;
pub mod grid;
pub mod marker;
pub mod perception;


pub use cell::Cell;
pub use grid::World;
pub use marker::MARKER_EPSILON;
pub use perception::Perception;
