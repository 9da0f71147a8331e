//! `antsort-core` — foundational types for the `antsort` sorting simulation.
//!
//! This crate is a dependency of every other `antsort-*` crate.  It
//! intentionally has no `antsort-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `CellId`                                    |
//! | [`kind`]      | `ObjectKind` enum (A/B/C)                              |
//! | [`direction`] | `Direction` enum, displacement/inverse lookup          |
//! | [`time`]      | `Tick`, `SimClock`                                     |
//! | [`config`]    | `SimConfig` + validation                               |
//! | [`rng`]       | `AgentRng` (per-agent), `SimRng` (global)              |
//! | [`error`]     | `ConfigError`, `ConfigResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public data types.   |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use direction::Direction;
pub use error::{ConfigError, ConfigResult};
pub use ids::{AgentId, CellId};
pub use kind::ObjectKind;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
