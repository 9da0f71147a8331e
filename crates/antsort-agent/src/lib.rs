//! `antsort-agent` — agent state and decision logic for the `antsort` framework.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`memory`]   | `Memory` (fixed-capacity perception ring buffer)            |
//! | [`table`]    | `AgentTable` (SoA arrays), `AgentRngs` (per-agent RNG)      |
//! | [`behavior`] | `update_agent` (per-tick decision loop), probability rules  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                          |
//! |---------|-----------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the state-carrying types.  |
//!
//! Off by default; enable only what your application uses.

pub mod behavior;
pub mod memory;
pub mod table;

#[cfg(test)]
mod tests;

pub use behavior::{pick_up_probability, put_down_probability, update_agent};
pub use memory::Memory;
pub use table::{AgentRngs, AgentTable};
