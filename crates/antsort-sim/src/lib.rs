//! `antsort-sim` — tick loop orchestrator for the antsort framework.
//!
//! # Tick loop
//!
//! ```text
//! each tick t in 0..config.total_ticks:
//!   ① Decay  — attenuate the help-marker field once; values under the
//!              floor snap to zero.
//!   ② Sweep  — update every agent in ascending AgentId order:
//!                helper  → roll desertion, else stay dormant
//!                carrier → joint move / rebroadcast / give up
//!                walker  → adopt a neighbor in need, act on the cell
//!                          underfoot, climb the marker gradient, or wander
//! ```
//!
//! Scene generation scatters agents and objects from the run seed before
//! tick 0; see [`scenegen`].
//!
//! # Cargo features
//!
//! | Feature | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on summary/report types. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use antsort_core::SimConfig;
//! use antsort_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver);
//! println!("final counts: {:?}", sim.summarize());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scenegen;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use scenegen::{PlacementReport, ScenePlan};
pub use sim::Sim;
