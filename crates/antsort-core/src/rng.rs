//! Seeded RNG streams: one per agent, plus a global stream for scene setup.
//!
//! Per-agent seeding folds the agent ID into the run seed:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! with the 64-bit golden-ratio constant as the multiplier, so consecutive
//! IDs land far apart in seed space.  Consequences:
//!
//! - A draw by one agent never shifts another agent's stream; sweep order
//!   and stream contents are independent concerns.
//! - Growing the population appends new streams without reseeding the
//!   existing ones.
//! - `(config, seed)` pins an entire run, draw for draw.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional part of the golden ratio, the seed-mixing multiplier.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// One agent's private stream.
///
/// Lives in a `Vec<AgentRng>` parallel to the agent table so the sweep can
/// split-borrow an agent's RNG and its state at the same time.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Fold `agent` into `global_seed` and seed a fresh stream.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform draw from `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Bernoulli draw; `p` outside `[0, 1]` is clamped rather than panicking.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform pick from `slice`, `None` when it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Global stream for work no single agent owns: scene generation and its
/// placement retries.  Strictly single-threaded.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw from `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
