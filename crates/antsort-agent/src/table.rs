//! Agent state storage: `AgentTable` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! One sweep iteration wants the acting agent's RNG and the table (its own
//! state plus its partners' bond fields) mutably at the same time.  A single
//! struct cannot hand out both borrows, so the RNG pool lives next to the
//! table instead of inside it:
//!
//! ```ignore
//! // antsort-sim tick loop (simplified):
//! for agent in agents.agent_ids().collect::<Vec<_>>() {
//!     let rng = rngs.get_mut(agent);
//!     behavior::update_agent(agent, &mut world, &mut agents, &cfg, dt, rng);
//! }
//! ```
//!
//! Cooperation bonds are plain `Option<AgentId>` fields resolved through
//! this table — no references between agents, so breaking a bond is two
//! indexed writes and can never dangle.

use antsort_core::{AgentId, AgentRng, ObjectKind};

use crate::memory::Memory;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// The RNG pool, one stream per agent, separated from [`AgentTable`] so the
/// tick loop can hold `&mut` to both at once.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Seed one stream per agent from the run seed.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Borrow one agent's stream mutably.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }
}

// ── AgentTable ────────────────────────────────────────────────────────────────

/// All per-agent state, stored as parallel columns.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is
/// the index into all of them:
///
/// ```ignore
/// let held = table.carried[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Positions are *not* here — the world owns its position index; this table
/// owns everything private to an agent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentTable {
    /// Agent population; every column below has exactly this length.
    pub count: usize,

    /// What the agent holds.  A carried object is absent from every cell.
    pub carried: Vec<Option<ObjectKind>>,

    /// Recent-perception ring buffers.
    pub memory: Vec<Memory>,

    /// Seconds until the agent may re-broadcast a help marker.
    pub marker_cooldown: Vec<f32>,

    /// Seconds until a heavy carrier gives up waiting for help.
    pub give_up_cooldown: Vec<f32>,

    /// The agent currently assisting this one, if any.
    pub helper: Vec<Option<AgentId>>,

    /// The agent this one currently assists, if any.  An agent with this
    /// set is "busy": it skips its own decision loop.
    pub assisting: Vec<Option<AgentId>>,
}

impl AgentTable {
    /// A table of `count` idle agents with blank memories of
    /// `memory_size` slots.
    pub fn new(count: usize, memory_size: usize) -> Self {
        Self {
            count,
            carried:          vec![None; count],
            memory:           (0..count).map(|_| Memory::new(memory_size)).collect(),
            marker_cooldown:  vec![0.0; count],
            give_up_cooldown: vec![0.0; count],
            helper:           vec![None; count],
            assisting:        vec![None; count],
        }
    }

    /// Every `AgentId`, ascending — the sweep order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Predicates ────────────────────────────────────────────────────────

    /// An open call for help: carrying the heavy kind, give-up timer still
    /// running, and not yet part of any bond.
    pub fn is_asking_for_help(&self, agent: AgentId) -> bool {
        matches!(self.carried[agent.index()], Some(k) if k.is_heavy())
            && self.give_up_cooldown[agent.index()] > 0.0
            && self.helper[agent.index()].is_none()
            && self.assisting[agent.index()].is_none()
    }

    #[inline]
    pub fn has_helper(&self, agent: AgentId) -> bool {
        self.helper[agent.index()].is_some()
    }

    /// "Busy" in the scheduling sense: movement is driven by the carrier
    /// this agent assists.
    #[inline]
    pub fn is_helping(&self, agent: AgentId) -> bool {
        self.assisting[agent.index()].is_some()
    }

    // ── Bond management ───────────────────────────────────────────────────

    /// Form the mutual bond: `helper` starts assisting `in_need`.
    ///
    /// Callers check eligibility first; in debug builds the one-bond-deep
    /// invariant is asserted.
    pub fn bind_help(&mut self, helper: AgentId, in_need: AgentId) {
        debug_assert_ne!(helper, in_need);
        debug_assert!(self.helper[in_need.index()].is_none());
        debug_assert!(self.assisting[helper.index()].is_none());
        self.helper[in_need.index()]    = Some(helper);
        self.assisting[helper.index()]  = Some(in_need);
    }

    /// Dissolve the bond from the carrier's side (the load was dropped or
    /// the carrier gave up).  No-op without a helper.
    pub fn release_helper(&mut self, of: AgentId) {
        if let Some(h) = self.helper[of.index()].take() {
            self.assisting[h.index()] = None;
        }
    }

    /// Dissolve the bond from the helper's side (desertion).  No-op if the
    /// agent is not assisting anyone.
    pub fn desert(&mut self, helper: AgentId) {
        if let Some(carrier) = self.assisting[helper.index()].take() {
            self.helper[carrier.index()] = None;
        }
    }
}
