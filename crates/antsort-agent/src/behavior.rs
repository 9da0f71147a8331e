//! The per-tick decision loop.
//!
//! One call to [`update_agent`] runs a single agent's full turn:
//! perceive → act → remember → cooldown bookkeeping.  The world mutates
//! *during* the call, so agents later in the tick order see everything
//! earlier agents did — the model is deliberately sequential, and order
//! effects (first mover claims the contested cell) are part of it.
//!
//! # Decision tree
//!
//! ```text
//! assisting someone?      → dormant (may desert with a small probability)
//! object underfoot?
//!   ├─ hands free         → roll pick-up, else walk
//!   ├─ carrying heavy     → cooperative handling
//!   └─ carrying light     → walk (the cell's object blocks any drop)
//! no object underfoot?
//!   ├─ carrying something → roll put-down, else heavy-handling / walk
//!   └─ hands free         → walk
//! ```
//!
//! "Walk" is itself three-staged: adopt a neighbor calling for help, else
//! climb the marker gradient, else a bounded random walk.

use antsort_core::{AgentId, AgentRng, Direction, ObjectKind, SimConfig};
use antsort_world::{Perception, World};

use crate::table::AgentTable;

/// Redraw budget for a coordinated two-agent step.
const JOINT_MOVE_ATTEMPTS: usize = 3;

/// Redraw budget for the solo random walk.
const WALK_ATTEMPTS: usize = 5;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Deneubourg pick-up score: certain at frequency 0, vanishing as the
/// remembered abundance of the kind grows.
#[inline]
pub fn pick_up_probability(k_plus: f32, freq: f32) -> f32 {
    (k_plus / (k_plus + freq)).powi(2)
}

/// Deneubourg put-down score: impossible at frequency 0, approaching 1 as
/// the kind saturates memory.
#[inline]
pub fn put_down_probability(k_minus: f32, freq: f32) -> f32 {
    (freq / (k_minus + freq)).powi(2)
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run one agent's turn.  Mutates the world and the agent table directly;
/// the caller iterates agents in a fixed order and calls this once each per
/// tick.
pub fn update_agent(
    agent:  AgentId,
    world:  &mut World,
    agents: &mut AgentTable,
    config: &SimConfig,
    dt:     f32,
    rng:    &mut AgentRng,
) {
    // Helpers are dormant: their movement is driven by the carrier they
    // assist.  With a small per-tick probability one walks away instead.
    if agents.is_helping(agent) {
        if rng.gen_bool(config.desertion_rate as f64) {
            agents.desert(agent);
        }
        return;
    }

    let p = world.perceive(agent);
    act(agent, p, world, agents, config, rng);
    remember(agent, p, agents, config, rng);

    // Timers run only while nobody is helping; a bound helper freezes both.
    if agents.helper[agent.index()].is_none() {
        agents.marker_cooldown[agent.index()] -= dt;
        agents.give_up_cooldown[agent.index()] -= dt;
    }
}

// ── Acting ────────────────────────────────────────────────────────────────────

fn act(
    agent:  AgentId,
    p:      Perception,
    world:  &mut World,
    agents: &mut AgentTable,
    config: &SimConfig,
    rng:    &mut AgentRng,
) {
    match (p.object, agents.carried[agent.index()]) {
        (Some(kind), None) => {
            if !try_pick_up(agent, kind, world, agents, config, rng) {
                step(agent, p, world, agents, config, rng);
            }
        }
        (Some(_), Some(held)) => {
            if held.is_heavy() {
                carry_heavy(agent, p, world, agents, config, rng);
            } else {
                // Another object occupies this cell, so no drop is even
                // evaluated here; the agent just keeps walking.
                step(agent, p, world, agents, config, rng);
            }
        }
        (None, Some(held)) => {
            if !try_put_down(agent, held, false, world, agents, config, rng) {
                if held.is_heavy() {
                    carry_heavy(agent, p, world, agents, config, rng);
                } else {
                    step(agent, p, world, agents, config, rng);
                }
            }
        }
        (None, None) => step(agent, p, world, agents, config, rng),
    }
}

/// Roll the pick-up score against the remembered frequency of `kind`.  On
/// success the object leaves the grid; picking up the heavy kind
/// immediately broadcasts a call for help and arms both timers.
fn try_pick_up(
    agent:  AgentId,
    kind:   ObjectKind,
    world:  &mut World,
    agents: &mut AgentTable,
    config: &SimConfig,
    rng:    &mut AgentRng,
) -> bool {
    let freq = agents.memory[agent.index()].frequency(kind);
    if rng.gen_range(0.0..1.0f32) >= pick_up_probability(config.k_plus, freq) {
        return false;
    }
    let Some(taken) = world.pick_up(agent) else {
        return false;
    };
    agents.carried[agent.index()] = Some(taken);
    if taken.is_heavy() {
        agents.marker_cooldown[agent.index()] = config.marker_cooldown;
        world.put_marker(agent, config.marker_radius);
        agents.give_up_cooldown[agent.index()] = config.give_up_cooldown;
    }
    true
}

/// Roll the put-down score for the held kind (`force` skips the outcome,
/// not the roll, so the draw stream is independent of the give-up state).
/// Fails if the cell already holds an object.  Dropping the heavy kind
/// dissolves any helper bond.
fn try_put_down(
    agent:  AgentId,
    held:   ObjectKind,
    force:  bool,
    world:  &mut World,
    agents: &mut AgentTable,
    config: &SimConfig,
    rng:    &mut AgentRng,
) -> bool {
    let freq = agents.memory[agent.index()].frequency(held);
    let roll = rng.gen_range(0.0..1.0f32) < put_down_probability(config.k_minus, freq);
    if !(roll || force) {
        return false;
    }
    if !world.put_down(agent, held) {
        return false;
    }
    agents.carried[agent.index()] = None;
    if held.is_heavy() {
        agents.release_helper(agent);
    }
    true
}

// ── Cooperative carrying ──────────────────────────────────────────────────────

/// A heavy carrier's turn: move with its helper if it has one, otherwise
/// keep calling for help until the give-up timer runs out.
fn carry_heavy(
    agent:  AgentId,
    p:      Perception,
    world:  &mut World,
    agents: &mut AgentTable,
    config: &SimConfig,
    rng:    &mut AgentRng,
) {
    if let Some(helper) = agents.helper[agent.index()] {
        joint_move(agent, helper, world, config, rng);
        return;
    }
    if agents.marker_cooldown[agent.index()] <= 0.0 {
        world.put_marker(agent, config.marker_radius);
        agents.marker_cooldown[agent.index()] = config.marker_cooldown;
    }
    if agents.give_up_cooldown[agent.index()] <= 0.0 {
        give_up(agent, p, world, agents, config, rng);
    }
}

/// One coordinated step: draw a direction and distance both agents can
/// take, and move them together.  Both legality checks run before either
/// agent moves, so the pair never ends up half-stepped.
fn joint_move(
    carrier: AgentId,
    helper:  AgentId,
    world:   &mut World,
    config:  &SimConfig,
    rng:     &mut AgentRng,
) {
    for _ in 0..JOINT_MOVE_ATTEMPTS {
        let dir  = Direction::random(rng, config.allow_rest);
        let dist = rng.gen_range(1..=config.max_move_dist);
        if world.can_move(carrier, dir, dist) && world.can_move(helper, dir, dist) {
            world.move_agent(carrier, dir, dist);
            world.move_agent(helper, dir, dist);
            return;
        }
    }
}

/// The give-up path: force the load down, withdraw the call for help, and
/// walk off.  If the cell refuses the drop (an object arrived underfoot),
/// the carrier stays stuck and retries next tick.
fn give_up(
    agent:  AgentId,
    p:      Perception,
    world:  &mut World,
    agents: &mut AgentTable,
    config: &SimConfig,
    rng:    &mut AgentRng,
) {
    let Some(held) = agents.carried[agent.index()] else {
        return;
    };
    if try_put_down(agent, held, true, world, agents, config, rng) {
        world.remove_marker(agent, config.marker_radius);
        agents.marker_cooldown[agent.index()]  = 0.0;
        agents.give_up_cooldown[agent.index()] = 0.0;
        step(agent, p, world, agents, config, rng);
    }
}

// ── Walking ───────────────────────────────────────────────────────────────────

/// The three-stage walk: recruit, climb the gradient, or wander.
fn step(
    agent:  AgentId,
    p:      Perception,
    world:  &mut World,
    agents: &mut AgentTable,
    config: &SimConfig,
    rng:    &mut AgentRng,
) {
    // 1. Recruitment: an unengaged, empty-handed agent adopts the first
    //    neighbor calling for help and spends the tick on the handshake.
    if let Some(in_need) = world.neighbor_in_need(agent, |id| agents.is_asking_for_help(id)) {
        let unengaged = agents.carried[agent.index()].is_none()
            && agents.helper[agent.index()].is_none()
            && agents.assisting[agent.index()].is_none();
        if unengaged {
            agents.bind_help(agent, in_need);
            world.remove_marker(in_need, config.marker_radius);
            return;
        }
    }

    // 2. Gradient climb: standing in a marked cell, head for the strongest
    //    adjacent marker that will have us.
    if p.marker > 0.0 {
        for (_, dir) in world.marker_gradient(agent) {
            if world.move_agent(agent, dir, 1) {
                return;
            }
        }
    }

    // 3. Random walk with a bounded redraw budget; exhaustion means the
    //    agent stands still this tick.
    for _ in 0..WALK_ATTEMPTS {
        let dir  = Direction::random(rng, config.allow_rest);
        let dist = rng.gen_range(1..=config.max_move_dist);
        if world.move_agent(agent, dir, dist) {
            return;
        }
    }
}

// ── Memory ────────────────────────────────────────────────────────────────────

/// Record what the tick's perception showed, after the sensor-noise roll.
/// Corruption touches only what is remembered — the acting decisions above
/// always used the true perception.
fn remember(
    agent:  AgentId,
    p:      Perception,
    agents: &mut AgentTable,
    config: &SimConfig,
    rng:    &mut AgentRng,
) {
    let mut seen = p.object;
    if let Some(kind) = seen {
        if rng.gen_range(0.0..1.0f32) < config.error_rate {
            seen = Some(kind.misperceive(rng));
        }
    }
    agents.memory[agent.index()].record(seen);
}
