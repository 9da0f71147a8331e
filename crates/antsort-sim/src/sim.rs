//! `Sim`: all run state plus the two-phase tick loop that drives it.

use antsort_agent::{update_agent, AgentRngs, AgentTable};
use antsort_core::{AgentId, SimClock, SimConfig};
use antsort_world::World;

use crate::{PlacementReport, SimBuilder, SimObserver, SimResult, TickSummary};

/// A fully built simulation, ready to step.
///
/// Owns every piece of run state and drives the two-phase tick loop:
///
/// 1. **Decay**: the help-marker field is attenuated once per tick; values
///    below the floor snap to zero.
/// 2. **Agent sweep** (sequential, ascending `AgentId` for determinism):
///    each agent senses its cell and acts — picks up, puts down, manages its
///    heavy load, follows marker gradients, or wanders.
///
/// Create via [`SimBuilder`].
pub struct Sim {
    /// Global configuration (grid size, scoring constants, seed, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to sim seconds.
    pub clock: SimClock,

    /// The grid: object layer, agent layer, and the help-marker field.
    pub world: World,

    /// Per-agent state (SoA arrays): carried load, memory, timers, bonds.
    pub agents: AgentTable,

    /// One RNG stream per agent, held beside the table so the sweep can
    /// borrow both mutably.
    pub rngs: AgentRngs,

    /// What scene generation actually managed to place.
    pub placement: PlacementReport,

    /// While set, `step`/`run`/`run_ticks` leave all state untouched.
    pub(crate) paused: bool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Drive the simulation from the current tick up to `config.end_tick()`,
    /// firing observer hooks at every tick boundary.
    ///
    /// Pass [`NoopObserver`][crate::NoopObserver] when callbacks are not
    /// needed.  A paused sim returns immediately, with `on_sim_end` still
    /// delivered.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        loop {
            let now = self.clock.current_tick;
            if self.paused || now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            let summary = self.process_tick();
            observer.on_tick_end(now, &summary);
            if self.config.output_interval_ticks > 0
                && now.0.is_multiple_of(self.config.output_interval_ticks)
            {
                observer.on_snapshot(now, &self.world, &self.agents);
            }

            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run at most `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.  Stops early if paused;
    /// `on_sim_end` is not called.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.paused {
                break;
            }
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let summary = self.process_tick();
            observer.on_tick_end(now, &summary);
            if self.config.output_interval_ticks > 0
                && now.0.is_multiple_of(self.config.output_interval_ticks)
            {
                observer.on_snapshot(now, &self.world, &self.agents);
            }
            self.clock.advance();
        }
    }

    /// Advance exactly one tick and return its summary, or `None` while
    /// paused (the clock does not move).
    pub fn step(&mut self) -> Option<TickSummary> {
        if self.paused {
            return None;
        }
        let summary = self.process_tick();
        self.clock.advance();
        Some(summary)
    }

    /// Freeze the simulation.  All state, including the clock, holds still
    /// until [`resume`](Sim::resume).
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Undo [`pause`](Sim::pause).
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Regenerate the scene from the stored config, as if freshly built.
    ///
    /// Scene generation re-draws from `config.seed`, so a reset run repeats
    /// the original run exactly.  Explicit builder placements do not
    /// survive a reset; the pause flag does.
    pub fn reset(&mut self) -> SimResult<()> {
        let paused = self.paused;
        *self = SimBuilder::new(self.config.clone()).build()?;
        self.paused = paused;
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// One full tick: marker decay, then the agent sweep.
    ///
    /// Agents update sequentially in ascending `AgentId` order, each drawing
    /// from its own RNG stream, so a run is fully determined by
    /// `(config, seed)`.
    fn process_tick(&mut self) -> TickSummary {
        // ── Phase 1: attenuate the marker field ───────────────────────────
        //
        // Markers broadcast during the sweep below keep their full strength
        // until the next tick's decay pass.
        self.world.decay_markers(self.config.marker_attenuation);

        // ── Phase 2: agent sweep ──────────────────────────────────────────
        let dt = self.config.tick_dt_secs;
        for i in 0..self.agents.count {
            let agent = AgentId(i as u32);
            update_agent(
                agent,
                &mut self.world,
                &mut self.agents,
                &self.config,
                dt,
                self.rngs.get_mut(agent),
            );
        }

        self.summarize()
    }

    /// Aggregate counts over the current state.
    pub fn summarize(&self) -> TickSummary {
        let mut carried = [0usize; 3];
        for held in &self.agents.carried {
            if let Some(kind) = held {
                carried[kind.index()] += 1;
            }
        }

        let bonds = self.agents.helper.iter().filter(|h| h.is_some()).count();
        let asking = self
            .agents
            .agent_ids()
            .filter(|&a| self.agents.is_asking_for_help(a))
            .count();

        TickSummary {
            tick: self.clock.current_tick,
            in_grid: self.world.object_counts(),
            carried,
            bonds,
            asking,
        }
    }
}
