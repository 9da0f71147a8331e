//! Top-level simulation configuration.
//!
//! One plain struct owned by the driver and passed by reference everywhere —
//! never a process-wide static.  `Default` reproduces the classic parameter
//! set of the sorting model; `validate()` is called by the builder before
//! any state is constructed.

use crate::error::{ConfigError, ConfigResult};
use crate::time::{SimClock, Tick};

/// All tunable parameters of a run.
///
/// Typically built in code or loaded from a TOML/JSON file by the
/// application crate (enable the `serde` feature) and handed to the
/// simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    // ── World & population ────────────────────────────────────────────────
    /// Side length of the square grid.
    pub world_size: usize,

    /// Number of agents to place at scene generation.
    pub agent_count: usize,

    /// Number of kind-A objects to scatter.
    pub a_count: usize,

    /// Number of kind-B objects to scatter.
    pub b_count: usize,

    /// Number of kind-C (heavy) objects to scatter.
    pub c_count: usize,

    // ── Movement ──────────────────────────────────────────────────────────
    /// Maximum step distance per move; draws are uniform in `[1, max]`.
    pub max_move_dist: u32,

    /// Whether a random-walk draw may yield the rest direction (the agent
    /// stays put that step).
    pub allow_rest: bool,

    // ── Pick-up / put-down scoring ────────────────────────────────────────
    /// Pick-up steepness: `prob = (k_plus / (k_plus + freq))^2`.
    pub k_plus: f32,

    /// Put-down steepness: `prob = (freq / (k_minus + freq))^2`.
    pub k_minus: f32,

    /// Ring-buffer capacity of each agent's perception memory.
    pub memory_size: usize,

    /// Probability that a remembered perception is corrupted to a random
    /// different kind.  Affects memory only, never the current decision.
    pub error_rate: f32,

    // ── Help markers & cooperation ────────────────────────────────────────
    /// Chebyshev radius of a marker broadcast.
    pub marker_radius: u32,

    /// Per-tick multiplicative marker decay, in `(0, 1)`.
    pub marker_attenuation: f32,

    /// Seconds between repeated marker broadcasts by a stuck carrier.
    pub marker_cooldown: f32,

    /// Seconds a heavy carrier waits for help before giving up.
    pub give_up_cooldown: f32,

    /// Per-tick probability that a bound helper walks away.
    pub desertion_rate: f32,

    // ── Display passthrough ───────────────────────────────────────────────
    /// Whether a display layer should draw the marker field.  The core only
    /// stores this; it has no effect on the simulation itself.
    pub show_markers: bool,

    // ── Run control ───────────────────────────────────────────────────────
    /// Simulated seconds per tick.  Cooldowns are decremented by this much
    /// each step.
    pub tick_dt_secs: f32,

    /// Total ticks for a batch `run`.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Snapshot output every N ticks.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_size:            50,
            agent_count:           20,
            a_count:               200,
            b_count:               200,
            c_count:               50,
            max_move_dist:         1,
            allow_rest:            true,
            k_plus:                0.1,
            k_minus:               0.3,
            memory_size:           10,
            error_rate:            0.0,
            marker_radius:         3,
            marker_attenuation:    0.99,
            marker_cooldown:       5.0,
            give_up_cooldown:      15.0,
            desertion_rate:        0.05,
            show_markers:          true,
            tick_dt_secs:          1.0 / 60.0,
            total_ticks:           10_000,
            seed:                  0,
            output_interval_ticks: 60,
        }
    }
}

impl SimConfig {
    /// Check every field against its documented bounds.  Returns the first
    /// violation found, in field-declaration order.
    pub fn validate(&self) -> ConfigResult<()> {
        // The grid is a dense allocation of world_size², so bound it.
        if self.world_size == 0 || self.world_size > 16_384 {
            return Err(ConfigError::WorldSize);
        }
        if self.memory_size == 0 {
            return Err(ConfigError::MemorySize);
        }
        if self.max_move_dist == 0 {
            return Err(ConfigError::MaxMoveDist);
        }
        if !self.k_plus.is_finite() || self.k_plus <= 0.0 {
            return Err(ConfigError::KPlus);
        }
        if !self.k_minus.is_finite() || self.k_minus <= 0.0 {
            return Err(ConfigError::KMinus);
        }
        if !self.error_rate.is_finite() || !(0.0..=1.0).contains(&self.error_rate) {
            return Err(ConfigError::ErrorRate);
        }
        if !self.desertion_rate.is_finite() || !(0.0..=1.0).contains(&self.desertion_rate) {
            return Err(ConfigError::DesertionRate);
        }
        if self.marker_radius == 0 {
            return Err(ConfigError::MarkerRadius);
        }
        if !self.marker_attenuation.is_finite()
            || self.marker_attenuation <= 0.0
            || self.marker_attenuation >= 1.0
        {
            return Err(ConfigError::MarkerAttenuation);
        }
        if !self.marker_cooldown.is_finite() || self.marker_cooldown < 0.0 {
            return Err(ConfigError::MarkerCooldown);
        }
        if !self.give_up_cooldown.is_finite() || self.give_up_cooldown < 0.0 {
            return Err(ConfigError::GiveUpCooldown);
        }
        if !self.tick_dt_secs.is_finite() || self.tick_dt_secs <= 0.0 {
            return Err(ConfigError::TickDtSecs);
        }
        if self.output_interval_ticks == 0 {
            return Err(ConfigError::OutputInterval);
        }
        Ok(())
    }

    /// The tick at which a batch run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_dt_secs)
    }
}
