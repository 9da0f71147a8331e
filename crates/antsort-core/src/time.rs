//! Tick counting and the simulated clock.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter; one tick is one fixed
//! update step of `tick_dt_secs` simulated seconds:
//!
//!   elapsed = tick * tick_dt_secs
//!
//! With the integer tick as the canonical unit, ordering and comparisons
//! stay exact.  The only floating-point time values in the system are the
//! per-agent cooldown timers, which lose `tick_dt_secs` each step and are
//! only ever compared against zero.
//!
//! The default step is 1/60 s, a fixed-rate update loop decoupled from any
//! render frame rate.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Absolute tick counter, the canonical time unit.
///
/// `u64` never overflows in practice: at 60 ticks per simulated second
/// there is headroom for billions of years of run time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

/// `tick + n` is the tick `n` steps later.
impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

/// `later - earlier` is the step count between two ticks.  Underflows (and
/// panics in debug builds) when the operands are swapped.
impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tick counter plus the fixed step duration.
///
/// Cheap to copy; intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds represented by one tick.
    pub tick_dt_secs: f32,
    /// The tick about to be processed; `advance` moves it forward.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given step duration.
    pub fn new(tick_dt_secs: f32) -> Self {
        Self {
            tick_dt_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Move the clock forward one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Seconds of sim time accumulated since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.current_tick.0 as f32 * self.tick_dt_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}
