//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `ConfigError` as one
//! variant via `#[from]`.  Runtime precondition failures (blocked moves,
//! occupied cells) are not errors at all — those are `bool`/`Option`
//! returns on the world's operations.

use thiserror::Error;

/// A rejected [`SimConfig`](crate::SimConfig) field.  Produced by
/// `SimConfig::validate` before any world or agent state is built, so a bad
/// configuration can never leave a half-constructed simulation behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("world_size must be within [1, 16384]")]
    WorldSize,

    #[error("memory_size must be at least 1")]
    MemorySize,

    #[error("max_move_dist must be at least 1")]
    MaxMoveDist,

    #[error("k_plus must be finite and > 0")]
    KPlus,

    #[error("k_minus must be finite and > 0")]
    KMinus,

    #[error("error_rate must be within [0, 1]")]
    ErrorRate,

    #[error("desertion_rate must be within [0, 1]")]
    DesertionRate,

    #[error("marker_radius must be at least 1")]
    MarkerRadius,

    #[error("marker_attenuation must be within (0, 1)")]
    MarkerAttenuation,

    #[error("marker_cooldown must be finite and >= 0")]
    MarkerCooldown,

    #[error("give_up_cooldown must be finite and >= 0")]
    GiveUpCooldown,

    #[error("tick_dt_secs must be finite and > 0")]
    TickDtSecs,

    #[error("output_interval_ticks must be at least 1")]
    OutputInterval,
}

/// Shorthand result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
