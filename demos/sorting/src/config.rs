//! Shared run parameters, so `sorting` and `export_scene` build the
//! identical seeded scene.

use antsort_core::SimConfig;

pub const WORLD_SIZE:  usize = 40;
pub const AGENT_COUNT: usize = 30;
pub const A_COUNT:     usize = 120;
pub const B_COUNT:     usize = 120;
pub const C_COUNT:     usize = 30;
pub const SEED:        u64   = 42;
pub const TOTAL_TICKS: u64   = 20_000;

/// Snapshot every 10 simulated seconds (600 ticks at 1/60 s per tick).
pub const OUTPUT_INTERVAL_TICKS: u64 = 600;

pub fn demo_config() -> SimConfig {
    SimConfig {
        world_size:            WORLD_SIZE,
        agent_count:           AGENT_COUNT,
        a_count:               A_COUNT,
        b_count:               B_COUNT,
        c_count:               C_COUNT,
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        ..SimConfig::default()
    }
}
