//! sorting — collective object sorting by a colony of simple agents.
//!
//! Thirty agents roam a 40×40 grid littered with three kinds of objects,
//! picking up what their memory says is rare and dropping what it says is
//! common.  Kind-C objects are too heavy for one carrier, so stuck carriers
//! recruit a helper through a decaying marker field.  Over enough ticks the
//! uniform litter condenses into single-kind clusters; raise TOTAL_TICKS in
//! `config.rs` for tighter clusters, the run below keeps the demo quick.
//!
//! Run with: `cargo run -p sorting --release`

mod config;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use antsort_agent::AgentTable;
use antsort_core::{Direction, ObjectKind, Tick};
use antsort_output::{CsvWriter, OutputWriter, SimOutputObserver};
use antsort_sim::{SimBuilder, SimObserver, TickSummary};
use antsort_world::World;

use config::{AGENT_COUNT, SEED, TOTAL_TICKS, WORLD_SIZE, demo_config};

// ── Clustering metric ─────────────────────────────────────────────────────────

/// Fraction of adjacent object pairs (8-neighborhood) that share a kind.
/// ~1/3 on a fresh uniform scene with equal kind frequencies, 1.0 when every
/// touching pair matches.
fn neighbor_similarity(world: &World) -> f64 {
    let mut pairs = 0u64;
    let mut same = 0u64;
    for cell in world.cells() {
        let Some(kind) = cell.object() else { continue };
        for dir in Direction::MOVES {
            let (dx, dz) = dir.delta();
            if let Some(other) = world.object_at(cell.x() + dx, cell.z() + dz) {
                pairs += 1;
                if other == kind {
                    same += 1;
                }
            }
        }
    }
    if pairs == 0 { 0.0 } else { same as f64 / pairs as f64 }
}

// ── Observer wrapper to count output volume ───────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:        SimOutputObserver<W>,
    summary_rows: usize,
    snapshots:    usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, summary_rows: 0, snapshots: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.summary_rows += 1;
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World, agents: &AgentTable) {
        self.snapshots += 1;
        self.inner.on_snapshot(tick, world, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== sorting — antsort collective sorting ===");
    println!(
        "Agents: {AGENT_COUNT}  |  Grid: {WORLD_SIZE}×{WORLD_SIZE}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}"
    );
    println!();

    // 1. Build the sim from the shared demo config.
    let config = demo_config();
    let mut sim = SimBuilder::new(config.clone()).build()?;

    // 2. Scene report.  Placement is lossy on crowded grids, so print
    //    placed/requested rather than assuming they match.
    let report = &sim.placement;
    println!(
        "Scene: agents {}/{}, A {}/{}, B {}/{}, C {}/{}",
        report.agents_placed,
        report.agents_requested,
        report.objects_placed[0],
        report.objects_requested[0],
        report.objects_placed[1],
        report.objects_requested[1],
        report.objects_placed[2],
        report.objects_requested[2],
    );

    let mixed = neighbor_similarity(&sim.world);

    // 3. Set up CSV output.
    std::fs::create_dir_all("output/sorting")?;
    let writer = CsvWriter::new(Path::new("output/sorting"))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Output volume.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    println!("  cell_snapshots.csv : {} snapshots", obs.snapshots);
    println!();

    // 6. Final object census.
    let summary = sim.summarize();
    println!("{:<6} {:<9} {:<9}", "Kind", "In grid", "Carried");
    println!("{}", "-".repeat(26));
    for kind in ObjectKind::ALL {
        println!(
            "{:<6} {:<9} {:<9}",
            kind,
            summary.in_grid[kind.index()],
            summary.carried[kind.index()],
        );
    }
    println!();

    // 7. Did anything sort?
    let sorted = neighbor_similarity(&sim.world);
    println!("Neighbor similarity: {mixed:.3} → {sorted:.3}");

    Ok(())
}
