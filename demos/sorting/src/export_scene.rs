//! Export the initial scene for the visualization layer.
//!
//! Writes two JSON files to `output/sorting/`:
//!   - `objects.json` — `[{x, z, kind}, …]`
//!   - `agents.json`  — `[{agent_id, x, z}, …]`
//!
//! Run with: `cargo run -p sorting --bin export_scene`

mod config;

use std::fs;

use anyhow::Result;
use serde_json::json;

use antsort_sim::SimBuilder;

use config::demo_config;

fn main() -> Result<()> {
    let sim = SimBuilder::new(demo_config()).build()?;

    fs::create_dir_all("output/sorting")?;

    // ── objects.json ──────────────────────────────────────────────────────────
    let objects: Vec<serde_json::Value> = sim
        .world
        .cells()
        .filter_map(|cell| {
            cell.object()
                .map(|kind| json!({ "x": cell.x(), "z": cell.z(), "kind": kind.as_str() }))
        })
        .collect();

    let objects_json = serde_json::to_string_pretty(&objects)?;
    fs::write("output/sorting/objects.json", &objects_json)?;
    println!("Wrote output/sorting/objects.json ({} objects)", objects.len());

    // ── agents.json ───────────────────────────────────────────────────────────
    let agents: Vec<serde_json::Value> = sim
        .agents
        .agent_ids()
        .filter_map(|agent| {
            sim.world
                .position_of(agent)
                .map(|(x, z)| json!({ "agent_id": agent.0, "x": x, "z": z }))
        })
        .collect();

    let agents_json = serde_json::to_string_pretty(&agents)?;
    fs::write("output/sorting/agents.json", &agents_json)?;
    println!("Wrote output/sorting/agents.json ({} agents)", agents.len());

    Ok(())
}
