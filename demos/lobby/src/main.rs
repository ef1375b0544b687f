//! lobby — smallest demo for the lift simulation crates.
//!
//! Runs two simulations in a ten-floor building: a short scripted morning
//! (four hall calls, printed to the console tick by tick) and a seeded
//! random batch written to `output/lobby/ticks.csv`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lift_calls::{random_calls, CallEvent};
use lift_core::{Direction, Floor, SimConfig, SimRng, Tick};
use lift_output::{ConsoleWriter, CsvWriter, SimOutputObserver};
use lift_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64   = 42;
const MAX_TICKS:    u64   = 1_000;
const RANDOM_CALLS: usize = 25;
const LATEST_TICK:  u64   = 50; // random calls land in the first 50 ticks

// ── Call scripts ──────────────────────────────────────────────────────────────

fn morning_script() -> Vec<CallEvent> {
    vec![
        CallEvent::new(Floor(9), Floor(10), Direction::Up, Tick(0)),
        CallEvent::new(Floor(4), Floor(1), Direction::Down, Tick(1)),
        CallEvent::new(Floor(8), Floor(10), Direction::Up, Tick(1)),
        CallEvent::new(Floor(8), Floor(6), Direction::Down, Tick(2)),
    ]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== lobby — single-car lift simulation ===");
    println!("Building: 10 floors  |  Seed: {SEED}");
    println!();

    let config = SimConfig::ten_floor(SEED, MAX_TICKS);

    // 1. Scripted morning, tick-by-tick to the console.
    println!("-- scripted morning ({} calls) --", morning_script().len());
    let mut sim = SimBuilder::new(config.clone())
        .calls(morning_script())
        .build()?;
    let mut console = SimOutputObserver::new(ConsoleWriter::new(std::io::stdout()));
    let summary = sim.run(&mut console)?;
    if let Some(e) = console.take_error() {
        eprintln!("output error: {e}");
    }
    println!();

    // 2. Seeded random batch, written to CSV.
    println!("-- random batch ({RANDOM_CALLS} calls) --");
    let mut rng = SimRng::new(SEED);
    let calls = random_calls(&mut rng, &config.floors, RANDOM_CALLS, Tick(LATEST_TICK));
    let mut sim = SimBuilder::new(config).calls(calls).build()?;

    std::fs::create_dir_all("output/lobby")?;
    let writer = CsvWriter::new(Path::new("output/lobby"))?;
    let mut csv_obs = SimOutputObserver::new(writer);

    let t0 = Instant::now();
    let batch = sim.run(&mut csv_obs)?;
    let elapsed = t0.elapsed();
    if let Some(e) = csv_obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Batch complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  scripted : {} ticks, {} delivered",
        summary.ticks, summary.delivered
    );
    println!(
        "  random   : {} ticks, {} delivered (output/lobby/ticks.csv)",
        batch.ticks, batch.delivered
    );

    Ok(())
}
