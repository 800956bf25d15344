//! Headless GYRE runner: drives the simulation loop and prints one JSON
//! snapshot per tick to stdout.
//!
//! Usage: `gyre-app [seed] [time_scale]`
//!   seed       RNG seed (default 42)
//!   time_scale wall-clock speedup; simulated dt stays at the nominal
//!              tick period (default 1.0)

mod sim_loop;

use gyre_sim::SimConfig;

use crate::sim_loop::spawn_sim_loop;

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(|| SimConfig::default().seed);
    let time_scale: f64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1.0);

    let config = SimConfig {
        seed,
        ..Default::default()
    };

    let handle = spawn_sim_loop(config, time_scale);

    for snapshot in handle.snapshots.iter() {
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("snapshot serialization failed: {err}"),
        }
    }
}
