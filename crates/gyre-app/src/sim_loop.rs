//! Simulation loop thread — runs the engine at the nominal tick period
//! and publishes snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; snapshots go out on an
//! `mpsc` channel and are also stored in shared state for synchronous
//! polling by a display layer.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use gyre_core::commands::FleetCommand;
use gyre_core::state::FleetSnapshot;
use gyre_sim::{SimConfig, SimulationEngine};

/// Commands accepted by the loop thread.
#[derive(Debug, Clone)]
pub enum LoopCommand {
    Fleet(FleetCommand),
    Shutdown,
}

/// Handles returned to the caller of `spawn_sim_loop`.
pub struct SimLoopHandle {
    /// Sender for control commands.
    pub commands: mpsc::Sender<LoopCommand>,
    /// Receiver of per-tick snapshots.
    pub snapshots: mpsc::Receiver<FleetSnapshot>,
    /// Latest snapshot, for synchronous polling.
    pub latest: Arc<Mutex<Option<FleetSnapshot>>>,
}

/// Spawn the simulation loop in a new thread.
pub fn spawn_sim_loop(config: SimConfig, time_scale: f64) -> SimLoopHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let (snap_tx, snap_rx) = mpsc::channel::<FleetSnapshot>();
    let latest = Arc::new(Mutex::new(None));
    let latest_clone = Arc::clone(&latest);

    std::thread::Builder::new()
        .name("gyre-sim-loop".into())
        .spawn(move || {
            run_sim_loop(config, time_scale, cmd_rx, snap_tx, &latest_clone);
        })
        .expect("Failed to spawn simulation loop thread");

    SimLoopHandle {
        commands: cmd_tx,
        snapshots: snap_rx,
        latest,
    }
}

/// The loop body. Runs until Shutdown, channel disconnect, or the
/// snapshot receiver going away.
fn run_sim_loop(
    config: SimConfig,
    time_scale: f64,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    snap_tx: mpsc::Sender<FleetSnapshot>,
    latest: &Mutex<Option<FleetSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    engine.seed_pacific_patrol();

    let tick_duration = Duration::from_secs_f64(engine.tick_secs());
    let effective_tick_duration = if time_scale > 0.001 {
        tick_duration.div_f64(time_scale)
    } else {
        tick_duration
    };
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Fleet(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles stop semantics internally)
        let snapshot = engine.tick_nominal();

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest.lock() {
            *lock = Some(snapshot.clone());
        }

        // 4. Publish; a dropped receiver ends the loop
        if snap_tx.send(snapshot).is_err() {
            return;
        }

        // 5. Sleep until the next tick
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
