//! Simulation engine — the core of GYRE.
//!
//! `SimulationEngine` owns the hecs ECS world, the mission list, and the
//! seeded RNG; processes queued commands; runs all systems; and produces
//! `FleetSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gyre_core::commands::FleetCommand;
use gyre_core::components::{Kinematics, Trail, VesselInfo};
use gyre_core::constants::VESSEL_TICK_SECS;
use gyre_core::events::SimEvent;
use gyre_core::state::{FleetSnapshot, HotspotView, VesselView};
use gyre_core::types::{GeoPos, SimTime};

use crate::mission::Mission;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Nominal tick period in seconds (used by runners for pacing).
    pub tick_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_secs: VESSEL_TICK_SECS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    running: bool,
    tick_secs: f64,
    rng: ChaCha8Rng,
    missions: Vec<Mission>,
    command_queue: VecDeque<FleetCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new, empty simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            running: true,
            tick_secs: config.tick_secs,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            missions: Vec::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Populate the world from the built-in Pacific patrol seed data:
    /// fleet, hotspot field, and initial missions.
    pub fn seed_pacific_patrol(&mut self) {
        self.missions = world_setup::seed_pacific_patrol(&mut self.world);
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: FleetCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = FleetCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt_secs` simulated seconds and return
    /// the resulting snapshot. While stopped, commands are still drained
    /// but no state mutates and time does not advance.
    pub fn tick(&mut self, dt_secs: f64) -> FleetSnapshot {
        self.process_commands();

        if self.running {
            self.run_systems(dt_secs);
            self.time.advance(dt_secs);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.running, &self.missions, events)
    }

    /// Advance by the configured nominal tick period.
    pub fn tick_nominal(&mut self) -> FleetSnapshot {
        self.tick(self.tick_secs)
    }

    /// Start or stop the motion loop.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Whether the motion loop is running.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Clear every vessel's trail to a single entry at its current position.
    pub fn reset_trails(&mut self) {
        for (_entity, (pos, trail)) in self.world.query_mut::<(&GeoPos, &mut Trail)>() {
            trail.reset_to(*pos);
        }
    }

    /// Current vessel views, sorted by id.
    pub fn vessels(&self) -> Vec<VesselView> {
        systems::snapshot::build_vessels(&self.world)
    }

    /// Current hotspot views, sorted by id.
    pub fn hotspots(&self) -> Vec<HotspotView> {
        systems::snapshot::build_hotspots(&self.world)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Nominal tick period in seconds.
    pub fn tick_secs(&self) -> f64 {
        self.tick_secs
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the mission list.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Get a mutable reference to the ECS world (for test scenario setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Replace the mission list (for test scenario setup).
    #[cfg(test)]
    pub fn set_missions(&mut self, missions: Vec<Mission>) {
        self.missions = missions;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: FleetCommand) {
        match command {
            FleetCommand::SetRunning { running } => {
                self.running = running;
            }
            FleetCommand::ResetTrails => {
                self.reset_trails();
            }
            FleetCommand::SetVesselStatus { vessel_id, status } => {
                for (_entity, (info, kin)) in
                    self.world.query_mut::<(&VesselInfo, &mut Kinematics)>()
                {
                    if info.id == vessel_id {
                        kin.status = status;
                    }
                }
            }
            FleetCommand::SetMissionStatus { mission_id, status } => {
                if let Some(mission) = self.missions.iter_mut().find(|m| m.id == mission_id) {
                    mission.status = status;
                }
            }
            FleetCommand::AssignVessel {
                mission_id,
                vessel_id,
            } => {
                if let Some(mission) = self.missions.iter_mut().find(|m| m.id == mission_id) {
                    if !mission.vessel_ids.contains(&vessel_id) {
                        mission.vessel_ids.push(vessel_id);
                    }
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_secs: f64) {
        // 1. Motion integration (replans exhausted vessels on the way).
        systems::movement::run(&mut self.world, &self.missions, dt_secs, &mut self.events);
        // 2. Collection accumulators.
        let gains = systems::collection::run(
            &mut self.world,
            &self.missions,
            &mut self.rng,
            &mut self.events,
        );
        // 3. Mission accounting (credit gains, complete missions).
        systems::missions::apply_collection(&mut self.missions, &gains, &mut self.events);
    }
}
