//! Simulation engine for GYRE.
//!
//! Owns the hecs ECS world and the mission list, runs systems once per
//! tick, and produces FleetSnapshots for the display layer.

pub mod engine;
pub mod mission;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use gyre_core as core;

#[cfg(test)]
mod tests;
