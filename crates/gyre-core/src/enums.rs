//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{SEVERITY_CRITICAL_PPKM2, SEVERITY_HIGH_PPKM2, SEVERITY_MEDIUM_PPKM2};

/// Vessel platform category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselClass {
    /// Small autonomous surface drone.
    #[default]
    Drone,
    /// Crewed collection ship.
    Ship,
    /// Large uncrewed autonomous collector.
    Autonomous,
}

/// Vessel operational status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VesselStatus {
    /// Underway and eligible for motion.
    #[default]
    Active,
    /// Holding position, not tasked.
    Idle,
    /// Out of service.
    Maintenance,
    /// Returning to port.
    Returning,
}

/// Hotspot severity band, derived from particle concentration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Classify a concentration (particles/km²) into a severity band.
    pub fn from_concentration(particles_per_km2: f64) -> Self {
        if particles_per_km2 >= SEVERITY_CRITICAL_PPKM2 {
            Severity::Critical
        } else if particles_per_km2 >= SEVERITY_HIGH_PPKM2 {
            Severity::High
        } else if particles_per_km2 >= SEVERITY_MEDIUM_PPKM2 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// Mission lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    /// Drafted but not yet underway; member vessels do not move.
    Planning,
    /// Underway — member vessels are driven by the motion integrator.
    #[default]
    Active,
    /// Plastic target reached.
    Completed,
    /// Suspended; member vessels hold position.
    Paused,
}
