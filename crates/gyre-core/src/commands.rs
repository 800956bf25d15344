//! Commands sent from the display layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible control actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FleetCommand {
    // --- Simulation control ---
    /// Start or stop the motion loop. Stopping halts all mutation; state
    /// is preserved and resumes cleanly.
    SetRunning { running: bool },
    /// Clear every vessel's trail to a single entry at its current position.
    ResetTrails,

    // --- Fleet management ---
    /// Change a vessel's operational status.
    SetVesselStatus { vessel_id: u32, status: VesselStatus },

    // --- Mission management ---
    /// Change a mission's lifecycle status.
    SetMissionStatus {
        mission_id: u32,
        status: MissionStatus,
    },
    /// Attach a vessel to a mission's membership.
    AssignVessel { mission_id: u32, vessel_id: u32 },
}
