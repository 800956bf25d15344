//! Events emitted by the simulation for the display layer.

use serde::{Deserialize, Serialize};

use crate::components::Waypoint;

/// Structured events carried in each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A vessel received a fresh waypoint plan.
    RouteAssigned {
        vessel_id: u32,
        waypoints: Vec<Waypoint>,
    },
    /// A vessel came within the arrival radius of its target waypoint.
    WaypointReached {
        vessel_id: u32,
        hotspot_id: Option<u32>,
    },
    /// A vessel's battery hit 0.
    BatteryDepleted { vessel_id: u32 },
    /// A mission's plastic target was reached.
    MissionCompleted { mission_id: u32 },
}
