//! Fleet snapshot — the complete visible state published after each tick.

use serde::{Deserialize, Serialize};

use crate::components::Waypoint;
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{GeoPos, SimTime};

/// Complete simulation state broadcast to the display layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub time: SimTime,
    /// Whether the motion loop is running.
    pub running: bool,
    pub vessels: Vec<VesselView>,
    pub hotspots: Vec<HotspotView>,
    pub missions: Vec<MissionView>,
    /// Events produced during this tick.
    pub events: Vec<SimEvent>,
}

/// A vessel as seen by the display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselView {
    pub id: u32,
    pub name: String,
    pub class: VesselClass,
    pub status: VesselStatus,
    pub position: GeoPos,
    /// Cruise speed (knots).
    pub speed_knots: f64,
    /// Hotspot currently being steered for.
    pub current_target: Option<u32>,
    /// Remaining plan, in steering order.
    pub waypoints: Vec<Waypoint>,
    /// Position history for path rendering, oldest to newest.
    pub trail: Vec<GeoPos>,
    pub plastic_collected_kg: f64,
    pub battery_pct: f64,
}

/// A hotspot as seen by the display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotView {
    pub id: u32,
    pub position: GeoPos,
    pub concentration_ppkm2: f64,
    pub severity: Severity,
    pub area_km2: f64,
    pub detected_tick: u64,
}

/// A mission as seen by the display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionView {
    pub id: u32,
    pub name: String,
    pub status: MissionStatus,
    pub vessel_ids: Vec<u32>,
    pub hotspot_ids: Vec<u32>,
    pub plastic_target_kg: f64,
    pub plastic_collected_kg: f64,
    pub efficiency_pct: f64,
}
