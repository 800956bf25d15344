//! Mission data model — cleanup campaigns linking vessels to hotspots.
//!
//! Stored in `SimulationEngine`'s mission list, NOT as ECS entities.

use serde::{Deserialize, Serialize};

use gyre_core::enums::MissionStatus;

/// A cleanup mission: a set of vessels tasked against a set of hotspots
/// with a plastic recovery target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: u32,
    pub name: String,
    pub status: MissionStatus,
    /// Member vessel ids. A vessel only moves while referenced by at
    /// least one Active mission.
    pub vessel_ids: Vec<u32>,
    /// Hotspots this mission is chartered against.
    pub hotspot_ids: Vec<u32>,
    /// Recovery goal (kg).
    pub plastic_target_kg: f64,
    /// Recovered so far (kg). Never decreases.
    pub plastic_collected_kg: f64,
    /// `100 * collected / target`, clamped to 100.
    pub efficiency_pct: f64,
}

impl Mission {
    pub fn new(id: u32, name: impl Into<String>, status: MissionStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            vessel_ids: Vec::new(),
            hotspot_ids: Vec::new(),
            plastic_target_kg: 0.0,
            plastic_collected_kg: 0.0,
            efficiency_pct: 0.0,
        }
    }
}
