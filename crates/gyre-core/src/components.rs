//! ECS components for hecs entities.
//!
//! Components are plain data structs with no simulation logic.
//! Systems own the behavior; components only hold state.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_TRAIL_POINTS;
use crate::enums::*;
use crate::types::GeoPos;

/// Static identity of a fleet vessel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselInfo {
    /// Unique vessel id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Platform category.
    pub class: VesselClass,
}

/// Vessel kinematic state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kinematics {
    /// Cruise speed in knots.
    pub speed_knots: f64,
    /// Operational status; only Active vessels move.
    pub status: VesselStatus,
}

/// A single navigation target within a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Waypoint {
    /// Target coordinate.
    pub target: GeoPos,
    /// Hotspot this waypoint was planned against, if any. `None` for the
    /// degenerate hold-position waypoint.
    pub hotspot_id: Option<u32>,
    /// Set once the vessel has come within the arrival radius; never unset.
    pub completed: bool,
}

/// A vessel's ordered waypoint plan.
///
/// An empty waypoint list means "no plan yet"; the planner replaces the
/// whole plan when it is exhausted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavPlan {
    pub waypoints: Vec<Waypoint>,
    /// Hotspot id of the waypoint currently being steered for.
    pub current_target: Option<u32>,
}

impl NavPlan {
    /// Index of the first incomplete waypoint, if any.
    pub fn next_incomplete(&self) -> Option<usize> {
        self.waypoints.iter().position(|w| !w.completed)
    }

    /// True when there is nothing left to steer for.
    pub fn is_exhausted(&self) -> bool {
        self.next_incomplete().is_none()
    }
}

/// Bounded history of past positions, oldest to newest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trail {
    pub positions: Vec<GeoPos>,
}

impl Trail {
    /// Append a position, evicting from the front once the cap is reached.
    pub fn push(&mut self, pos: GeoPos) {
        self.positions.push(pos);
        if self.positions.len() > MAX_TRAIL_POINTS {
            let excess = self.positions.len() - MAX_TRAIL_POINTS;
            self.positions.drain(..excess);
        }
    }

    /// Reset the trail to a single entry at the given position.
    pub fn reset_to(&mut self, pos: GeoPos) {
        self.positions.clear();
        self.positions.push(pos);
    }
}

/// Per-vessel collection accumulators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollectionStats {
    /// Plastic recovered so far (kg). Never decreases.
    pub plastic_collected_kg: f64,
    /// Battery charge (percent). Never increases; floored at 0.
    pub battery_pct: f64,
}

impl Default for CollectionStats {
    fn default() -> Self {
        Self {
            plastic_collected_kg: 0.0,
            battery_pct: 100.0,
        }
    }
}

/// A detected plastic accumulation zone. Paired with a `GeoPos` component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hotspot {
    /// Unique hotspot id.
    pub id: u32,
    /// Particle concentration (particles/km²).
    pub concentration_ppkm2: f64,
    /// Severity band derived from concentration.
    pub severity: Severity,
    /// Surface area of the zone (km²).
    pub area_km2: f64,
    /// Tick at which the hotspot was first catalogued.
    pub detected_tick: u64,
}

/// Marks an entity as a fleet vessel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vessel;
