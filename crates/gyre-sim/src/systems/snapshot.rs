//! Snapshot system: queries the ECS world and builds a complete
//! FleetSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use gyre_core::components::*;
use gyre_core::events::SimEvent;
use gyre_core::state::*;
use gyre_core::types::{GeoPos, SimTime};

use crate::mission::Mission;

/// Build a complete FleetSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    running: bool,
    missions: &[Mission],
    events: Vec<SimEvent>,
) -> FleetSnapshot {
    FleetSnapshot {
        time: *time,
        running,
        vessels: build_vessels(world),
        hotspots: build_hotspots(world),
        missions: build_missions(missions),
        events,
    }
}

/// Build VesselView list, sorted by id for stable output.
pub fn build_vessels(world: &World) -> Vec<VesselView> {
    let mut vessels: Vec<VesselView> = world
        .query::<(
            &VesselInfo,
            &Kinematics,
            &GeoPos,
            &NavPlan,
            &Trail,
            &CollectionStats,
        )>()
        .iter()
        .map(|(_, (info, kin, pos, plan, trail, stats))| VesselView {
            id: info.id,
            name: info.name.clone(),
            class: info.class,
            status: kin.status,
            position: *pos,
            speed_knots: kin.speed_knots,
            current_target: plan.current_target,
            waypoints: plan.waypoints.clone(),
            trail: trail.positions.clone(),
            plastic_collected_kg: stats.plastic_collected_kg,
            battery_pct: stats.battery_pct,
        })
        .collect();
    vessels.sort_by_key(|v| v.id);
    vessels
}

/// Build HotspotView list, sorted by id.
pub fn build_hotspots(world: &World) -> Vec<HotspotView> {
    let mut hotspots: Vec<HotspotView> = world
        .query::<(&Hotspot, &GeoPos)>()
        .iter()
        .map(|(_, (h, pos))| HotspotView {
            id: h.id,
            position: *pos,
            concentration_ppkm2: h.concentration_ppkm2,
            severity: h.severity,
            area_km2: h.area_km2,
            detected_tick: h.detected_tick,
        })
        .collect();
    hotspots.sort_by_key(|h| h.id);
    hotspots
}

/// Build MissionView list from the engine's mission records.
fn build_missions(missions: &[Mission]) -> Vec<MissionView> {
    missions
        .iter()
        .map(|m| MissionView {
            id: m.id,
            name: m.name.clone(),
            status: m.status,
            vessel_ids: m.vessel_ids.clone(),
            hotspot_ids: m.hotspot_ids.clone(),
            plastic_target_kg: m.plastic_target_kg,
            plastic_collected_kg: m.plastic_collected_kg,
            efficiency_pct: m.efficiency_pct,
        })
        .collect()
}
