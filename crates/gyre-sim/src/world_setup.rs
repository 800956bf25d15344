//! Entity spawn factories and the built-in seed scenario.
//!
//! The seed data loader analog: supplies the initial vessel, hotspot, and
//! mission lists at startup. The engine treats this as an opaque
//! initializer and does not validate beyond type shape.

use hecs::World;

use gyre_core::components::*;
use gyre_core::enums::*;
use gyre_core::types::GeoPos;

use crate::mission::Mission;

/// Seed the default North Pacific patrol scenario: four vessels, six
/// hotspots across the gyre, and three missions in mixed states.
/// Returns the mission list for the engine to own.
pub fn seed_pacific_patrol(world: &mut World) -> Vec<Mission> {
    spawn_vessel(
        world,
        1,
        "Albatross",
        VesselClass::Drone,
        GeoPos::new(34.2, -141.5),
        8.0,
        VesselStatus::Active,
    );
    spawn_vessel(
        world,
        2,
        "Pacific Gleaner",
        VesselClass::Ship,
        GeoPos::new(36.8, -142.1),
        12.5,
        VesselStatus::Active,
    );
    spawn_vessel(
        world,
        3,
        "Manta",
        VesselClass::Autonomous,
        GeoPos::new(32.5, -145.8),
        6.5,
        VesselStatus::Active,
    );
    spawn_vessel(
        world,
        4,
        "Petrel",
        VesselClass::Drone,
        GeoPos::new(38.1, -139.4),
        9.0,
        VesselStatus::Maintenance,
    );

    spawn_hotspot(world, 101, GeoPos::new(35.4, -142.9), 1450.0, 58.0);
    spawn_hotspot(world, 102, GeoPos::new(33.9, -144.2), 820.0, 34.0);
    spawn_hotspot(world, 103, GeoPos::new(37.6, -140.8), 640.0, 22.0);
    spawn_hotspot(world, 104, GeoPos::new(31.8, -146.5), 310.0, 47.0);
    spawn_hotspot(world, 105, GeoPos::new(36.1, -138.7), 145.0, 12.0);
    spawn_hotspot(world, 106, GeoPos::new(34.8, -147.3), 990.0, 41.0);

    vec![
        {
            let mut m = Mission::new(1, "Gyre Sweep Alpha", MissionStatus::Active);
            m.vessel_ids = vec![1, 2];
            m.hotspot_ids = vec![101, 102, 103];
            m.plastic_target_kg = 5_000.0;
            m
        },
        {
            let mut m = Mission::new(2, "Perimeter Survey", MissionStatus::Planning);
            m.vessel_ids = vec![3];
            m.hotspot_ids = vec![104, 106];
            m.plastic_target_kg = 2_500.0;
            m
        },
        {
            let mut m = Mission::new(3, "Coastal Relay", MissionStatus::Paused);
            m.vessel_ids = vec![4];
            m.hotspot_ids = vec![105];
            m.plastic_target_kg = 1_200.0;
            m
        },
    ]
}

/// Spawn a single fleet vessel with an empty plan and a one-entry trail
/// at its start position.
pub fn spawn_vessel(
    world: &mut World,
    id: u32,
    name: &str,
    class: VesselClass,
    position: GeoPos,
    speed_knots: f64,
    status: VesselStatus,
) -> hecs::Entity {
    let mut trail = Trail::default();
    trail.push(position);

    world.spawn((
        Vessel,
        VesselInfo {
            id,
            name: name.to_string(),
            class,
        },
        Kinematics {
            speed_knots,
            status,
        },
        position,
        NavPlan::default(),
        trail,
        CollectionStats::default(),
    ))
}

/// Spawn a hotspot; severity is derived from the concentration.
pub fn spawn_hotspot(
    world: &mut World,
    id: u32,
    position: GeoPos,
    concentration_ppkm2: f64,
    area_km2: f64,
) -> hecs::Entity {
    world.spawn((
        Hotspot {
            id,
            concentration_ppkm2,
            severity: Severity::from_concentration(concentration_ppkm2),
            area_km2,
            detected_tick: 0,
        },
        position,
    ))
}
