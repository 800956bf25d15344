//! Collection accumulators: plastic recovered and battery drain.
//!
//! Cosmetic display values — bounded random increments through the
//! engine's seeded RNG, so runs with the same seed reproduce exactly.
//! Plastic never decreases; battery never increases and floors at 0.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gyre_core::components::{CollectionStats, Kinematics, NavPlan, VesselInfo};
use gyre_core::constants::{
    ARRIVAL_RADIUS_M, BATTERY_DRAIN_PCT, PLASTIC_GAIN_ON_SITE_KG, PLASTIC_GAIN_TRANSIT_KG,
};
use gyre_core::enums::VesselStatus;
use gyre_core::events::SimEvent;
use gyre_core::types::GeoPos;

use gyre_geo::haversine_distance_m;

use crate::mission::Mission;
use crate::systems::missions;

/// Update accumulators for all active, mission-assigned vessels.
/// Returns per-vessel plastic gains for mission accounting.
pub fn run(
    world: &mut World,
    mission_list: &[Mission],
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
) -> Vec<(u32, f64)> {
    let active = missions::active_vessel_ids(mission_list);
    let mut gains = Vec::new();

    for (_entity, (info, kin, pos, plan, stats)) in world.query_mut::<(
        &VesselInfo,
        &Kinematics,
        &GeoPos,
        &NavPlan,
        &mut CollectionStats,
    )>() {
        if kin.status != VesselStatus::Active || !active.contains(&info.id) {
            continue;
        }

        // Collection rate jumps while sitting inside a hotspot zone.
        let on_site = plan
            .waypoints
            .iter()
            .filter(|w| w.hotspot_id.is_some())
            .any(|w| haversine_distance_m(pos, &w.target) < ARRIVAL_RADIUS_M);

        let (lo, hi) = if on_site {
            PLASTIC_GAIN_ON_SITE_KG
        } else {
            PLASTIC_GAIN_TRANSIT_KG
        };
        let gained_kg = rng.gen_range(lo..hi);
        stats.plastic_collected_kg += gained_kg;
        gains.push((info.id, gained_kg));

        let drain = rng.gen_range(BATTERY_DRAIN_PCT.0..BATTERY_DRAIN_PCT.1);
        let before = stats.battery_pct;
        stats.battery_pct = (stats.battery_pct - drain).max(0.0);
        if before > 0.0 && stats.battery_pct == 0.0 {
            events.push(SimEvent::BatteryDepleted { vessel_id: info.id });
        }
    }

    gains
}
