//! Motion integrator: advance each active, mission-assigned vessel one
//! tick along its plan and update arrival state.
//!
//! Replans through the navigation system when a plan is exhausted.
//! Within one tick vessels are independent of each other, so processing
//! order does not affect the result.

use hecs::World;

use gyre_core::components::{Hotspot, Kinematics, NavPlan, Trail, VesselInfo};
use gyre_core::constants::{
    ARRIVAL_RADIUS_M, KNOTS_TO_MPS, MIN_STEP_SPEED_MPS, ZERO_LEG_EPSILON_M,
};
use gyre_core::enums::VesselStatus;
use gyre_core::events::SimEvent;
use gyre_core::types::GeoPos;

use gyre_geo::{haversine_distance_m, initial_bearing_rad, step_from};

use crate::mission::Mission;
use crate::systems::{missions, navigation};

/// Run the motion integrator for all vessels.
pub fn run(world: &mut World, mission_list: &[Mission], dt_secs: f64, events: &mut Vec<SimEvent>) {
    let active = missions::active_vessel_ids(mission_list);

    // Snapshot the hotspot field up front; the vessel query below holds a
    // mutable borrow of the world.
    let hotspots: Vec<(u32, GeoPos)> = world
        .query::<(&Hotspot, &GeoPos)>()
        .iter()
        .map(|(_, (h, pos))| (h.id, *pos))
        .collect();

    for (_entity, (info, kin, pos, plan, trail)) in world
        .query_mut::<(
            &VesselInfo,
            &Kinematics,
            &mut GeoPos,
            &mut NavPlan,
            &mut Trail,
        )>()
    {
        if kin.status != VesselStatus::Active || !active.contains(&info.id) {
            continue;
        }

        if plan.is_exhausted() {
            *plan = navigation::plan_route(pos, &hotspots);
            events.push(SimEvent::RouteAssigned {
                vessel_id: info.id,
                waypoints: plan.waypoints.clone(),
            });
        }

        // The planner always emits at least one waypoint; an externally
        // malformed plan just leaves the vessel holding still this tick.
        let Some(idx) = plan.next_incomplete() else {
            trail.push(*pos);
            continue;
        };
        let target = plan.waypoints[idx].target;
        plan.current_target = plan.waypoints[idx].hotspot_id;

        let step_speed_mps = (kin.speed_knots * KNOTS_TO_MPS).max(MIN_STEP_SPEED_MPS);
        let step_m = step_speed_mps * dt_secs;

        let remaining_m = haversine_distance_m(pos, &target);
        if remaining_m < ZERO_LEG_EPSILON_M {
            // Already on target (degenerate hold waypoint included):
            // complete without moving, so the vessel stays put.
            plan.waypoints[idx].completed = true;
            plan.current_target = next_target(plan, idx);
        } else {
            let bearing = initial_bearing_rad(pos, &target);
            *pos = step_from(pos, bearing, step_m);

            if haversine_distance_m(pos, &target) < ARRIVAL_RADIUS_M {
                plan.waypoints[idx].completed = true;
                if let Some(hotspot_id) = plan.waypoints[idx].hotspot_id {
                    events.push(SimEvent::WaypointReached {
                        vessel_id: info.id,
                        hotspot_id: Some(hotspot_id),
                    });
                }
                plan.current_target = next_target(plan, idx);
            }
        }

        trail.push(*pos);
    }
}

/// Hotspot id of the first incomplete waypoint after `from`, if any.
fn next_target(plan: &NavPlan, from: usize) -> Option<u32> {
    plan.waypoints[from + 1..]
        .iter()
        .find(|w| !w.completed)
        .and_then(|w| w.hotspot_id)
}
