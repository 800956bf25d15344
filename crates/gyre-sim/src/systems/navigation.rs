//! Route planning: pick the nearest hotspots as a fresh waypoint plan.
//!
//! Pure functions over plain data — no ECS dependency. Ranking uses raw
//! planar lat/lng distance; arrival and bearing math elsewhere use proper
//! spherical formulas.

use gyre_core::components::{NavPlan, Waypoint};
use gyre_core::constants::MAX_PLAN_WAYPOINTS;
use gyre_core::types::GeoPos;

/// Build a new plan for a vessel at `origin` from the known hotspot field.
///
/// Selects the `MAX_PLAN_WAYPOINTS` nearest hotspots in ascending planar
/// distance. With no hotspots available, emits a single degenerate
/// waypoint at the vessel's own position so the motion integrator always
/// has a defined target.
///
/// Deterministic: same origin and hotspot set, same plan. Ties keep the
/// hotspot field's original order.
pub fn plan_route(origin: &GeoPos, hotspots: &[(u32, GeoPos)]) -> NavPlan {
    if hotspots.is_empty() {
        return NavPlan {
            waypoints: vec![Waypoint {
                target: *origin,
                hotspot_id: None,
                completed: false,
            }],
            current_target: None,
        };
    }

    let mut ranked: Vec<(f64, u32, GeoPos)> = hotspots
        .iter()
        .map(|(id, pos)| (origin.planar_distance_deg(pos), *id, *pos))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.truncate(MAX_PLAN_WAYPOINTS);

    let waypoints = ranked
        .iter()
        .map(|(_, id, pos)| Waypoint {
            target: *pos,
            hotspot_id: Some(*id),
            completed: false,
        })
        .collect();

    NavPlan {
        current_target: ranked.first().map(|(_, id, _)| *id),
        waypoints,
    }
}
