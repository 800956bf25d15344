//! Mission membership filter and per-tick accounting.

use std::collections::HashSet;

use gyre_core::enums::MissionStatus;
use gyre_core::events::SimEvent;

use crate::mission::Mission;

/// Ids of vessels referenced by at least one Active mission. Pure
/// function of the mission list; vessels outside this set are skipped
/// entirely by the motion integrator and the collectors.
pub fn active_vessel_ids(missions: &[Mission]) -> HashSet<u32> {
    missions
        .iter()
        .filter(|m| m.status == MissionStatus::Active)
        .flat_map(|m| m.vessel_ids.iter().copied())
        .collect()
}

/// Credit per-vessel collection gains to every Active mission referencing
/// the vessel, refresh efficiency, and complete missions that hit their
/// target.
pub fn apply_collection(
    missions: &mut [Mission],
    gains: &[(u32, f64)],
    events: &mut Vec<SimEvent>,
) {
    for mission in missions.iter_mut() {
        if mission.status != MissionStatus::Active {
            continue;
        }

        let credited: f64 = gains
            .iter()
            .filter(|(vessel_id, _)| mission.vessel_ids.contains(vessel_id))
            .map(|(_, kg)| kg)
            .sum();
        mission.plastic_collected_kg += credited;

        mission.efficiency_pct = if mission.plastic_target_kg > 0.0 {
            (100.0 * mission.plastic_collected_kg / mission.plastic_target_kg).min(100.0)
        } else {
            0.0
        };

        if mission.plastic_target_kg > 0.0
            && mission.plastic_collected_kg >= mission.plastic_target_kg
        {
            mission.status = MissionStatus::Completed;
            events.push(SimEvent::MissionCompleted {
                mission_id: mission.id,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission(id: u32, status: MissionStatus, vessels: &[u32]) -> Mission {
        let mut m = Mission::new(id, format!("M{id}"), status);
        m.vessel_ids = vessels.to_vec();
        m.plastic_target_kg = 100.0;
        m
    }

    #[test]
    fn test_active_vessel_ids_filters_by_status() {
        let missions = vec![
            mission(1, MissionStatus::Active, &[1, 2]),
            mission(2, MissionStatus::Planning, &[3]),
            mission(3, MissionStatus::Paused, &[4]),
            mission(4, MissionStatus::Completed, &[5]),
            mission(5, MissionStatus::Active, &[2, 6]),
        ];
        let active = active_vessel_ids(&missions);
        assert_eq!(active, HashSet::from([1, 2, 6]));
    }

    #[test]
    fn test_apply_collection_credits_and_completes() {
        let mut missions = vec![mission(1, MissionStatus::Active, &[1, 2])];
        let mut events = Vec::new();

        apply_collection(&mut missions, &[(1, 30.0), (2, 25.0), (9, 99.0)], &mut events);
        assert!((missions[0].plastic_collected_kg - 55.0).abs() < 1e-9);
        assert!((missions[0].efficiency_pct - 55.0).abs() < 1e-9);
        assert!(events.is_empty());

        apply_collection(&mut missions, &[(1, 60.0)], &mut events);
        assert_eq!(missions[0].status, MissionStatus::Completed);
        assert!((missions[0].efficiency_pct - 100.0).abs() < 1e-9);
        assert!(matches!(
            events[0],
            SimEvent::MissionCompleted { mission_id: 1 }
        ));

        // Completed missions are no longer credited.
        apply_collection(&mut missions, &[(1, 10.0)], &mut events);
        assert!((missions[0].plastic_collected_kg - 115.0).abs() < 1e-9);
    }
}
