//! Unit tests for epi-intervention.

use epi_agent::{Agent, Population};
use epi_core::{EpiError, EpiState, LocationId, SimRng};
use epi_graph::LocationGraph;

use crate::{AggressiveDetection, InterventionError, InterventionPolicy, NoIntervention};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(state: EpiState, loc: u32) -> Agent {
    Agent::new(state, LocationId(loc))
}

fn certain(detection: AggressiveDetection) -> AggressiveDetection {
    detection.with_find_probability(1.0).unwrap()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn defaults() {
        let d = AggressiveDetection::single(LocationId(2));
        assert_eq!(d.find_probability(), 0.95);
        assert!(!d.detects_exposed());
        assert_eq!(d.control_locations(), &[LocationId(2)]);
        assert_eq!(d.name(), "single-node-detection");
    }

    #[test]
    fn multi_requires_controls() {
        assert_eq!(
            AggressiveDetection::multi(Vec::new()).unwrap_err(),
            InterventionError::NoControlLocations
        );
        let d = AggressiveDetection::multi([LocationId(0), LocationId(3)]).unwrap();
        assert!(d.is_control(LocationId(3)));
        assert!(!d.is_control(LocationId(1)));
        assert_eq!(d.name(), "multi-node-detection");
    }

    #[test]
    fn rejects_bad_find_probability() {
        let err = AggressiveDetection::single(LocationId(0))
            .with_find_probability(1.5)
            .unwrap_err();
        assert!(matches!(
            err,
            InterventionError::Core(EpiError::InvalidProbability { what: "find_probability", .. })
        ));
    }
}

// ── Detection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod detection_tests {
    use super::*;

    #[test]
    fn certain_detection_removes_every_infectious_at_control() {
        let g = LocationGraph::fully_connected(3);
        let mut p = Population::new(vec![
            at(EpiState::Infectious, 0),
            at(EpiState::Infectious, 0),
            at(EpiState::Infectious, 1),
            at(EpiState::Exposed, 0),
            at(EpiState::Susceptible, 0),
        ]);
        certain(AggressiveDetection::single(LocationId(0))).apply(&g, &mut p, &mut SimRng::new(0));

        let locs: Vec<_> = p.iter().map(|a| a.location()).collect();
        assert_eq!(
            locs,
            vec![g.removed(), g.removed(), LocationId(1), LocationId(0), LocationId(0)]
        );
    }

    #[test]
    fn exposed_detected_when_enabled() {
        let g = LocationGraph::fully_connected(2);
        let mut p = Population::new(vec![at(EpiState::Exposed, 1), at(EpiState::Recovered, 1)]);
        certain(AggressiveDetection::single(LocationId(1)))
            .with_detect_exposed(true)
            .apply(&g, &mut p, &mut SimRng::new(0));
        assert_eq!(p.agents()[0].location(), g.removed());
        assert_eq!(p.agents()[1].location(), LocationId(1));
    }

    #[test]
    fn zero_find_probability_removes_nobody() {
        let g = LocationGraph::fully_connected(2);
        let mut p = Population::new(vec![at(EpiState::Infectious, 0); 100]);
        AggressiveDetection::single(LocationId(0))
            .with_find_probability(0.0)
            .unwrap()
            .apply(&g, &mut p, &mut SimRng::new(0));
        assert_eq!(p.count_at(LocationId(0)), 100);
    }

    #[test]
    fn state_timer_and_mask_untouched() {
        let g = LocationGraph::fully_connected(2);
        let mut p = Population::new(vec![
            Agent::with_timer(EpiState::Infectious, LocationId(0), 3, true),
            Agent::with_timer(EpiState::Recovered, g.removed(), 7, false),
        ]);
        certain(AggressiveDetection::single(LocationId(0))).apply(&g, &mut p, &mut SimRng::new(1));
        let a = p.agents();
        assert_eq!((a[0].state(), a[0].timer(), a[0].has_mask()), (EpiState::Infectious, 3, true));
        assert_eq!((a[1].state(), a[1].timer(), a[1].has_mask()), (EpiState::Recovered, 7, false));
    }
}

// ── Release ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod release_tests {
    use super::*;

    #[test]
    fn active_infections_stay_removed() {
        let g = LocationGraph::fully_connected(4);
        let removed = g.removed().0;
        let mut p = Population::new(vec![
            at(EpiState::Exposed, removed),
            at(EpiState::Infectious, removed),
        ]);
        let policy = AggressiveDetection::single(LocationId(0));
        for _ in 0..20 {
            policy.apply(&g, &mut p, &mut SimRng::new(5));
        }
        assert!(p.iter().all(|a| a.location() == g.removed()));
    }

    #[test]
    fn resolved_agents_return_to_ordinary_locations() {
        let g = LocationGraph::fully_connected(4);
        let removed = g.removed().0;
        let mut p = Population::new(vec![
            at(EpiState::Recovered, removed),
            at(EpiState::Deceased, removed),
            at(EpiState::Susceptible, removed),
        ]);
        AggressiveDetection::single(LocationId(0)).apply(&g, &mut p, &mut SimRng::new(6));
        assert!(p.iter().all(|a| g.is_ordinary(a.location())));
    }

    #[test]
    fn no_intervention_is_identity() {
        let g = LocationGraph::fully_connected(3);
        let mut rng = SimRng::new(2);
        let mut p = Population::random_states(50, &g, &mut rng).unwrap();
        let before = p.clone();
        NoIntervention.apply(&g, &mut p, &mut rng);
        assert_eq!(p, before);
    }
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod contract_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn only_sentinel_round_trips(
            seed in any::<u64>(),
            n in 1usize..6,
            agents in 0usize..80,
            find in 0.0f64..=1.0,
            exposed in any::<bool>(),
        ) {
            let mut rng = SimRng::new(seed);
            let g = LocationGraph::fully_connected(n);
            let mut p = Population::random_states(agents, &g, &mut rng).unwrap();
            for a in p.iter_mut().step_by(3) {
                a.set_location(g.removed());
            }
            let policy = AggressiveDetection::single(LocationId(0))
                .with_find_probability(find)
                .unwrap()
                .with_detect_exposed(exposed);

            let before = p.clone();
            policy.apply(&g, &mut p, &mut rng);

            prop_assert_eq!(p.state_counts(), before.state_counts());
            for (old, new) in before.iter().zip(p.iter()) {
                prop_assert_eq!(old.state(), new.state());
                prop_assert_eq!(old.timer(), new.timer());
                if old.location() != new.location() {
                    // Either quarantined from the control or released from the sentinel.
                    let removed_now = new.location() == g.removed()
                        && old.location() == LocationId(0);
                    let released = old.location() == g.removed()
                        && !old.state().is_active_infection();
                    prop_assert!(removed_now || released);
                }
                if old.location() == g.removed() && old.state().is_active_infection() {
                    prop_assert_eq!(new.location(), g.removed());
                }
            }
        }
    }
}
