//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, LocationId};

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(LocationId(100) > LocationId(99));
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }
}

#[cfg(test)]
mod state {
    use crate::{EpiState, StateCounts};

    #[test]
    fn snapshot_indices_are_fixed() {
        assert_eq!(EpiState::Susceptible.index(), 0);
        assert_eq!(EpiState::Exposed.index(), 1);
        assert_eq!(EpiState::Infectious.index(), 2);
        assert_eq!(EpiState::Recovered.index(), 3);
        assert_eq!(EpiState::Deceased.index(), 4);
        for (i, s) in EpiState::ALL.iter().enumerate() {
            assert_eq!(EpiState::from_index(i), Some(*s));
        }
        assert_eq!(EpiState::from_index(5), None);
    }

    #[test]
    fn only_deceased_is_terminal() {
        let terminal: Vec<_> = EpiState::ALL.into_iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![EpiState::Deceased]);
    }

    #[test]
    fn tally_and_total() {
        let counts = StateCounts::tally([
            EpiState::Susceptible,
            EpiState::Susceptible,
            EpiState::Infectious,
            EpiState::Deceased,
        ]);
        assert_eq!(counts.as_array(), &[2, 0, 1, 0, 1]);
        assert_eq!(counts[EpiState::Susceptible], 2);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.to_string(), "S=2 E=0 I=1 R=0 D=1");
    }
}

#[cfg(test)]
mod params {
    use crate::SeirdParams;

    #[test]
    fn default_calibration() {
        let p = SeirdParams::default();
        assert_eq!(p.beta, 0.0145);
        assert!((p.incubation_steps - 2.0999).abs() < 1e-3);
        assert!((p.infectious_steps - 4.2553).abs() < 1e-3);
        assert_eq!(p.combined_mask_reduction, 0.75);
    }

    #[test]
    fn mask_discount_without_masks_is_one() {
        let p = SeirdParams::default();
        assert_eq!(p.mask_discount(10, 0, 3, 0), 1.0);
        assert_eq!(p.mask_discount(0, 0, 0, 0), 1.0);
    }

    #[test]
    fn mask_discount_all_masked() {
        let p = SeirdParams::default();
        // (1 - 0.1) * (1 - 0.5)
        assert!((p.mask_discount(4, 4, 2, 2) - 0.45).abs() < 1e-12);
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn snapshot_count_includes_step_zero() {
        assert_eq!(SimConfig::new(200, 1).snapshot_count(), 201);
    }

    #[test]
    fn snapshot_count_saturates_at_max_horizon() {
        assert_eq!(SimConfig::new(u64::MAX, 0).snapshot_count(), usize::MAX);
    }
}

#[cfg(test)]
mod error {
    use crate::error::check_probability;
    use crate::EpiError;

    #[test]
    fn probability_bounds() {
        assert_eq!(check_probability("p", 0.0), Ok(0.0));
        assert_eq!(check_probability("p", 1.0), Ok(1.0));
        assert!(matches!(
            check_probability("p", 1.5),
            Err(EpiError::InvalidProbability { what: "p", .. })
        ));
        assert!(check_probability("p", f64::NAN).is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.gen_range(0..u64::MAX);
        let b: u64 = c1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "child streams should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_weighted_respects_zero_weights() {
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            assert_eq!(rng.choose_weighted(&[0.0, 3.0, 0.0]), Some(1));
        }
        assert_eq!(rng.choose_weighted(&[]), None);
        assert_eq!(rng.choose_weighted(&[0.0, 0.0]), None);
    }
}
