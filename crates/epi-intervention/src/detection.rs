//! Aggressive detection at one or more control locations.

use epi_agent::Population;
use epi_core::error::check_probability;
use epi_core::{EpiState, LocationId, SimRng};
use epi_graph::LocationGraph;
use rustc_hash::FxHashSet;

use crate::{InterventionError, InterventionPolicy, InterventionResult};

/// Quarantine detected cases found at control locations.
///
/// On every step, in population order:
///
/// - an agent at a control location that is Infectious (or Exposed, when
///   `detect_exposed` is on) is moved to `graph.removed()` with probability
///   `find_probability`;
/// - otherwise, an agent held at `graph.removed()` that is neither Exposed
///   nor Infectious is released to a uniformly random ordinary location.
///
/// The single-node and multi-node forms differ only in how many control
/// locations they carry.
#[derive(Clone, Debug)]
pub struct AggressiveDetection {
    controls:         Vec<LocationId>,
    control_set:      FxHashSet<LocationId>,
    find_probability: f64,
    detect_exposed:   bool,
}

impl AggressiveDetection {
    pub const DEFAULT_FIND_PROBABILITY: f64 = 0.95;

    /// Detection at a single control location.
    pub fn single(control: LocationId) -> Self {
        Self::from_controls(vec![control])
    }

    /// Detection at every location in `controls`.  Duplicates are kept in
    /// the reported list but only checked once.
    pub fn multi(controls: impl IntoIterator<Item = LocationId>) -> InterventionResult<Self> {
        let controls: Vec<LocationId> = controls.into_iter().collect();
        if controls.is_empty() {
            return Err(InterventionError::NoControlLocations);
        }
        Ok(Self::from_controls(controls))
    }

    fn from_controls(controls: Vec<LocationId>) -> Self {
        let control_set = controls.iter().copied().collect();
        Self {
            controls,
            control_set,
            find_probability: Self::DEFAULT_FIND_PROBABILITY,
            detect_exposed:   false,
        }
    }

    pub fn with_find_probability(mut self, find_probability: f64) -> InterventionResult<Self> {
        self.find_probability = check_probability("find_probability", find_probability)?;
        Ok(self)
    }

    pub fn with_detect_exposed(mut self, detect_exposed: bool) -> Self {
        self.detect_exposed = detect_exposed;
        self
    }

    pub fn find_probability(&self) -> f64 {
        self.find_probability
    }

    pub fn detects_exposed(&self) -> bool {
        self.detect_exposed
    }

    pub fn is_control(&self, location: LocationId) -> bool {
        self.control_set.contains(&location)
    }

    fn detectable(&self, state: EpiState) -> bool {
        state == EpiState::Infectious || (self.detect_exposed && state == EpiState::Exposed)
    }
}

impl InterventionPolicy for AggressiveDetection {
    fn apply(&self, graph: &LocationGraph, population: &mut Population, rng: &mut SimRng) {
        let removed = graph.removed();
        let n = graph.location_count();

        for agent in population.iter_mut() {
            let here = agent.location();
            if self.is_control(here)
                && self.detectable(agent.state())
                && rng.gen_bool(self.find_probability)
            {
                agent.set_location(removed);
            } else if here == removed && !agent.state().is_active_infection() && n > 0 {
                agent.set_location(LocationId(rng.gen_range(0..n as u32)));
            }
        }
    }

    fn control_locations(&self) -> &[LocationId] {
        &self.controls
    }

    fn name(&self) -> &'static str {
        if self.controls.len() == 1 { "single-node-detection" } else { "multi-node-detection" }
    }
}
