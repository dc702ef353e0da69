//! The do-nothing intervention.

use epi_agent::Population;
use epi_core::SimRng;
use epi_graph::LocationGraph;

use crate::InterventionPolicy;

/// An [`InterventionPolicy`] that leaves the population untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIntervention;

impl InterventionPolicy for NoIntervention {
    fn apply(&self, _graph: &LocationGraph, _population: &mut Population, _rng: &mut SimRng) {}

    fn name(&self) -> &'static str {
        "none"
    }
}
