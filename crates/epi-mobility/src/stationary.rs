//! A no-op mobility policy — agents never move.

use epi_agent::Population;
use epi_core::SimRng;
use epi_graph::LocationGraph;

use crate::MobilityPolicy;

/// A [`MobilityPolicy`] that leaves every agent in place.
///
/// Useful for single-location models and as a placeholder in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stationary;

impl MobilityPolicy for Stationary {
    fn apply(&self, _population: &mut Population, _graph: &LocationGraph, _rng: &mut SimRng) {}

    fn name(&self) -> &'static str {
        "stationary"
    }
}
