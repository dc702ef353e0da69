//! Weighted random walks over the location graph.

use epi_agent::Population;
use epi_core::error::check_probability;
use epi_core::{EpiResult, LocationId, SimRng};
use epi_graph::LocationGraph;

use crate::MobilityPolicy;

// ── RandomWalk ────────────────────────────────────────────────────────────────

/// Every living agent with at least one outgoing arc moves to a neighbour
/// drawn with probability proportional to the arc weight.  There is no option
/// to stay.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomWalk;

impl MobilityPolicy for RandomWalk {
    fn apply(&self, population: &mut Population, graph: &LocationGraph, rng: &mut SimRng) {
        for agent in population.iter_mut().filter(|a| !a.is_deceased()) {
            let here = agent.location();
            if let Some(i) = rng.choose_weighted(graph.neighbor_weights(here)) {
                agent.set_location(graph.neighbors(here)[i]);
            }
        }
    }

    fn name(&self) -> &'static str {
        "random-walk"
    }
}

// ── RandomWalkWithStay ────────────────────────────────────────────────────────

/// Like [`RandomWalk`], but the current location joins the draw with weight
/// `1 / out_degree`, so staying counts as one "average" neighbour.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomWalkWithStay;

impl MobilityPolicy for RandomWalkWithStay {
    fn apply(&self, population: &mut Population, graph: &LocationGraph, rng: &mut SimRng) {
        let mut candidates: Vec<LocationId> = Vec::new();
        let mut weights:    Vec<f64>        = Vec::new();

        for agent in population.iter_mut().filter(|a| !a.is_deceased()) {
            let here = agent.location();
            let neighbors = graph.neighbors(here);
            if neighbors.is_empty() {
                continue;
            }
            candidates.clear();
            candidates.extend_from_slice(neighbors);
            candidates.push(here);
            weights.clear();
            weights.extend_from_slice(graph.neighbor_weights(here));
            weights.push(1.0 / neighbors.len() as f64);

            if let Some(i) = rng.choose_weighted(&weights) {
                agent.set_location(candidates[i]);
            }
        }
    }

    fn name(&self) -> &'static str {
        "random-walk-with-stay"
    }
}

// ── WeightedStayWalk ──────────────────────────────────────────────────────────

/// Each living agent stays put with probability `stay_probability`; otherwise
/// it moves to a weighted random neighbour.  The current location is not part
/// of the weighted draw.
#[derive(Clone, Copy, Debug)]
pub struct WeightedStayWalk {
    stay_probability: f64,
}

impl WeightedStayWalk {
    pub const DEFAULT_STAY_PROBABILITY: f64 = 0.5;

    pub fn new(stay_probability: f64) -> EpiResult<Self> {
        let stay_probability = check_probability("stay_probability", stay_probability)?;
        Ok(Self { stay_probability })
    }

    pub fn stay_probability(&self) -> f64 {
        self.stay_probability
    }
}

impl Default for WeightedStayWalk {
    fn default() -> Self {
        Self { stay_probability: Self::DEFAULT_STAY_PROBABILITY }
    }
}

impl MobilityPolicy for WeightedStayWalk {
    fn apply(&self, population: &mut Population, graph: &LocationGraph, rng: &mut SimRng) {
        for agent in population.iter_mut().filter(|a| !a.is_deceased()) {
            let here = agent.location();
            if graph.out_degree(here) == 0 || rng.gen_bool(self.stay_probability) {
                continue;
            }
            if let Some(i) = rng.choose_weighted(graph.neighbor_weights(here)) {
                agent.set_location(graph.neighbors(here)[i]);
            }
        }
    }

    fn name(&self) -> &'static str {
        "weighted-stay-walk"
    }
}
