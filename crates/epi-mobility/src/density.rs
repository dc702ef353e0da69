//! Occupancy-driven walks.
//!
//! Both policies keep a per-location tally that is updated as each agent is
//! reassigned, so agents later in population order see where earlier agents
//! went during the same step.

use epi_agent::Population;
use epi_core::error::check_probability;
use epi_core::{EpiResult, LocationId, SimRng};
use epi_graph::LocationGraph;

use crate::MobilityPolicy;

/// Move `counts` for an agent going `from -> to`.
#[inline]
fn relocate(counts: &mut [usize], from: LocationId, to: LocationId) {
    counts[to.index()] += 1;
    counts[from.index()] -= 1;
}

// ── NormalizedDensityWalk ─────────────────────────────────────────────────────

/// Load balancing: each living agent moves to whichever of its neighbours or
/// its current location is least occupied.  Ties go to the first candidate in
/// neighbour order, with the current location considered last.  Agents with
/// no outgoing arcs stay.
#[derive(Clone, Copy, Debug, Default)]
pub struct NormalizedDensityWalk;

impl MobilityPolicy for NormalizedDensityWalk {
    fn apply(&self, population: &mut Population, graph: &LocationGraph, _rng: &mut SimRng) {
        // Ordinary locations only; the sentinel has no arcs so its agents never move.
        let mut counts = population.location_counts(graph.location_count());

        for agent in population.iter_mut().filter(|a| !a.is_deceased()) {
            let here = agent.location();
            let neighbors = graph.neighbors(here);
            if neighbors.is_empty() {
                continue;
            }
            let target = neighbors
                .iter()
                .copied()
                .chain(std::iter::once(here))
                .fold(None::<(LocationId, usize)>, |best, loc| match best {
                    Some((_, n)) if counts[loc.index()] >= n => best,
                    _ => Some((loc, counts[loc.index()])),
                })
                .map_or(here, |(loc, _)| loc);

            relocate(&mut counts, here, target);
            agent.set_location(target);
        }
    }

    fn name(&self) -> &'static str {
        "normalized-density"
    }
}

// ── SocialDistanceWalk ────────────────────────────────────────────────────────

/// With probability `obey_rate` a living agent moves to the **most** occupied
/// of its neighbours and its current location (first candidate wins ties,
/// current location considered last).  Otherwise it takes a weighted random
/// step among its neighbours plus itself, staying weighted `1 / out_degree`.
///
/// Obeying agents move toward crowds, not away from them.
#[derive(Clone, Copy, Debug)]
pub struct SocialDistanceWalk {
    obey_rate: f64,
}

impl SocialDistanceWalk {
    pub fn new(obey_rate: f64) -> EpiResult<Self> {
        let obey_rate = check_probability("obey_rate", obey_rate)?;
        Ok(Self { obey_rate })
    }

    pub fn obey_rate(&self) -> f64 {
        self.obey_rate
    }
}

impl MobilityPolicy for SocialDistanceWalk {
    fn apply(&self, population: &mut Population, graph: &LocationGraph, rng: &mut SimRng) {
        // Sentinel included: obeying agents held there compare against its occupancy.
        let mut counts = population.location_counts(graph.location_count() + 1);
        let mut candidates: Vec<LocationId> = Vec::new();
        let mut weights:    Vec<f64>        = Vec::new();

        for agent in population.iter_mut().filter(|a| !a.is_deceased()) {
            let here = agent.location();
            let neighbors = graph.neighbors(here);

            let target = if rng.gen_bool(self.obey_rate) {
                let mut best = here;
                let mut best_count = 0;
                for &loc in neighbors.iter().chain(std::iter::once(&here)) {
                    if counts[loc.index()] > best_count {
                        best = loc;
                        best_count = counts[loc.index()];
                    }
                }
                best
            } else {
                if neighbors.is_empty() {
                    continue;
                }
                candidates.clear();
                candidates.extend_from_slice(neighbors);
                candidates.push(here);
                weights.clear();
                weights.extend_from_slice(graph.neighbor_weights(here));
                weights.push(1.0 / neighbors.len() as f64);
                match rng.choose_weighted(&weights) {
                    Some(i) => candidates[i],
                    None    => here,
                }
            };

            relocate(&mut counts, here, target);
            agent.set_location(target);
        }
    }

    fn name(&self) -> &'static str {
        "social-distance"
    }
}
