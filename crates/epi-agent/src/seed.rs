//! Population factories.
//!
//! [`Population::random`] is the canonical starting point for experiments:
//! every agent gets a uniformly random location, then is independently made
//! Infectious with probability `infect_portion` and Susceptible otherwise.
//! The number of initial infections is therefore Binomial, not fixed.

use epi_core::error::check_probability;
use epi_core::{EpiState, LocationId, SimRng};
use epi_graph::LocationGraph;

use crate::{Agent, AgentError, AgentResult, Population};

/// Default initial infection probability used by the experiment drivers.
pub const DEFAULT_INFECT_PORTION: f64 = 0.02;

impl Agent {
    /// An agent with a uniformly random state, a uniformly random ordinary
    /// location in `0..location_count`, a zero timer, and no mask.
    ///
    /// `location_count` must be non-zero.
    pub fn random(location_count: usize, rng: &mut SimRng) -> Self {
        let state = EpiState::ALL[rng.gen_range(0..EpiState::COUNT)];
        let location = LocationId(rng.gen_range(0..location_count) as u32);
        Agent::new(state, location)
    }
}

fn check_placeable(count: usize, graph: &LocationGraph) -> AgentResult<()> {
    if count > 0 && graph.is_empty() {
        return Err(AgentError::EmptyTopology { agents: count });
    }
    Ok(())
}

impl Population {
    /// `count` agents at uniformly random locations of `graph`, each
    /// Infectious with probability `infect_portion`, else Susceptible.
    pub fn random(
        count:          usize,
        graph:          &LocationGraph,
        infect_portion: f64,
        rng:            &mut SimRng,
    ) -> AgentResult<Self> {
        check_probability("infect_portion", infect_portion)?;
        check_placeable(count, graph)?;

        let n = graph.location_count();
        Ok((0..count)
            .map(|_| {
                let mut agent = Agent::random(n, rng);
                let seeded = if rng.gen_bool(infect_portion) {
                    EpiState::Infectious
                } else {
                    EpiState::Susceptible
                };
                agent.set_state(seeded);
                agent
            })
            .collect())
    }

    /// `count` agents with uniformly random states and locations and no
    /// Bernoulli reseeding.  Used by sensitivity studies that want every
    /// compartment populated from step 0.
    pub fn random_states(count: usize, graph: &LocationGraph, rng: &mut SimRng) -> AgentResult<Self> {
        check_placeable(count, graph)?;
        let n = graph.location_count();
        Ok((0..count).map(|_| Agent::random(n, rng)).collect())
    }
}
