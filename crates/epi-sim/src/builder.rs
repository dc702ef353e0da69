//! Fluent builder for constructing a [`Simulator`].

use std::sync::Arc;

use epi_agent::Population;
use epi_core::{AgentId, SeirdParams, SimConfig, SimRng};
use epi_graph::LocationGraph;
use epi_intervention::InterventionPolicy;
use epi_mobility::MobilityPolicy;

use crate::{SimError, SimResult, Simulator};

/// Upper bound on history capacity reserved up front; longer runs grow it.
const MAX_PREALLOCATED_SNAPSHOTS: usize = 4096;

/// Fluent builder for [`Simulator`].
///
/// # Required inputs
///
/// - [`Population`] — e.g. from [`Population::random`]
/// - [`LocationGraph`] — the topology the population lives on
/// - `M: MobilityPolicy` — how agents move each step
/// - `P: InterventionPolicy` — detection / quarantine rule
/// - `horizon` — last step to simulate (at least 1)
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.params(p)`    | `SeirdParams::default()`         |
/// | `.seed(s)`      | `0`                              |
/// | `.config(c)`    | replaces both horizon and seed   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(population, graph, RandomWalk, NoIntervention, 100)
///     .seed(42)
///     .params(SeirdParams { beta: 0.02, ..SeirdParams::default() })
///     .build()?;
/// sim.run();
/// ```
pub struct SimBuilder {
    population:   Population,
    graph:        LocationGraph,
    mobility:     Arc<dyn MobilityPolicy>,
    intervention: Arc<dyn InterventionPolicy>,
    config:       SimConfig,
    params:       SeirdParams,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new<M: MobilityPolicy, P: InterventionPolicy>(
        population:   Population,
        graph:        LocationGraph,
        mobility:     M,
        intervention: P,
        horizon:      u64,
    ) -> Self {
        Self {
            population,
            graph,
            mobility:     Arc::new(mobility),
            intervention: Arc::new(intervention),
            config:       SimConfig::new(horizon, 0),
            params:       SeirdParams::default(),
        }
    }

    /// Override the transition-model constants.
    pub fn params(mut self, params: SeirdParams) -> Self {
        self.params = params;
        self
    }

    /// Seed the simulator-owned RNG.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Replace horizon and seed at once.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate inputs and return a simulator at step 0 with an empty
    /// history.
    pub fn build(self) -> SimResult<Simulator> {
        if self.config.horizon == 0 {
            return Err(SimError::ZeroHorizon);
        }
        check_placement(&self.population, &self.graph)?;
        check_controls(self.intervention.as_ref(), &self.graph)?;

        let rng = SimRng::new(self.config.seed);
        let history = Vec::with_capacity(self.config.snapshot_count().min(MAX_PREALLOCATED_SNAPSHOTS));

        Ok(Simulator {
            config:       self.config,
            params:       self.params,
            population:   self.population,
            graph:        self.graph,
            mobility:     self.mobility,
            intervention: self.intervention,
            rng,
            step:         0,
            history,
            faded_at:     None,
            copies:       0,
        })
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

/// Every agent must sit at an ordinary location or the removed sentinel.
pub(crate) fn check_placement(population: &Population, graph: &LocationGraph) -> SimResult<()> {
    if graph.is_empty() && !population.is_empty() {
        return Err(SimError::EmptyTopology { agents: population.len() });
    }
    let removed = graph.removed();
    match population.iter().position(|a| a.location() > removed) {
        Some(i) => Err(SimError::AgentOutOfRange {
            agent:    AgentId(i as u32),
            location: population.agents()[i].location(),
            removed,
        }),
        None => Ok(()),
    }
}

/// Every control location of `policy` must be an ordinary location of `graph`.
pub(crate) fn check_controls(policy: &dyn InterventionPolicy, graph: &LocationGraph) -> SimResult<()> {
    match policy.control_locations().iter().find(|&&loc| !graph.is_ordinary(loc)) {
        Some(&location) => Err(SimError::ControlOutOfRange {
            location,
            count: graph.location_count(),
        }),
        None => Ok(()),
    }
}
