//! The `InterventionPolicy` trait.

use epi_agent::Population;
use epi_core::{LocationId, SimRng};
use epi_graph::LocationGraph;

/// Per-step detection / quarantine rule.
///
/// Policies are stateless with respect to a run: all mutable state lives in
/// the `Population`, and all randomness comes from the simulator's `SimRng`.
/// That is what lets a single policy instance be shared (`Arc`) between a
/// simulator and its copies.
///
/// # Example
///
/// ```rust
/// use epi_agent::Population;
/// use epi_core::{EpiState, SimRng};
/// use epi_graph::LocationGraph;
/// use epi_intervention::InterventionPolicy;
///
/// /// Quarantine every Infectious agent, wherever it is.
/// struct LockdownAll;
///
/// impl InterventionPolicy for LockdownAll {
///     fn apply(&self, graph: &LocationGraph, population: &mut Population, _rng: &mut SimRng) {
///         for agent in population.iter_mut() {
///             if agent.state() == EpiState::Infectious {
///                 agent.set_location(graph.removed());
///             }
///         }
///     }
/// }
/// ```
pub trait InterventionPolicy: Send + Sync + 'static {
    /// Move agents to or from `graph.removed()`.
    fn apply(&self, graph: &LocationGraph, population: &mut Population, rng: &mut SimRng);

    /// Locations this policy watches.  The simulator builder checks that each
    /// one is an ordinary location of its graph.
    fn control_locations(&self) -> &[LocationId] {
        &[]
    }

    /// Short label for logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}
