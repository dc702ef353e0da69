//! The `MobilityPolicy` trait — the movement extension point.

use epi_agent::Population;
use epi_core::SimRng;
use epi_graph::LocationGraph;

/// Pluggable movement rule applied to the whole population once per step.
///
/// The simulator lends the population by `&mut` for the duration of the
/// call; implementations must not keep references to it afterwards.  All
/// randomness comes from the simulator's `rng` so a run is reproducible from
/// its seed.
///
/// # Thread safety
///
/// Policies are plain configuration and are shared (`Arc`) between copied
/// simulators, including across Rayon workers, so implementations must be
/// `Send + Sync`.  Per-step scratch state belongs on the stack of `apply`.
///
/// # Example
///
/// ```rust
/// use epi_agent::Population;
/// use epi_core::SimRng;
/// use epi_graph::LocationGraph;
/// use epi_mobility::MobilityPolicy;
///
/// /// Everyone alive jumps to location 0.
/// struct Gather;
///
/// impl MobilityPolicy for Gather {
///     fn apply(&self, population: &mut Population, _graph: &LocationGraph, _rng: &mut SimRng) {
///         for agent in population.iter_mut().filter(|a| !a.is_deceased()) {
///             agent.set_location(epi_core::LocationId(0));
///         }
///     }
/// }
/// ```
pub trait MobilityPolicy: Send + Sync + 'static {
    /// Update the location of every living agent.
    fn apply(&self, population: &mut Population, graph: &LocationGraph, rng: &mut SimRng);

    /// Short label used in logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}
