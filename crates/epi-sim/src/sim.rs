//! The `Simulator` struct and its step loop.

use std::fmt;
use std::sync::Arc;

use epi_agent::Population;
use epi_core::{EpiState, LocationId, SeirdParams, SimConfig, SimRng, StateCounts};
use epi_graph::LocationGraph;
use epi_intervention::{AggressiveDetection, InterventionPolicy};
use epi_mobility::MobilityPolicy;
use log::{debug, info, trace};

use crate::builder::{check_controls, check_placement};
use crate::{metrics, seird, NoopObserver, SimObserver, SimResult};

// ── Simulator ─────────────────────────────────────────────────────────────────

/// One epidemic run over a location graph.
///
/// Owns its population, graph, RNG and snapshot history outright.  Policies
/// are held behind `Arc` so that copies made for independent rollouts share
/// them; policies keep no per-run state.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulator {
    pub(crate) config:       SimConfig,
    pub(crate) params:       SeirdParams,
    pub(crate) population:   Population,
    pub(crate) graph:        LocationGraph,
    pub(crate) mobility:     Arc<dyn MobilityPolicy>,
    pub(crate) intervention: Arc<dyn InterventionPolicy>,
    pub(crate) rng:          SimRng,

    /// Index of the next step to process.
    pub(crate) step: u64,

    /// One S,E,I,R,D snapshot per completed step.
    pub(crate) history: Vec<StateCounts>,

    /// First step skipped by the early fade-out shortcut, if any.
    pub(crate) faded_at: Option<u64>,

    /// Number of copies derived so far; salts each child RNG.
    pub(crate) copies: u64,
}

impl Simulator {
    // ── Running ───────────────────────────────────────────────────────────

    /// Advance until the step counter exceeds the horizon.
    pub fn run(&mut self) {
        self.run_observed(&mut NoopObserver);
    }

    /// [`run`](Self::run) with observer callbacks at every step boundary.
    pub fn run_observed<O: SimObserver>(&mut self, observer: &mut O) {
        info!(
            "run start: {} agents on {} locations, steps {}..={}, mobility={}, intervention={}",
            self.population.len(),
            self.graph.location_count(),
            self.step,
            self.config.horizon,
            self.mobility.name(),
            self.intervention.name(),
        );

        while !self.is_finished() {
            self.step_observed(observer);
        }

        info!(
            "run end at step {}: {} (peak infected {})",
            self.step,
            self.history.last().copied().unwrap_or_default(),
            self.max_infected(),
        );
        observer.on_sim_end(self.step, &self.history);
    }

    /// Process up to `n` steps, stopping early at the horizon.  Returns the
    /// number of steps actually processed.
    pub fn run_steps(&mut self, n: u64) -> u64 {
        let mut done = 0;
        while done < n && !self.is_finished() {
            self.step_observed(&mut NoopObserver);
            done += 1;
        }
        done
    }

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) {
        let step = self.step;
        observer.on_step_start(step);

        let last = self.history.last().copied();
        let snapshot = match last {
            Some(last) if step > 0 && last[EpiState::Infectious] == 0 => {
                if self.faded_at.is_none() {
                    debug!("no infectious agents left; freezing history from step {step}");
                    self.faded_at = Some(step);
                    observer.on_fade_out(step);
                }
                last
            }
            _ => self.advance(),
        };

        trace!("step {step}: {snapshot}");
        self.history.push(snapshot);
        self.step += 1;
        observer.on_step_end(step, &snapshot);
    }

    /// Transition, move, intervene, and tally.
    fn advance(&mut self) -> StateCounts {
        let removed = self.graph.removed().index();

        // Population indices per location, population order kept.  Ids past
        // the sentinel are treated as removed.
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); removed + 1];
        for (i, agent) in self.population.iter().enumerate() {
            buckets[agent.location().index().min(removed)].push(i);
        }

        let (ordinary, sentinel) = buckets.split_at(removed);
        for members in ordinary.iter().filter(|m| !m.is_empty()) {
            seird::step_location(&mut self.population, members, &self.params, &mut self.rng);
        }
        seird::step_removed(&mut self.population, &sentinel[0], &self.params, &mut self.rng);

        self.mobility.apply(&mut self.population, &self.graph, &mut self.rng);
        self.intervention.apply(&self.graph, &mut self.population, &mut self.rng);

        self.population.state_counts()
    }

    // ── Copies and rollouts ───────────────────────────────────────────────

    /// Independent deep copy of graph, population, step counter and history.
    /// Policies are shared.  The copy's RNG is a child stream of this one, so
    /// successive copies diverge but are reproducible from the parent's seed.
    pub fn copy(&mut self) -> Simulator {
        let rng = self.rng.child(self.copies);
        self.copies += 1;
        Simulator {
            config:       self.config.clone(),
            params:       self.params.clone(),
            population:   self.population.copy(),
            graph:        self.graph.copy(),
            mobility:     Arc::clone(&self.mobility),
            intervention: Arc::clone(&self.intervention),
            rng,
            step:         self.step,
            history:      self.history.clone(),
            faded_at:     self.faded_at,
            copies:       0,
        }
    }

    /// Run `n` independent copies of this simulator to completion and return
    /// them.  This simulator is not advanced.
    ///
    /// With the `parallel` feature the copies run on Rayon's thread pool;
    /// results are identical either way because each copy owns its RNG.
    pub fn rollouts(&mut self, n: usize) -> Vec<Simulator> {
        let mut runs: Vec<Simulator> = (0..n).map(|_| self.copy()).collect();

        #[cfg(not(feature = "parallel"))]
        runs.iter_mut().for_each(Simulator::run);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            runs.par_iter_mut().for_each(Simulator::run);
        }

        runs
    }

    // ── Policy installation ───────────────────────────────────────────────

    /// Install a multi-node [`AggressiveDetection`] at `locations` with
    /// default detection settings.
    pub fn allocate_control_locations(
        &mut self,
        locations: impl IntoIterator<Item = LocationId>,
    ) -> SimResult<()> {
        self.allocate_control_locations_with(
            locations,
            AggressiveDetection::DEFAULT_FIND_PROBABILITY,
            false,
        )
    }

    /// Install a multi-node [`AggressiveDetection`] at `locations`.
    pub fn allocate_control_locations_with(
        &mut self,
        locations:        impl IntoIterator<Item = LocationId>,
        find_probability: f64,
        detect_exposed:   bool,
    ) -> SimResult<()> {
        let policy = AggressiveDetection::multi(locations)?
            .with_find_probability(find_probability)?
            .with_detect_exposed(detect_exposed);
        self.set_intervention(policy)
    }

    /// Replace the intervention policy.  Its control locations must be
    /// ordinary locations of this simulator's graph.
    pub fn set_intervention<P: InterventionPolicy>(&mut self, policy: P) -> SimResult<()> {
        check_controls(&policy, &self.graph)?;
        debug!(
            "installing intervention {} at {} control locations",
            policy.name(),
            policy.control_locations().len(),
        );
        self.intervention = Arc::new(policy);
        Ok(())
    }

    /// Replace the mobility policy.
    pub fn set_mobility<M: MobilityPolicy>(&mut self, policy: M) {
        debug!("installing mobility {}", policy.name());
        self.mobility = Arc::new(policy);
    }

    /// Replace the population, e.g. between runs of a sweep.  Placement is
    /// validated against the current graph.
    pub fn set_population(&mut self, population: Population) -> SimResult<()> {
        check_placement(&population, &self.graph)?;
        self.population = population;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn params(&self) -> &SeirdParams {
        &self.params
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Mutable population access for positional actions between runs, such
    /// as [`Population::give_masks`].
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    pub fn mobility(&self) -> &dyn MobilityPolicy {
        self.mobility.as_ref()
    }

    pub fn intervention(&self) -> &dyn InterventionPolicy {
        self.intervention.as_ref()
    }

    /// Index of the next step to process.
    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn horizon(&self) -> u64 {
        self.config.horizon
    }

    pub fn is_finished(&self) -> bool {
        self.step > self.config.horizon
    }

    /// Snapshots recorded so far, one per completed step.
    pub fn history(&self) -> &[StateCounts] {
        &self.history
    }

    /// First step frozen by the early fade-out shortcut.
    pub fn faded_at(&self) -> Option<u64> {
        self.faded_at
    }

    /// Current occupancy of every location, sentinel last.
    pub fn location_distribution(&self) -> Vec<usize> {
        self.population.location_counts(self.graph.location_count() + 1)
    }

    // ── Metrics ───────────────────────────────────────────────────────────

    pub fn max_infected(&self) -> usize {
        metrics::max_infected(&self.history)
    }

    pub fn max_infected_portion(&self) -> f64 {
        metrics::max_infected_portion(&self.history, self.population.len())
    }

    pub fn mean_r_zero(&self) -> f64 {
        metrics::mean_r_zero(&self.history)
    }

    pub fn mortality_rate(&self) -> f64 {
        metrics::mortality_rate(&self.history, self.population.len())
    }
}

impl fmt::Display for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = 100.0 * self.step as f64 / self.config.horizon.max(1) as f64;
        write!(f, "{}/{} ({pct:.2}%)", self.step, self.config.horizon)
    }
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("step", &self.step)
            .field("horizon", &self.config.horizon)
            .field("agents", &self.population.len())
            .field("locations", &self.graph.location_count())
            .field("mobility", &self.mobility.name())
            .field("intervention", &self.intervention.name())
            .finish()
    }
}
