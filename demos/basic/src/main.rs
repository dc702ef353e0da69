//! basic — smallest end-to-end example for the epi-graph framework.
//!
//! Builds a random 30-location topology with 1 500 agents, then compares a
//! handful of strategies on copies of the same starting configuration:
//! no intervention, detection at the busiest locations, social distancing,
//! and masks.  Each strategy is averaged over `ROLLOUTS` stochastic runs.
//!
//! Pass `-v` for debug logging (policy installation, fade-out).

use std::time::Instant;

use anyhow::Result;
use log::{LevelFilter, info};
use log4rs::Config;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

use epi_agent::{DEFAULT_INFECT_PORTION, Population};
use epi_core::{LocationId, SimRng, StateCounts};
use epi_graph::LocationGraph;
use epi_intervention::NoIntervention;
use epi_mobility::{RandomWalkWithStay, SocialDistanceWalk};
use epi_sim::{SimBuilder, SimObserver, Simulator};

// ── Constants ─────────────────────────────────────────────────────────────────

const LOCATIONS:   usize = 30;
const EDGES:       usize = 180;
const AGENTS:      usize = 1_500;
const HORIZON:     u64   = 120;
const SEED:        u64   = 42;
const ROLLOUTS:    usize = 8;
const CONTROLS:    usize = 5;
const OBEY_RATE:   f64   = 0.5;
const LOG_PATTERN: &str  = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging(level: LevelFilter) -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs the snapshot every `interval` steps.
struct ProgressLogger {
    interval: u64,
}

impl SimObserver for ProgressLogger {
    fn on_step_end(&mut self, step: u64, counts: &StateCounts) {
        if step % self.interval == 0 {
            info!("step {step:>4}: {counts}");
        }
    }

    fn on_fade_out(&mut self, step: u64) {
        info!("epidemic faded out at step {step}");
    }
}

// ── Strategy comparison ───────────────────────────────────────────────────────

struct Summary {
    peak_portion: f64,
    r_zero:       f64,
    mortality:    f64,
}

fn summarize(runs: &[Simulator]) -> Summary {
    let n = runs.len().max(1) as f64;
    Summary {
        peak_portion: runs.iter().map(Simulator::max_infected_portion).sum::<f64>() / n,
        r_zero:       runs.iter().map(Simulator::mean_r_zero).sum::<f64>() / n,
        mortality:    runs.iter().map(Simulator::mortality_rate).sum::<f64>() / n,
    }
}

/// The `k` locations with the most agents at the start, busiest first.
fn busiest_locations(sim: &Simulator, k: usize) -> Vec<LocationId> {
    let dist = sim.location_distribution();
    let mut ordinary: Vec<LocationId> = sim.graph().locations().collect();
    ordinary.sort_by_key(|loc| std::cmp::Reverse(dist[loc.index()]));
    ordinary.truncate(k);
    ordinary
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let verbose = std::env::args().any(|a| a == "-v");
    init_logging(if verbose { LevelFilter::Debug } else { LevelFilter::Info })?;

    info!("=== basic — epi-graph epidemic simulator ===");
    info!("Locations: {LOCATIONS}  |  Arcs: {EDGES}  |  Agents: {AGENTS}  |  Horizon: {HORIZON}");

    // 1. Topology and starting population.
    let mut rng = SimRng::new(SEED);
    let graph = LocationGraph::random(LOCATIONS, EDGES, &mut rng)?;
    let population = Population::random(AGENTS, &graph, DEFAULT_INFECT_PORTION, &mut rng)?;
    info!("Initial state: {}", population.state_counts());

    // 2. One observed baseline run.
    let mut baseline = SimBuilder::new(population, graph, RandomWalkWithStay, NoIntervention, HORIZON)
        .seed(SEED)
        .build()?;
    let mut template = baseline.copy();

    let t0 = Instant::now();
    baseline.run_observed(&mut ProgressLogger { interval: 10 });
    info!(
        "Baseline finished in {:.3} s: peak {} infected, mortality {:.4}",
        t0.elapsed().as_secs_f64(),
        baseline.max_infected(),
        baseline.mortality_rate(),
    );

    // 3. Strategy comparison, each on fresh rollouts of the same start.
    let mut results: Vec<(&str, Summary)> = Vec::new();

    results.push(("none", summarize(&template.rollouts(ROLLOUTS))));

    let mut detection = template.copy();
    let controls = busiest_locations(&detection, CONTROLS);
    detection.allocate_control_locations(controls.iter().copied())?;
    results.push(("detection", summarize(&detection.rollouts(ROLLOUTS))));

    let mut distancing = template.copy();
    distancing.set_mobility(SocialDistanceWalk::new(OBEY_RATE)?);
    results.push(("distancing", summarize(&distancing.rollouts(ROLLOUTS))));

    let mut masks = template.copy();
    let covered = masks.population_mut().give_masks(AGENTS / 2);
    info!("Masks handed to {covered} agents");
    results.push(("masks", summarize(&masks.rollouts(ROLLOUTS))));

    // 4. Report.
    println!();
    println!("{:<12} {:>12} {:>10} {:>10}", "Strategy", "Peak I/N", "R0 est.", "Mortality");
    println!("{}", "-".repeat(47));
    for (name, s) in &results {
        println!(
            "{:<12} {:>12.4} {:>10.4} {:>10.4}",
            name, s.peak_portion, s.r_zero, s.mortality
        );
    }
    println!();
    println!("Control locations: {controls:?}");

    Ok(())
}
