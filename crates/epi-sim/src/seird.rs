//! Per-location SEIRD transition model.
//!
//! Locations are epidemiologically independent within a step: each bucket's
//! exposure budget is computed from that bucket's own counts at the start of
//! the step.  Every agent in a bucket has its timer ticked before its
//! transition is evaluated, and makes at most one transition per step.

use epi_agent::{Agent, Population};
use epi_core::{EpiState, SeirdParams, SimRng};

/// Number of Susceptible agents that may become Exposed at one location this
/// step.
///
/// `ceil(beta * S * I)`, discounted by the masked fractions of S and I, then
/// rounded half-to-even.
pub fn exposure_budget(
    params:   &SeirdParams,
    s_count:  usize,
    s_masked: usize,
    i_count:  usize,
    i_masked: usize,
) -> usize {
    let raw = (params.beta * s_count as f64 * i_count as f64).ceil();
    let discounted = raw * params.mask_discount(s_count, s_masked, i_count, i_masked);
    discounted.round_ties_even().max(0.0) as usize
}

/// Timer-driven progression shared by ordinary buckets and the sentinel.
fn progress(agent: &mut Agent, params: &SeirdParams, rng: &mut SimRng) {
    let dwell = agent.timer() as f64;
    match agent.state() {
        EpiState::Exposed if dwell >= params.incubation_steps => {
            agent.set_state(EpiState::Infectious);
        }
        EpiState::Infectious if dwell >= params.infectious_steps => {
            let outcome = if rng.gen_bool(params.death_probability) {
                EpiState::Deceased
            } else {
                EpiState::Recovered
            };
            agent.set_state(outcome);
        }
        _ => {}
    }
}

/// Apply one step of the transition model to the agents at an ordinary
/// location.  `members` are population indices in population order.
pub fn step_location(
    population: &mut Population,
    members:    &[usize],
    params:     &SeirdParams,
    rng:        &mut SimRng,
) {
    let agents = population.agents_mut();

    let (mut s_count, mut s_masked, mut i_count, mut i_masked) = (0, 0, 0, 0);
    for &i in members {
        let agent = &agents[i];
        match agent.state() {
            EpiState::Susceptible => {
                s_count += 1;
                s_masked += usize::from(agent.has_mask());
            }
            EpiState::Infectious => {
                i_count += 1;
                i_masked += usize::from(agent.has_mask());
            }
            _ => {}
        }
    }

    let budget = exposure_budget(params, s_count, s_masked, i_count, i_masked);
    let mut exposed = 0;

    for &i in members {
        let agent = &mut agents[i];
        agent.tick();
        if agent.state() == EpiState::Susceptible {
            if exposed < budget {
                agent.set_state(EpiState::Exposed);
                exposed += 1;
            }
        } else {
            progress(agent, params, rng);
        }
    }
}

/// Apply one step to agents held at the removed sentinel: timers tick and
/// E→I / I→R/D progress, but nobody becomes Exposed.
pub fn step_removed(
    population: &mut Population,
    members:    &[usize],
    params:     &SeirdParams,
    rng:        &mut SimRng,
) {
    let agents = population.agents_mut();
    for &i in members {
        let agent = &mut agents[i];
        agent.tick();
        progress(agent, params, rng);
    }
}
