//! Scalar summaries derived from a run's snapshot history.
//!
//! None of these divide by zero: degenerate inputs fall back to the
//! conservative values documented on each function.

use epi_core::{EpiState, StateCounts};

/// Peak Infectious count over the history, `0` for an empty history.
pub fn max_infected(history: &[StateCounts]) -> usize {
    history.iter().map(|c| c[EpiState::Infectious]).max().unwrap_or(0)
}

/// Peak Infectious count divided by `population`.
///
/// Falls back to `1.0` for an empty population or an empty history.
pub fn max_infected_portion(history: &[StateCounts], population: usize) -> f64 {
    if population == 0 || history.is_empty() {
        return 1.0;
    }
    max_infected(history) as f64 / population as f64
}

/// Mean over consecutive snapshot pairs of `ΔI / ΔR`, using `ΔI` alone for
/// pairs where `ΔR == 0`.  Returns `0.0` with fewer than two snapshots.
pub fn mean_r_zero(history: &[StateCounts]) -> f64 {
    if history.len() < 2 {
        return 0.0;
    }
    let delta = |a: &StateCounts, b: &StateCounts, s: EpiState| b[s] as f64 - a[s] as f64;

    let total: f64 = history
        .windows(2)
        .map(|pair| {
            let d_i = delta(&pair[0], &pair[1], EpiState::Infectious);
            let d_r = delta(&pair[0], &pair[1], EpiState::Recovered);
            if d_r != 0.0 { d_i / d_r } else { d_i }
        })
        .sum();
    total / (history.len() - 1) as f64
}

/// Final Deceased count divided by `population`.
///
/// Falls back to `0.0` for an empty population or an empty history.
pub fn mortality_rate(history: &[StateCounts], population: usize) -> f64 {
    match history.last() {
        Some(last) if population > 0 => last[EpiState::Deceased] as f64 / population as f64,
        _ => 0.0,
    }
}
