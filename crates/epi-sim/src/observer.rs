//! Simulation observer trait for progress reporting and data collection.

use epi_core::StateCounts;

/// Callbacks invoked by [`Simulator::run_observed`][crate::Simulator::run_observed]
/// at key points in the step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust
/// use epi_core::StateCounts;
/// use epi_sim::SimObserver;
///
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: u64, counts: &StateCounts) {
///         if step % self.interval == 0 {
///             println!("step {step}: {counts}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called after the step's snapshot has been appended to the history.
    fn on_step_end(&mut self, _step: u64, _counts: &StateCounts) {}

    /// Called once, on the first step that is skipped because the previous
    /// snapshot had no Infectious agents.
    fn on_fade_out(&mut self, _step: u64) {}

    /// Called once after the horizon is reached.
    fn on_sim_end(&mut self, _final_step: u64, _history: &[StateCounts]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_observed` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
