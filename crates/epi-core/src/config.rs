//! Top-level run configuration.

/// Run configuration for one simulator.
///
/// Typically built by the experiment harness and passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Last step index to simulate.  A run records `horizon + 1` snapshots.
    /// Must be at least 1.
    pub horizon: u64,

    /// Master RNG seed.  The same seed and inputs always produce identical
    /// results.
    pub seed: u64,
}

impl SimConfig {
    pub fn new(horizon: u64, seed: u64) -> Self {
        Self { horizon, seed }
    }

    /// Number of snapshots a completed run holds, saturating at
    /// `usize::MAX`.
    #[inline]
    pub fn snapshot_count(&self) -> usize {
        usize::try_from(self.horizon).unwrap_or(usize::MAX).saturating_add(1)
    }
}
