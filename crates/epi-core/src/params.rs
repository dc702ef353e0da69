//! SEIRD transition-model constants.

/// Numeric constants of the per-location transition model.
///
/// Held by value in each simulator and never mutated during a run.  The
/// `Default` values are the reference calibration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeirdParams {
    /// Infection-rate coefficient β.  The exposure budget at a location is
    /// `ceil(beta * S * I)` before mask discounts.
    pub beta: f64,

    /// Steps an agent stays Exposed before becoming Infectious (compared with
    /// `>=` against the dwell timer, so fractional values round up).
    pub incubation_steps: f64,

    /// Steps an agent stays Infectious before resolving.
    pub infectious_steps: f64,

    /// Probability that a resolving Infectious agent becomes Deceased rather
    /// than Recovered.
    pub death_probability: f64,

    /// Shedding reduction of a masked Infectious agent.
    pub infectious_mask_reduction: f64,

    /// Receptiveness reduction of a masked Susceptible agent.
    pub susceptible_mask_reduction: f64,

    /// Declared combined reduction for a masked pair.  Not used by the
    /// transition model.
    pub combined_mask_reduction: f64,
}

impl Default for SeirdParams {
    fn default() -> Self {
        Self {
            beta:                       0.0145,
            incubation_steps:           1.0 / 0.4762,
            infectious_steps:           1.0 / 0.2350,
            death_probability:          0.0028,
            infectious_mask_reduction:  0.5,
            susceptible_mask_reduction: 0.1,
            combined_mask_reduction:    0.75,
        }
    }
}

impl SeirdParams {
    /// Multiplicative discount applied to the exposure budget given the masked
    /// fractions of the Susceptible and Infectious sub-populations.
    ///
    /// Empty sub-populations contribute no discount.
    pub fn mask_discount(&self, s_count: usize, s_masked: usize, i_count: usize, i_masked: usize) -> f64 {
        let s_rate = if s_count > 0 {
            (s_masked as f64 / s_count as f64) * self.susceptible_mask_reduction
        } else {
            0.0
        };
        let i_rate = if i_count > 0 {
            (i_masked as f64 / i_count as f64) * self.infectious_mask_reduction
        } else {
            0.0
        };
        (1.0 - s_rate) * (1.0 - i_rate)
    }
}
