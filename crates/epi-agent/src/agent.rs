//! A single individual.

use epi_core::{EpiState, LocationId};

/// One individual of the population.
///
/// # Timer discipline
///
/// `timer` counts steps since the last state change.  It is reset to `0` by
/// [`set_state`](Self::set_state) and otherwise advanced by exactly one per
/// processed step through [`tick`](Self::tick).  Fields are private so no
/// other path can break that rule; location and mask are freely settable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    state:    EpiState,
    location: LocationId,
    timer:    u32,
    mask:     bool,
}

impl Agent {
    /// A new agent with a zeroed timer and no mask.
    pub fn new(state: EpiState, location: LocationId) -> Self {
        Self { state, location, timer: 0, mask: false }
    }

    /// Explicit construction including timer and mask, for restoring saved
    /// populations and for tests.
    pub fn with_timer(state: EpiState, location: LocationId, timer: u32, mask: bool) -> Self {
        Self { state, location, timer, mask }
    }

    #[inline]
    pub fn state(&self) -> EpiState {
        self.state
    }

    #[inline]
    pub fn location(&self) -> LocationId {
        self.location
    }

    #[inline]
    pub fn timer(&self) -> u32 {
        self.timer
    }

    #[inline]
    pub fn has_mask(&self) -> bool {
        self.mask
    }

    #[inline]
    pub fn is_deceased(&self) -> bool {
        self.state.is_terminal()
    }

    /// Advance the dwell timer by one step.
    #[inline]
    pub fn tick(&mut self) {
        self.timer += 1;
    }

    /// Change state and reset the dwell timer.
    #[inline]
    pub fn set_state(&mut self, state: EpiState) {
        self.state = state;
        self.timer = 0;
    }

    #[inline]
    pub fn set_location(&mut self, location: LocationId) {
        self.location = location;
    }

    pub fn put_mask(&mut self) {
        self.mask = true;
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Agent: State={}, Location={}>", self.state, self.location.0)
    }
}
