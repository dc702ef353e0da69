//! Epidemiological states and the per-step aggregate snapshot.
//!
//! # Snapshot format
//!
//! A [`StateCounts`] is a fixed array of five counters.  The array position of
//! each state is part of the format and never changes:
//!
//! | Index | State         |
//! |-------|---------------|
//! | 0     | `Susceptible` |
//! | 1     | `Exposed`     |
//! | 2     | `Infectious`  |
//! | 3     | `Recovered`   |
//! | 4     | `Deceased`    |

use std::fmt;
use std::ops::{Index, IndexMut};

/// SEIRD compartment of a single agent.
///
/// The explicit discriminants are the snapshot column indices (see module
/// docs).  `Deceased` is terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EpiState {
    #[default]
    Susceptible = 0,
    Exposed     = 1,
    Infectious  = 2,
    Recovered   = 3,
    Deceased    = 4,
}

impl EpiState {
    /// Number of states; the length of a [`StateCounts`] row.
    pub const COUNT: usize = 5;

    /// All states in snapshot order.
    pub const ALL: [EpiState; Self::COUNT] = [
        EpiState::Susceptible,
        EpiState::Exposed,
        EpiState::Infectious,
        EpiState::Recovered,
        EpiState::Deceased,
    ];

    /// Snapshot column index of this state.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index).  Returns `None` for `i >= 5`.
    pub fn from_index(i: usize) -> Option<EpiState> {
        Self::ALL.get(i).copied()
    }

    /// `true` only for `Deceased`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self == EpiState::Deceased
    }

    /// `true` for the states detection policies look for and hold agents in.
    #[inline]
    pub fn is_active_infection(self) -> bool {
        matches!(self, EpiState::Exposed | EpiState::Infectious)
    }

    /// Single-letter label, useful for CSV column headers.
    pub fn as_str(self) -> &'static str {
        match self {
            EpiState::Susceptible => "S",
            EpiState::Exposed     => "E",
            EpiState::Infectious  => "I",
            EpiState::Recovered   => "R",
            EpiState::Deceased    => "D",
        }
    }
}

impl fmt::Display for EpiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StateCounts ───────────────────────────────────────────────────────────────

/// Aggregate count of agents per [`EpiState`], ordered S, E, I, R, D.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts(pub [usize; EpiState::COUNT]);

impl StateCounts {
    pub const ZERO: StateCounts = StateCounts([0; EpiState::COUNT]);

    /// Tally the states yielded by `states`.
    pub fn tally<I: IntoIterator<Item = EpiState>>(states: I) -> Self {
        let mut counts = Self::ZERO;
        for state in states {
            counts[state] += 1;
        }
        counts
    }

    /// Sum over all five states; equals the population size.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn as_array(&self) -> &[usize; EpiState::COUNT] {
        &self.0
    }
}

impl Index<EpiState> for StateCounts {
    type Output = usize;
    #[inline]
    fn index(&self, state: EpiState) -> &usize {
        &self.0[state.index()]
    }
}

impl IndexMut<EpiState> for StateCounts {
    #[inline]
    fn index_mut(&mut self, state: EpiState) -> &mut usize {
        &mut self.0[state.index()]
    }
}

impl fmt::Display for StateCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [s, e, i, r, d] = self.0;
        write!(f, "S={s} E={e} I={i} R={r} D={d}")
    }
}
