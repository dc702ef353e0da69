//! The ordered agent container.

use epi_core::{AgentId, LocationId, StateCounts};

use crate::Agent;

/// Ordered collection of agents.
///
/// Mutable access is handed out as a slice (`&mut [Agent]`), never as the
/// `Vec`, so policies can change agents in place but can neither add, drop,
/// nor reorder them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(agent.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    // ── Tallies ───────────────────────────────────────────────────────────

    /// Number of agents currently at `location`.  O(n).
    pub fn count_at(&self, location: LocationId) -> usize {
        self.agents.iter().filter(|a| a.location() == location).count()
    }

    /// Occupancy of every location id in `0..bucket_count`.
    ///
    /// Pass `graph.location_count() + 1` to include the removed sentinel as
    /// the last bucket.  Agents at ids `>= bucket_count` are not counted.
    pub fn location_counts(&self, bucket_count: usize) -> Vec<usize> {
        let mut counts = vec![0usize; bucket_count];
        for agent in &self.agents {
            if let Some(c) = counts.get_mut(agent.location().index()) {
                *c += 1;
            }
        }
        counts
    }

    /// Number of agents per epidemiological state.
    pub fn state_counts(&self) -> StateCounts {
        StateCounts::tally(self.agents.iter().map(Agent::state))
    }

    // ── Positional actions ────────────────────────────────────────────────

    /// Put masks on the first `k` agents in population order (or on every
    /// agent if `k >= len`).  Returns how many agents were covered.
    pub fn give_masks(&mut self, k: usize) -> usize {
        let k = k.min(self.agents.len());
        self.agents[..k].iter_mut().for_each(Agent::put_mask);
        k
    }

    /// Structurally independent deep copy.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

impl FromIterator<Agent> for Population {
    fn from_iter<I: IntoIterator<Item = Agent>>(iter: I) -> Self {
        Self { agents: iter.into_iter().collect() }
    }
}

impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Population: size={}>", self.agents.len())
    }
}
