//! Location graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing arcs.
//! Given a `LocationId n`, its outgoing arcs occupy the slices:
//!
//! ```text
//! arc_to    [ node_out_start[n] .. node_out_start[n+1] ]
//! arc_weight[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! so a walk policy gets a location's neighbours and their weights as two
//! parallel borrowed slices, with no allocation.  Within one location, arcs
//! keep the order in which they were added to the builder; neighbour order is
//! observable by the density-driven walks (ties go to the first neighbour).

use epi_core::{EpiError, LocationId};

use crate::{GraphError, GraphResult};

// ── LocationGraph ─────────────────────────────────────────────────────────────

/// Directed, weighted location graph in CSR format.
///
/// Immutable topology once built: the set of arcs never changes.  Arc weights
/// can be edited in place with [`set_arc_weight`](Self::set_arc_weight), which
/// experiments use on their own [`copy`](Self::copy).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationGraph {
    /// CSR row pointer.  Outgoing arcs of location `n` are at positions
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `location_count + 1`.
    node_out_start: Vec<u32>,

    /// Target location of each arc.
    arc_to: Vec<LocationId>,

    /// Movement weight of each arc (non-negative, finite).
    arc_weight: Vec<f64>,
}

impl LocationGraph {
    /// A graph with no locations.  Only an empty population can live on it.
    pub fn empty() -> Self {
        LocationGraphBuilder::new(0).build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    /// Number of ordinary locations `N`.
    #[inline]
    pub fn location_count(&self) -> usize {
        self.node_out_start.len() - 1
    }

    pub fn arc_count(&self) -> usize {
        self.arc_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.location_count() == 0
    }

    /// The removed sentinel id `N`.
    #[inline]
    pub fn removed(&self) -> LocationId {
        LocationId(self.location_count() as u32)
    }

    /// `true` for ids in `0..N`.
    #[inline]
    pub fn is_ordinary(&self, location: LocationId) -> bool {
        location.index() < self.location_count()
    }

    /// Iterator over all ordinary location ids in ascending order.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.location_count() as u32).map(LocationId)
    }

    /// Error unless `location` is an ordinary location.
    pub fn check_location(&self, location: LocationId) -> Result<(), EpiError> {
        if self.is_ordinary(location) {
            Ok(())
        } else {
            Err(EpiError::LocationOutOfRange { location, count: self.location_count() })
        }
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    #[inline]
    fn arc_range(&self, location: LocationId) -> std::ops::Range<usize> {
        if !self.is_ordinary(location) {
            return 0..0;
        }
        let start = self.node_out_start[location.index()] as usize;
        let end   = self.node_out_start[location.index() + 1] as usize;
        start..end
    }

    /// Locations directly reachable from `location`.
    ///
    /// Empty for the removed sentinel and for ids outside the graph.
    #[inline]
    pub fn neighbors(&self, location: LocationId) -> &[LocationId] {
        &self.arc_to[self.arc_range(location)]
    }

    /// Movement weights, parallel to [`neighbors`](Self::neighbors).
    #[inline]
    pub fn neighbor_weights(&self, location: LocationId) -> &[f64] {
        &self.arc_weight[self.arc_range(location)]
    }

    /// `(neighbour, weight)` pairs of `location`.
    pub fn neighbors_with_weights(
        &self,
        location: LocationId,
    ) -> impl Iterator<Item = (LocationId, f64)> + '_ {
        let range = self.arc_range(location);
        self.arc_to[range.clone()]
            .iter()
            .copied()
            .zip(self.arc_weight[range].iter().copied())
    }

    /// Out-degree of `location`.
    #[inline]
    pub fn out_degree(&self, location: LocationId) -> usize {
        self.arc_range(location).len()
    }

    pub fn has_arc(&self, from: LocationId, to: LocationId) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Weight of the arc `from -> to`, if present.
    pub fn arc_weight(&self, from: LocationId, to: LocationId) -> Option<f64> {
        self.neighbors_with_weights(from)
            .find(|&(n, _)| n == to)
            .map(|(_, w)| w)
    }

    // ── Mutation and copying ──────────────────────────────────────────────

    /// Change the weight of the existing arc `from -> to`.
    pub fn set_arc_weight(&mut self, from: LocationId, to: LocationId, weight: f64) -> GraphResult<()> {
        check_weight(from, to, weight)?;
        let range = self.arc_range(from);
        let offset = self.arc_to[range.clone()]
            .iter()
            .position(|&n| n == to)
            .ok_or(GraphError::NoArc { from, to })?;
        self.arc_weight[range.start + offset] = weight;
        Ok(())
    }

    /// Structurally independent deep copy.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl std::fmt::Display for LocationGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<LocationGraph: V={}, E={}>", self.location_count(), self.arc_count())
    }
}

fn check_weight(from: LocationId, to: LocationId, weight: f64) -> GraphResult<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight { from, to, weight })
    }
}

// ── LocationGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`LocationGraph`] incrementally, then call [`build`](Self::build).
///
/// Arcs may be added in any order.  `build()` groups them by source location
/// (stably, so per-location order is insertion order) and constructs the CSR
/// arrays.
///
/// # Example
///
/// ```
/// use epi_core::LocationId;
/// use epi_graph::LocationGraphBuilder;
///
/// let mut b = LocationGraphBuilder::new(3);
/// b.add_edge(LocationId(0), LocationId(1), 1.0).unwrap();
/// b.add_arc(LocationId(1), LocationId(2), 2.5).unwrap();
/// let g = b.build();
/// assert_eq!(g.location_count(), 3);
/// assert_eq!(g.arc_count(), 3);
/// assert_eq!(g.removed(), LocationId(3));
/// ```
pub struct LocationGraphBuilder {
    location_count: usize,
    raw_arcs:       Vec<RawArc>,
}

struct RawArc {
    from:   LocationId,
    to:     LocationId,
    weight: f64,
}

impl LocationGraphBuilder {
    pub fn new(location_count: usize) -> Self {
        Self { location_count, raw_arcs: Vec::new() }
    }

    /// Pre-allocate for the expected number of arcs.
    pub fn with_capacity(location_count: usize, arcs: usize) -> Self {
        Self { location_count, raw_arcs: Vec::with_capacity(arcs) }
    }

    fn check_location(&self, location: LocationId) -> GraphResult<()> {
        if location.index() < self.location_count {
            Ok(())
        } else {
            Err(EpiError::LocationOutOfRange { location, count: self.location_count }.into())
        }
    }

    /// Add a **directed** arc from `from` to `to`.
    pub fn add_arc(&mut self, from: LocationId, to: LocationId, weight: f64) -> GraphResult<()> {
        self.check_location(from)?;
        self.check_location(to)?;
        check_weight(from, to, weight)?;
        self.push_arc(from, to, weight);
        Ok(())
    }

    /// Append an arc the caller has already validated.
    pub(crate) fn push_arc(&mut self, from: LocationId, to: LocationId, weight: f64) {
        self.raw_arcs.push(RawArc { from, to, weight });
    }

    /// Convenience: add arcs in **both directions**.
    pub fn add_edge(&mut self, a: LocationId, b: LocationId, weight: f64) -> GraphResult<()> {
        self.add_arc(a, b, weight)?;
        self.add_arc(b, a, weight)
    }

    pub fn location_count(&self) -> usize { self.location_count }
    pub fn arc_count(&self) -> usize { self.raw_arcs.len() }

    /// Consume the builder and produce a [`LocationGraph`].
    pub fn build(self) -> LocationGraph {
        let location_count = self.location_count;

        let mut raw = self.raw_arcs;
        raw.sort_by_key(|a| a.from.0);

        let arc_to:     Vec<LocationId> = raw.iter().map(|a| a.to).collect();
        let arc_weight: Vec<f64>        = raw.iter().map(|a| a.weight).collect();

        let mut node_out_start = vec![0u32; location_count + 1];
        for a in &raw {
            node_out_start[a.from.index() + 1] += 1;
        }
        for i in 1..=location_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[location_count] as usize, arc_to.len());

        LocationGraph { node_out_start, arc_to, arc_weight }
    }
}
