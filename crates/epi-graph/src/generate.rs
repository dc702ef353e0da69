//! Graph generators: uniformly random sparse, fully connected, and built
//! from a square weight matrix.

use epi_core::{LocationId, SimRng};
use rustc_hash::FxHashSet;

use crate::{GraphError, GraphResult, LocationGraph, LocationGraphBuilder};

impl LocationGraph {
    /// Uniformly random directed graph with exactly `edge_count` distinct arcs
    /// of weight `1.0`, no self-loops.
    ///
    /// Endpoints are drawn uniformly and rejected if they form a self-loop or
    /// repeat an existing arc, so the expected cost grows as the graph nears
    /// completeness.  Memory is proportional to `edge_count`, not to the
    /// square of `location_count`.
    pub fn random(location_count: usize, edge_count: usize, rng: &mut SimRng) -> GraphResult<Self> {
        let max = location_count
            .checked_mul(location_count.saturating_sub(1))
            .unwrap_or(usize::MAX);
        if edge_count > max {
            return Err(GraphError::TooManyArcs { nodes: location_count, edges: edge_count, max });
        }

        let mut taken: FxHashSet<(u32, u32)> = FxHashSet::default();
        taken.reserve(edge_count);
        let mut b = LocationGraphBuilder::with_capacity(location_count, edge_count);
        while b.arc_count() < edge_count {
            let s = rng.gen_range(0..location_count) as u32;
            let t = rng.gen_range(0..location_count) as u32;
            if s == t || !taken.insert((s, t)) {
                continue;
            }
            b.push_arc(LocationId(s), LocationId(t), 1.0);
        }
        Ok(b.build())
    }

    /// Complete directed graph on `location_count` locations: every ordered
    /// pair of distinct locations gets an arc of weight `1.0`.
    pub fn fully_connected(location_count: usize) -> Self {
        let n = location_count as u32;
        let mut b = LocationGraphBuilder::with_capacity(location_count, location_count * location_count);
        for i in 0..n {
            for j in (0..n).filter(|&j| j != i) {
                b.push_arc(LocationId(i), LocationId(j), 1.0);
            }
        }
        b.build()
    }

    /// Build from a square non-negative weight matrix: each strictly positive
    /// cell `(row, col)` becomes the arc `row -> col` with that weight; zero
    /// cells are not arcs.
    pub fn from_matrix<R: AsRef<[f64]>>(rows: &[R]) -> GraphResult<Self> {
        let n = rows.len();
        let mut b = LocationGraphBuilder::new(n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphError::NotSquare { row: i, len: row.len(), expected: n });
            }
            for (j, &w) in row.iter().enumerate() {
                if w == 0.0 {
                    continue;
                }
                b.add_arc(LocationId(i as u32), LocationId(j as u32), w)?;
            }
        }
        Ok(b.build())
    }
}
