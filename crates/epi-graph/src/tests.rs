//! Unit tests for epi-graph.

use epi_core::{EpiError, LocationId, SimRng};

use crate::{GraphError, LocationGraph, LocationGraphBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Three locations in a line: 0 ↔ 1 ↔ 2, weight 1.
fn line_graph() -> LocationGraph {
    let mut b = LocationGraphBuilder::new(3);
    b.add_edge(LocationId(0), LocationId(1), 1.0).unwrap();
    b.add_edge(LocationId(1), LocationId(2), 1.0).unwrap();
    b.build()
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn csr_neighbours() {
        let g = line_graph();
        assert_eq!(g.location_count(), 3);
        assert_eq!(g.arc_count(), 4);
        assert_eq!(g.neighbors(LocationId(0)), &[LocationId(1)]);
        let mut mid = g.neighbors(LocationId(1)).to_vec();
        mid.sort();
        assert_eq!(mid, vec![LocationId(0), LocationId(2)]);
        assert_eq!(g.out_degree(LocationId(2)), 1);
    }

    #[test]
    fn insertion_order_kept_per_location() {
        let mut b = LocationGraphBuilder::new(4);
        b.add_arc(LocationId(2), LocationId(0), 1.0).unwrap();
        b.add_arc(LocationId(0), LocationId(3), 1.0).unwrap();
        b.add_arc(LocationId(0), LocationId(1), 1.0).unwrap();
        b.add_arc(LocationId(0), LocationId(2), 1.0).unwrap();
        let g = b.build();
        assert_eq!(g.neighbors(LocationId(0)), &[LocationId(3), LocationId(1), LocationId(2)]);
        assert_eq!(g.neighbors(LocationId(2)), &[LocationId(0)]);
    }

    #[test]
    fn weights_parallel_to_neighbours() {
        let mut b = LocationGraphBuilder::new(3);
        b.add_arc(LocationId(0), LocationId(1), 2.0).unwrap();
        b.add_arc(LocationId(0), LocationId(2), 0.5).unwrap();
        let g = b.build();
        assert_eq!(g.neighbor_weights(LocationId(0)), &[2.0, 0.5]);
        assert_eq!(g.arc_weight(LocationId(0), LocationId(2)), Some(0.5));
        assert_eq!(g.arc_weight(LocationId(1), LocationId(0)), None);
    }

    #[test]
    fn rejects_unknown_location() {
        let mut b = LocationGraphBuilder::new(2);
        let err = b.add_arc(LocationId(0), LocationId(2), 1.0).unwrap_err();
        assert_eq!(
            err,
            GraphError::Core(EpiError::LocationOutOfRange { location: LocationId(2), count: 2 })
        );
    }

    #[test]
    fn rejects_negative_and_nan_weights() {
        let mut b = LocationGraphBuilder::new(2);
        assert!(matches!(
            b.add_arc(LocationId(0), LocationId(1), -1.0),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(b.add_arc(LocationId(0), LocationId(1), f64::NAN).is_err());
        assert_eq!(b.arc_count(), 0);
    }

    #[test]
    fn empty_graph() {
        let g = LocationGraph::empty();
        assert!(g.is_empty());
        assert_eq!(g.removed(), LocationId(0));
        assert_eq!(g.locations().count(), 0);
    }
}

// ── Sentinel ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sentinel_tests {
    use super::*;

    #[test]
    fn removed_is_one_past_last() {
        let g = line_graph();
        assert_eq!(g.removed(), LocationId(3));
        assert!(g.is_ordinary(LocationId(2)));
        assert!(!g.is_ordinary(g.removed()));
    }

    #[test]
    fn removed_has_no_neighbours() {
        let g = LocationGraph::fully_connected(4);
        assert!(g.neighbors(g.removed()).is_empty());
        assert!(g.neighbor_weights(g.removed()).is_empty());
        assert_eq!(g.out_degree(LocationId(99)), 0);
    }

    #[test]
    fn check_location() {
        let g = line_graph();
        assert!(g.check_location(LocationId(0)).is_ok());
        assert!(g.check_location(g.removed()).is_err());
    }
}

// ── Generators ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generate_tests {
    use super::*;

    #[test]
    fn fully_connected_has_all_ordered_pairs() {
        let g = LocationGraph::fully_connected(20);
        assert_eq!(g.arc_count(), 20 * 19);
        for loc in g.locations() {
            assert_eq!(g.out_degree(loc), 19);
            assert!(!g.has_arc(loc, loc));
        }
    }

    #[test]
    fn random_has_exact_distinct_arcs_without_self_loops() {
        let mut rng = SimRng::new(3);
        let g = LocationGraph::random(10, 40, &mut rng).unwrap();
        assert_eq!(g.arc_count(), 40);
        for loc in g.locations() {
            let mut seen = g.neighbors(loc).to_vec();
            assert!(!seen.contains(&loc));
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), g.out_degree(loc));
            assert!(g.neighbor_weights(loc).iter().all(|&w| w == 1.0));
        }
    }

    #[test]
    fn random_complete_graph_terminates() {
        let mut rng = SimRng::new(9);
        let g = LocationGraph::random(5, 20, &mut rng).unwrap();
        assert_eq!(g.arc_count(), 20);
        for loc in g.locations() {
            assert_eq!(g.out_degree(loc), 4);
            assert!(!g.has_arc(loc, loc));
        }
    }

    #[test]
    fn random_rejects_impossible_edge_count() {
        let mut rng = SimRng::new(0);
        assert_eq!(
            LocationGraph::random(3, 7, &mut rng).unwrap_err(),
            GraphError::TooManyArcs { nodes: 3, edges: 7, max: 6 }
        );
    }

    #[test]
    fn random_large_sparse_graph() {
        let mut rng = SimRng::new(11);
        let g = LocationGraph::random(400_000, 1_000_000, &mut rng).unwrap();
        assert_eq!(g.location_count(), 400_000);
        assert_eq!(g.arc_count(), 1_000_000);
    }

    #[test]
    fn from_matrix_skips_zero_cells() {
        let m = vec![
            vec![0.0, 2.0, 0.0],
            vec![0.0, 0.0, 0.5],
            vec![1.0, 0.0, 3.0],
        ];
        let g = LocationGraph::from_matrix(&m).unwrap();
        assert_eq!(g.arc_count(), 4);
        assert_eq!(g.arc_weight(LocationId(0), LocationId(1)), Some(2.0));
        assert_eq!(g.arc_weight(LocationId(1), LocationId(2)), Some(0.5));
        assert_eq!(g.neighbors(LocationId(2)), &[LocationId(0), LocationId(2)]);
        assert!(!g.has_arc(LocationId(0), LocationId(2)));
    }

    #[test]
    fn from_matrix_rejects_ragged_rows() {
        let m = vec![vec![0.0, 1.0], vec![1.0]];
        assert_eq!(
            LocationGraph::from_matrix(&m).unwrap_err(),
            GraphError::NotSquare { row: 1, len: 1, expected: 2 }
        );
    }
}

// ── Copy independence ─────────────────────────────────────────────────────────

#[cfg(test)]
mod copy_tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn set_weight_on_copy_leaves_source() {
        let g = line_graph();
        let mut c = g.copy();
        c.set_arc_weight(LocationId(0), LocationId(1), 7.0).unwrap();
        assert_eq!(c.arc_weight(LocationId(0), LocationId(1)), Some(7.0));
        assert_eq!(g.arc_weight(LocationId(0), LocationId(1)), Some(1.0));
    }

    #[test]
    fn set_weight_requires_existing_arc() {
        let mut g = line_graph();
        assert_eq!(
            g.set_arc_weight(LocationId(0), LocationId(2), 1.0).unwrap_err(),
            GraphError::NoArc { from: LocationId(0), to: LocationId(2) }
        );
    }

    proptest! {
        #[test]
        fn copy_is_independent(
            n in 2usize..12,
            seed in any::<u64>(),
            new_weight in 0.0f64..10.0,
        ) {
            let mut rng = SimRng::new(seed);
            let edges = n * (n - 1) / 2;
            let g = LocationGraph::random(n, edges, &mut rng).unwrap();
            let before = g.clone();
            let mut c = g.copy();
            for from in c.locations().collect::<Vec<_>>() {
                for to in c.neighbors(from).to_vec() {
                    c.set_arc_weight(from, to, new_weight + 1.0).unwrap();
                }
            }
            prop_assert_eq!(&g, &before);
            prop_assert_eq!(c.arc_count(), g.arc_count());
        }
    }
}
