//! Property tests over randomly generated small graphs.

use std::sync::Arc;

use graphfeat::{EvalSession, NodeId, PetgraphAlgorithms, ShortestPathFeatures};
use petgraph::graph::UnGraph;
use proptest::prelude::*;

fn build_graph(n: usize, edges: &[(usize, usize)]) -> UnGraph<(), ()> {
    let mut g = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
    for &(a, b) in edges {
        if a < n && b < n && a != b {
            g.add_edge(nodes[a], nodes[b], ());
        }
    }
    g
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // The dense connectivity table always has N^2 cells with a zero
    // diagonal, and its statistics stay within the table's range.
    #[test]
    fn connectivity_table_shape_and_stat_bounds(
        n in 1usize..6,
        edges in prop::collection::vec((0usize..6, 0usize..6), 0..12),
    ) {
        let g = build_graph(n, &edges);
        let algo = PetgraphAlgorithms::<(), ()>::new();
        let mut session = EvalSession::new();
        let table = session.connectivity(&algo, &g).unwrap();

        prop_assert_eq!(table.dim(), n);
        prop_assert_eq!(table.cells().len(), n * n);
        for i in 0..n {
            prop_assert_eq!(table.get(NodeId(i as u64), NodeId(i as u64)), Some(0.0));
        }

        let stats = table.summary();
        let min = table.cells().iter().copied().fold(f64::INFINITY, f64::min);
        let max = table.cells().iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(stats.mean >= 0.0);
        prop_assert!(stats.std >= 0.0);
        prop_assert!(stats.median >= min && stats.median <= max);
    }

    // The mean over a node's shortest-path lengths never exceeds the
    // largest of them, and both distributions have one entry per node.
    #[test]
    fn largest_shortest_path_dominates_mean(
        n in 1usize..6,
        edges in prop::collection::vec((0usize..6, 0usize..6), 0..12),
    ) {
        let g = build_graph(n, &edges);
        let unit = ShortestPathFeatures::new(Arc::new(PetgraphAlgorithms::<(), ()>::new()));
        let mut session = EvalSession::new();

        let largest = unit.largest_per_node(&mut session, &g).unwrap();
        let mean = unit.mean_per_node(&mut session, &g).unwrap();

        prop_assert_eq!(largest.len(), n);
        prop_assert_eq!(mean.len(), n);
        for (l, m) in largest.iter().zip(&mean) {
            prop_assert!(*l >= 1.0, "self-path guarantees hop count >= 1");
            prop_assert!(l >= m, "largest {} below mean {}", l, m);
        }
    }
}
