//! petgraph-backed algorithm backend.
//!
//! This is the reference implementation of `GraphAlgorithms`, computing on
//! `petgraph::graph::UnGraph`. The searches themselves are petgraph's:
//!
//! | Primitive | Delegated to | Local work |
//! |-----------|--------------|------------|
//! | all-pairs shortest paths | `petgraph::algo::dijkstra` (unit cost, per source) | path reconstruction from the distance map |
//! | pairwise node connectivity | `petgraph::algo::ford_fulkerson` | vertex-split reduction to unit-capacity max flow |
//!
//! Node connectivity follows Menger's theorem: κ(u, v) equals the number
//! of internally vertex-disjoint u–v paths. Each node other than the
//! endpoints becomes an in/out arc of capacity 1; each undirected edge
//! becomes two arcs of effectively unbounded capacity. Adjacent pairs are
//! evaluated on the graph without the direct edge, plus one. Self-loops
//! never separate a pair and are ignored.
//!
//! Cost: O(V) dijkstra runs for the paths, O(V²) max-flow runs for the
//! connectivity table. Fine for the small graphs of a feature-matrix
//! workload; long computations on dense graphs run to completion, there is
//! no timeout.

use std::marker::PhantomData;

use hashbrown::HashMap;
use petgraph::algo::{dijkstra, ford_fulkerson};
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use smallvec::smallvec;
use tracing::debug;

use crate::algo::{ConnectivityTable, GraphAlgorithms};
use crate::model::{GraphTopology, NodeId, PathHops, PathTable};
use crate::{Error, Result};

impl<N, E> GraphTopology for UnGraph<N, E> {
    fn node_count(&self) -> usize {
        self.node_indices().len()
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.node_indices().map(node_id).collect()
    }
}

/// Default `GraphAlgorithms` backend over `petgraph::graph::UnGraph`.
pub struct PetgraphAlgorithms<N = (), E = ()> {
    _graph: PhantomData<fn() -> (N, E)>,
}

impl<N, E> PetgraphAlgorithms<N, E> {
    pub fn new() -> Self {
        Self {
            _graph: PhantomData,
        }
    }
}

impl<N, E> Default for PetgraphAlgorithms<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> GraphAlgorithms for PetgraphAlgorithms<N, E> {
    type Graph = UnGraph<N, E>;

    fn all_pairs_shortest_paths(&self, graph: &UnGraph<N, E>) -> Result<PathTable> {
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "computing all-pairs shortest paths"
        );
        let mut table = PathTable::new();
        for source in graph.node_indices() {
            let dist: HashMap<NodeIndex, usize> =
                dijkstra(graph, source, None, |_| 1usize).into_iter().collect();
            for (&target, &hops) in &dist {
                let path = reconstruct_path(graph, &dist, source, target, hops)?;
                table.insert(node_id(source), node_id(target), path);
            }
        }
        Ok(table)
    }

    fn all_pairs_node_connectivity(&self, graph: &UnGraph<N, E>) -> Result<ConnectivityTable> {
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "computing all-pairs node connectivity"
        );
        let nodes: Vec<NodeIndex> = graph.node_indices().collect();
        let mut table = ConnectivityTable::default();
        for (i, &u) in nodes.iter().enumerate() {
            for &v in &nodes[i + 1..] {
                let k = local_node_connectivity(graph, u, v);
                // undirected: symmetric, reported for both orderings
                table.insert((node_id(u), node_id(v)), k);
                table.insert((node_id(v), node_id(u)), k);
            }
        }
        Ok(table)
    }
}

fn node_id(ix: NodeIndex) -> NodeId {
    NodeId(ix.index() as u64)
}

/// Walk back from `target` through neighbors of strictly decreasing
/// distance. Yields the node sequence source..=target; `hops` is the edge
/// distance reported by dijkstra, so the path has `hops + 1` nodes.
fn reconstruct_path<N, E>(
    graph: &UnGraph<N, E>,
    dist: &HashMap<NodeIndex, usize>,
    source: NodeIndex,
    target: NodeIndex,
    hops: usize,
) -> Result<PathHops> {
    let mut path: PathHops = smallvec![node_id(target)];
    let mut current = target;
    let mut remaining = hops;
    while current != source {
        if remaining == 0 {
            return Err(Error::Algorithm(format!(
                "distance map inconsistent at node {}",
                current.index()
            )));
        }
        let previous = graph
            .neighbors(current)
            .find(|n| dist.get(n) == Some(&(remaining - 1)))
            .ok_or_else(|| {
                Error::Algorithm(format!(
                    "no predecessor for node {} at distance {remaining}",
                    current.index()
                ))
            })?;
        path.push(node_id(previous));
        current = previous;
        remaining -= 1;
    }
    path.reverse();
    Ok(path)
}

/// κ(u, v): the number of internally vertex-disjoint u–v paths.
///
/// Vertex-split reduction: node x becomes x_in → x_out with capacity 1
/// (the endpoints get capacity n, which flow can never reach), and each
/// undirected edge {a, b} becomes a_out → b_in and b_out → a_in with
/// capacity n. The max-flow search is petgraph's `ford_fulkerson`.
fn local_node_connectivity<N, E>(graph: &UnGraph<N, E>, u: NodeIndex, v: NodeIndex) -> u32 {
    let adjacent = graph.find_edge(u, v).is_some();
    let n = graph.node_count() as u32;

    // split nodes: original index i becomes aux nodes 2i (in) and 2i+1 (out)
    let mut aux: DiGraph<(), u32> = DiGraph::new();
    for ix in graph.node_indices() {
        let node_in = aux.add_node(());
        let node_out = aux.add_node(());
        let cap = if ix == u || ix == v { n } else { 1 };
        aux.add_edge(node_in, node_out, cap);
    }
    let split_in = |ix: NodeIndex| NodeIndex::new(ix.index() * 2);
    let split_out = |ix: NodeIndex| NodeIndex::new(ix.index() * 2 + 1);

    for edge in graph.edge_references() {
        let (a, b) = (edge.source(), edge.target());
        if a == b {
            continue;
        }
        // adjacent pairs: κ is 1 + κ of the graph without the direct edge
        if adjacent && ((a == u && b == v) || (a == v && b == u)) {
            continue;
        }
        aux.add_edge(split_out(a), split_in(b), n);
        aux.add_edge(split_out(b), split_in(a), n);
    }

    let (flow, _) = ford_fulkerson(&aux, split_out(u), split_in(v));
    if adjacent { flow + 1 } else { flow }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: usize) -> UnGraph<(), ()> {
        let mut g = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
        for pair in nodes.windows(2) {
            g.add_edge(pair[0], pair[1], ());
        }
        g
    }

    fn triangle() -> UnGraph<(), ()> {
        let mut g = UnGraph::new_undirected();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, ());
        g.add_edge(b, c, ());
        g.add_edge(c, a, ());
        g
    }

    #[test]
    fn test_shortest_paths_on_path_graph() {
        let g = path_graph(3);
        let table = PetgraphAlgorithms::new().all_pairs_shortest_paths(&g).unwrap();

        assert_eq!(table.hop_count(NodeId(0), NodeId(0)), Some(1));
        assert_eq!(table.hop_count(NodeId(0), NodeId(1)), Some(2));
        assert_eq!(table.hop_count(NodeId(0), NodeId(2)), Some(3));
        assert_eq!(table.hop_count(NodeId(2), NodeId(0)), Some(3));
        assert_eq!(table.source_count(), 3);
    }

    #[test]
    fn test_shortest_paths_exclude_unreachable() {
        let mut g = UnGraph::<(), ()>::new_undirected();
        let a = g.add_node(());
        let _b = g.add_node(());
        let table = PetgraphAlgorithms::new().all_pairs_shortest_paths(&g).unwrap();

        // each node reaches only itself
        assert_eq!(table.hop_count(node_id(a), NodeId(0)), Some(1));
        assert_eq!(table.hop_count(NodeId(0), NodeId(1)), None);
        assert_eq!(table.hop_count(NodeId(1), NodeId(0)), None);
    }

    #[test]
    fn test_connectivity_of_triangle() {
        let g = triangle();
        let table = PetgraphAlgorithms::new().all_pairs_node_connectivity(&g).unwrap();

        // every pair of a triangle has two vertex-disjoint paths
        assert_eq!(table.len(), 6);
        for k in table.values() {
            assert_eq!(*k, 2);
        }
    }

    #[test]
    fn test_connectivity_of_path_graph() {
        let g = path_graph(3);
        let table = PetgraphAlgorithms::new().all_pairs_node_connectivity(&g).unwrap();

        // endpoints are separated by the middle node alone
        assert_eq!(table[&(NodeId(0), NodeId(2))], 1);
        assert_eq!(table[&(NodeId(2), NodeId(0))], 1);
        // adjacent pairs: the direct edge is the only independent path
        assert_eq!(table[&(NodeId(0), NodeId(1))], 1);
    }

    #[test]
    fn test_connectivity_of_isolated_pair() {
        let mut g = UnGraph::<(), ()>::new_undirected();
        g.add_node(());
        g.add_node(());
        let table = PetgraphAlgorithms::new().all_pairs_node_connectivity(&g).unwrap();

        assert_eq!(table[&(NodeId(0), NodeId(1))], 0);
        assert_eq!(table[&(NodeId(1), NodeId(0))], 0);
    }

    #[test]
    fn test_connectivity_ignores_self_loops() {
        let mut g = UnGraph::<(), ()>::new_undirected();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, a, ());
        g.add_edge(a, b, ());
        let table = PetgraphAlgorithms::new().all_pairs_node_connectivity(&g).unwrap();

        assert_eq!(table[&(NodeId(0), NodeId(1))], 1);
    }

    #[test]
    fn test_topology_enumeration() {
        let g = path_graph(4);
        assert_eq!(GraphTopology::node_count(&g), 4);
        assert_eq!(
            g.nodes(),
            vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]
        );
    }
}
