//! Caching contract, verified with a counting test double.
//!
//! The double implements `GraphAlgorithms` over a minimal graph type and
//! counts backend invocations: within one session each expensive call runs
//! at most once per graph instance, a cleared session recomputes, and
//! repeated extraction is deterministic.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use graphfeat::{
    ConnectivityTable, Error, FeatureExtractor, GraphAlgorithms, GraphTopology, NodeId, PathTable,
    Result,
};
use pretty_assertions::assert_eq;
use smallvec::smallvec;

// ============================================================================
// Test double
// ============================================================================

struct TinyGraph {
    nodes: Vec<NodeId>,
}

impl TinyGraph {
    fn of(n: u64) -> Self {
        Self {
            nodes: (0..n).map(NodeId).collect(),
        }
    }
}

impl GraphTopology for TinyGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.nodes.clone()
    }
}

#[derive(Clone, Default)]
struct Counters {
    paths: Arc<AtomicUsize>,
    connectivity: Arc<AtomicUsize>,
}

/// Serves a fixed chain topology: node i reaches nodes i..n-1, and every
/// adjacent ordered pair has connectivity 1.
struct CountingAlgo {
    counters: Counters,
}

impl GraphAlgorithms for CountingAlgo {
    type Graph = TinyGraph;

    fn all_pairs_shortest_paths(&self, graph: &TinyGraph) -> Result<PathTable> {
        self.counters.paths.fetch_add(1, Ordering::Relaxed);
        let mut table = PathTable::new();
        for (i, &u) in graph.nodes.iter().enumerate() {
            let mut hops = smallvec![u];
            table.insert(u, u, hops.clone());
            for &v in &graph.nodes[i + 1..] {
                hops.push(v);
                table.insert(u, v, hops.clone());
            }
        }
        Ok(table)
    }

    fn all_pairs_node_connectivity(&self, graph: &TinyGraph) -> Result<ConnectivityTable> {
        self.counters.connectivity.fetch_add(1, Ordering::Relaxed);
        let mut table = ConnectivityTable::default();
        for pair in graph.nodes.windows(2) {
            table.insert((pair[0], pair[1]), 1);
            table.insert((pair[1], pair[0]), 1);
        }
        Ok(table)
    }
}

// ============================================================================
// 1. One extraction, one backend call per primitive
// ============================================================================

#[test]
fn test_extract_invokes_each_primitive_once() {
    let counters = Counters::default();
    let mut extractor = FeatureExtractor::new(CountingAlgo {
        counters: counters.clone(),
    });
    let graph = TinyGraph::of(4);

    let features = extractor.extract(&graph).unwrap();
    assert_eq!(features.len(), 5);

    // three connectivity statistics share one call; two shortest-path
    // features share one call
    assert_eq!(counters.connectivity.load(Ordering::Relaxed), 1);
    assert_eq!(counters.paths.load(Ordering::Relaxed), 1);
}

// ============================================================================
// 2. The session ends with the extraction: a second graph pass recomputes
// ============================================================================

#[test]
fn test_second_extraction_recomputes() {
    let counters = Counters::default();
    let mut extractor = FeatureExtractor::new(CountingAlgo {
        counters: counters.clone(),
    });
    let graph = TinyGraph::of(3);

    extractor.extract(&graph).unwrap();
    extractor.extract(&graph).unwrap();

    assert_eq!(counters.paths.load(Ordering::Relaxed), 2);
    assert_eq!(counters.connectivity.load(Ordering::Relaxed), 2);
}

// ============================================================================
// 3. Determinism: repeated extraction yields identical results
// ============================================================================

#[test]
fn test_repeated_extraction_is_deterministic() {
    let mut extractor = FeatureExtractor::new(CountingAlgo {
        counters: Counters::default(),
    });
    let graph = TinyGraph::of(5);

    let first = extractor.extract(&graph).unwrap();
    let second = extractor.extract(&graph).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// 4. Chain topology sanity: the double's tables aggregate as expected
// ============================================================================

#[test]
fn test_chain_double_aggregation() {
    let mut extractor = FeatureExtractor::new(CountingAlgo {
        counters: Counters::default(),
    });
    let graph = TinyGraph::of(3);

    let features = extractor.extract(&graph).unwrap();
    let largest = features
        .iter()
        .find(|f| f.name == "largest_shortest_path")
        .unwrap()
        .value
        .as_distribution()
        .unwrap();
    // node 0 reaches [0,1,2], node 1 reaches [1,2], node 2 only itself
    assert_eq!(largest, &[3.0, 2.0, 1.0][..]);
}

// ============================================================================
// 5. A backend omitting an enumerated source is a hard error
// ============================================================================

/// Reports every source except the last enumerated node.
struct TruncatingAlgo;

impl GraphAlgorithms for TruncatingAlgo {
    type Graph = TinyGraph;

    fn all_pairs_shortest_paths(&self, graph: &TinyGraph) -> Result<PathTable> {
        let mut table = PathTable::new();
        for &u in &graph.nodes[..graph.nodes.len() - 1] {
            table.insert(u, u, smallvec![u]);
        }
        Ok(table)
    }

    fn all_pairs_node_connectivity(&self, _graph: &TinyGraph) -> Result<ConnectivityTable> {
        Ok(ConnectivityTable::default())
    }
}

#[test]
fn test_omitted_source_node_is_missing_node_error() {
    let mut extractor = FeatureExtractor::new(TruncatingAlgo);
    let graph = TinyGraph::of(3);

    let err = extractor.extract(&graph).unwrap_err();
    assert!(matches!(err, Error::MissingNode(NodeId(2))));
}

// ============================================================================
// 6. A failing backend aborts extraction and leaves no stale session behind
// ============================================================================

/// Fails `all_pairs_shortest_paths` a fixed number of times, then behaves
/// like `CountingAlgo`.
struct FlakyAlgo {
    inner: CountingAlgo,
    failures_remaining: AtomicUsize,
}

impl GraphAlgorithms for FlakyAlgo {
    type Graph = TinyGraph;

    fn all_pairs_shortest_paths(&self, graph: &TinyGraph) -> Result<PathTable> {
        if self.failures_remaining.load(Ordering::Relaxed) > 0 {
            self.failures_remaining.fetch_sub(1, Ordering::Relaxed);
            return Err(Error::Algorithm("search did not converge".into()));
        }
        self.inner.all_pairs_shortest_paths(graph)
    }

    fn all_pairs_node_connectivity(&self, graph: &TinyGraph) -> Result<ConnectivityTable> {
        self.inner.all_pairs_node_connectivity(graph)
    }
}

#[test]
fn test_failed_extraction_propagates_and_clears_the_session() {
    let counters = Counters::default();
    let mut extractor = FeatureExtractor::new(FlakyAlgo {
        inner: CountingAlgo {
            counters: counters.clone(),
        },
        failures_remaining: AtomicUsize::new(1),
    });
    let graph = TinyGraph::of(3);

    // connectivity succeeds and gets cached, then the shortest-path call
    // fails and aborts the whole extraction
    let err = extractor.extract(&graph).unwrap_err();
    assert!(matches!(err, Error::Algorithm(_)));
    assert_eq!(counters.connectivity.load(Ordering::Relaxed), 1);

    // the failed session left nothing behind: the successful retry
    // recomputes connectivity instead of serving a stale cached table
    let features = extractor.extract(&graph).unwrap();
    assert_eq!(features.len(), 5);
    assert_eq!(counters.connectivity.load(Ordering::Relaxed), 2);
    assert_eq!(counters.paths.load(Ordering::Relaxed), 1);
}
