//! The algorithm seam.
//!
//! `GraphAlgorithms` is the contract between the feature units and
//! whatever library actually runs the graph algorithms. The units never
//! search a graph themselves — they aggregate what a backend hands them.
//!
//! The default backend lives in [`petgraph`](self::petgraph) and delegates
//! to `petgraph::algo`. Swap in any other backend (or a test double) by
//! implementing the trait for your graph type.

pub mod petgraph;

pub use self::petgraph::PetgraphAlgorithms;

use hashbrown::HashMap;

use crate::model::{NodeId, PathTable};
use crate::Result;

/// Minimum node-cut size per ordered pair of distinct nodes: the number
/// of nodes (excluding the endpoints) whose removal disconnects the pair.
pub type ConnectivityTable = HashMap<(NodeId, NodeId), u32>;

/// Algorithm primitives the feature units aggregate over.
pub trait GraphAlgorithms {
    /// The graph representation this backend computes on.
    type Graph;

    /// One shortest path per reachable ordered pair, self-paths included.
    ///
    /// Every node the graph enumerates must appear as a source with at
    /// least its self-path. Unreachable targets are simply absent. This is
    /// the expensive call — at least O(V·(V+E)) — and is memoized per
    /// session by [`crate::EvalSession`].
    fn all_pairs_shortest_paths(&self, graph: &Self::Graph) -> Result<PathTable>;

    /// Pairwise node connectivity for ordered pairs of distinct nodes.
    ///
    /// Pairs in different components may be reported as 0 or omitted; the
    /// dense table materialization defaults them to 0 either way. Failures
    /// surface as [`crate::Error::Algorithm`] and are never turned into
    /// partial statistics.
    fn all_pairs_node_connectivity(&self, graph: &Self::Graph) -> Result<ConnectivityTable>;
}
