//! # graphfeat — Graph-theoretic feature aggregation
//!
//! Computes graph-theoretic numerical features (node-connectivity statistics,
//! shortest-path statistics) for single graphs, producing named scalars or
//! per-node distributions with interpretability metadata. An external
//! orchestrator collects these into a graphs × features matrix for
//! downstream classification.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphAlgorithms` is the contract between feature
//!    units and the algorithm backend
//! 2. **Clean DTOs**: `NodeId`, `PathTable`, `PairwiseTable`, `FeatureValue`
//!    cross all boundaries
//! 3. **Aggregation, not algorithms**: shortest-path search and max flow are
//!    delegated to `petgraph`; this crate reduces their output to statistics
//! 4. **Ordered registry**: features are registered once with metadata and
//!    iterated directly — no name lookup on the evaluation path
//!
//! ## Quick Start
//!
//! ```rust
//! use graphfeat::{FeatureExtractor, PetgraphAlgorithms};
//! use petgraph::graph::UnGraph;
//!
//! # fn example() -> graphfeat::Result<()> {
//! // Path graph 0-1-2-3-4
//! let mut graph = UnGraph::<(), ()>::new_undirected();
//! let nodes: Vec<_> = (0..5).map(|_| graph.add_node(())).collect();
//! for pair in nodes.windows(2) {
//!     graph.add_edge(pair[0], pair[1], ());
//! }
//!
//! let mut extractor = FeatureExtractor::new(PetgraphAlgorithms::new());
//! for feature in extractor.extract(&graph)? {
//!     println!("{} = {:?}", feature.name, feature.value);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Feature Units
//!
//! | Unit | Features | Output |
//! |------|----------|--------|
//! | Node connectivity | `node_connectivity_{mean,std,median}` | scalars over the full N×N table |
//! | Shortest paths | `largest_shortest_path`, `mean_shortest_path` | per-node distributions |
//!
//! Hop counts are measured in nodes, endpoints included: the trivial
//! self-path has hop count 1. The connectivity statistics deliberately
//! include the always-zero diagonal, matching the historical aggregation
//! this crate reproduces.

// ============================================================================
// Modules
// ============================================================================

pub mod algo;
pub mod export;
pub mod features;
pub mod model;
pub mod registry;
pub mod session;
pub mod stats;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    FeatureValue, GraphTopology, InterpretabilityScore, NodeId, PairwiseTable, PathHops,
    PathTable, StatCategory,
};

// ============================================================================
// Re-exports: Algorithm seam
// ============================================================================

pub use algo::{ConnectivityTable, GraphAlgorithms, PetgraphAlgorithms};

// ============================================================================
// Re-exports: Registry and feature units
// ============================================================================

pub use features::{FeatureUnit, NodeConnectivityFeatures, ShortestPathFeatures};
pub use registry::{FeatureDescriptor, FeatureRegistry};
pub use session::EvalSession;

// ============================================================================
// Re-exports: Statistics and export
// ============================================================================

pub use export::{export_json, export_json_to, EvaluatedFeature};
pub use stats::SummaryStats;

use std::sync::Arc;

// ============================================================================
// Top-level extractor handle
// ============================================================================

/// The primary entry point. A `FeatureExtractor` owns a registry with both
/// feature units registered and evaluates every named feature against one
/// graph at a time.
pub struct FeatureExtractor<A: GraphAlgorithms> {
    registry: FeatureRegistry<A::Graph>,
    session: EvalSession,
}

impl<A> FeatureExtractor<A>
where
    A: GraphAlgorithms + Send + Sync + 'static,
    A::Graph: GraphTopology,
{
    /// Build an extractor over the given algorithm backend, registering the
    /// node-connectivity unit followed by the shortest-path unit.
    pub fn new(algo: A) -> Self {
        let algo = Arc::new(algo);
        let mut registry = FeatureRegistry::new();
        let connectivity = NodeConnectivityFeatures::new(Arc::clone(&algo));
        tracing::debug!(unit = connectivity.name(), "registering feature unit");
        connectivity.register(&mut registry);
        let shortest_paths = ShortestPathFeatures::new(algo);
        tracing::debug!(unit = shortest_paths.name(), "registering feature unit");
        shortest_paths.register(&mut registry);
        Self {
            registry,
            session: EvalSession::new(),
        }
    }

    /// The registered feature descriptors, in evaluation order.
    pub fn registry(&self) -> &FeatureRegistry<A::Graph> {
        &self.registry
    }

    /// Evaluate every registered feature against `graph`.
    ///
    /// Expensive algorithm results are shared within the call through the
    /// session cache; the cache is cleared before returning, on success and
    /// on error alike. A failing feature aborts extraction for this graph —
    /// no partial statistics are reported.
    pub fn extract(&mut self, graph: &A::Graph) -> Result<Vec<EvaluatedFeature>> {
        let outcome = self.run(graph);
        self.session.clear();
        outcome
    }

    fn run(&mut self, graph: &A::Graph) -> Result<Vec<EvaluatedFeature>> {
        let mut out = Vec::with_capacity(self.registry.len());
        for descriptor in self.registry.iter() {
            tracing::debug!(feature = descriptor.name(), "evaluating feature");
            let value = descriptor.evaluate(&mut self.session, graph)?;
            out.push(EvaluatedFeature::new(descriptor, value));
        }
        Ok(out)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The algorithm backend failed (degenerate input, internal
    /// inconsistency). Never masked into a default value.
    #[error("graph algorithm failed: {0}")]
    Algorithm(String),

    /// The backend's output omits a node the graph enumerates.
    #[error("algorithm output is missing node {0}")]
    MissingNode(NodeId),

    /// The backend's output names a node the graph does not enumerate.
    #[error("algorithm output names unknown node {0}")]
    UnknownNode(NodeId),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
