//! Per-evaluation memoization of algorithm results.

use std::sync::Arc;

use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::algo::GraphAlgorithms;
use crate::model::{GraphTopology, PairwiseTable, PathTable};
use crate::Result;

/// Memoizes expensive backend results for the lifetime of one evaluation
/// session.
///
/// Keys are graph *identity* (the reference address), not content: two
/// structurally identical graph instances get independent entries. Entries
/// are never evicted — graphs are treated as immutable once cached — and
/// there is no size bound; memory is the accepted price for computation
/// reuse, which holds because sessions are short-lived and scoped to one
/// batch of evaluations. Call [`clear`](EvalSession::clear) (or drop the
/// session) when the batch ends.
///
/// The session takes `&mut self` and is not meant to be shared across
/// threads; callers parallelizing across graphs use one session each.
#[derive(Debug, Default)]
pub struct EvalSession {
    paths: HashMap<usize, Arc<PathTable>>,
    connectivity: HashMap<usize, Arc<PairwiseTable>>,
}

impl EvalSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// All-pairs shortest paths for `graph`, computed through `algo` at
    /// most once per session per graph instance. Both shortest-path
    /// features read the same cached table.
    pub fn shortest_paths<A>(&mut self, algo: &A, graph: &A::Graph) -> Result<Arc<PathTable>>
    where
        A: GraphAlgorithms,
    {
        let key = graph_key(graph);
        if let Some(table) = self.paths.get(&key) {
            trace!(key, "shortest-path cache hit");
            return Ok(Arc::clone(table));
        }
        debug!(key, "shortest-path cache miss, invoking backend");
        let table = Arc::new(algo.all_pairs_shortest_paths(graph)?);
        self.paths.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// Dense pairwise connectivity table for `graph`, one backend call per
    /// session per graph instance. The three connectivity statistics of
    /// one registry sweep share this table; it is never read by any other
    /// unit.
    pub fn connectivity<A>(&mut self, algo: &A, graph: &A::Graph) -> Result<Arc<PairwiseTable>>
    where
        A: GraphAlgorithms,
        A::Graph: GraphTopology,
    {
        let key = graph_key(graph);
        if let Some(table) = self.connectivity.get(&key) {
            trace!(key, "connectivity cache hit");
            return Ok(Arc::clone(table));
        }
        debug!(key, "connectivity cache miss, invoking backend");
        let pairs = algo.all_pairs_node_connectivity(graph)?;
        let nodes = graph.nodes();
        let table = PairwiseTable::from_pairs(
            &nodes,
            pairs.iter().map(|(&pair, &k)| (pair, f64::from(k))),
        )?;
        let table = Arc::new(table);
        self.connectivity.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// Drop every cached table. The session ends here; reuse after `clear`
    /// starts a fresh one.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.connectivity.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.connectivity.is_empty()
    }
}

fn graph_key<G>(graph: &G) -> usize {
    graph as *const G as usize
}

// ============================================================================
// Tests
// ============================================================================
