//! Result tables produced by the algorithm backend.
//!
//! `PathTable` keeps the backend's all-pairs shortest-path output in its
//! natural sparse shape (unreachable pairs simply absent). `PairwiseTable`
//! is the opposite: a dense N×N materialization where every unreported
//! pair, the diagonal included, defaults to 0.

use hashbrown::HashMap;
use smallvec::SmallVec;

use super::NodeId;
use crate::stats::{self, SummaryStats};
use crate::{Error, Result};

/// Node sequence of one shortest path, both endpoints included.
pub type PathHops = SmallVec<[NodeId; 8]>;

// ============================================================================
// PathTable
// ============================================================================

/// All-pairs shortest-path result: source → (target → path).
///
/// Contract for producers: every node the graph enumerates appears as a
/// source, with at least its trivial self-path (`[u]`). Unreachable
/// targets are absent, never zero-filled.
///
/// The hop count of a path is the number of nodes on it, endpoints
/// included: self-path = 1, a single edge = 2.
#[derive(Debug, Clone, Default)]
pub struct PathTable {
    paths: HashMap<NodeId, HashMap<NodeId, PathHops>>,
}

impl PathTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: NodeId, target: NodeId, path: PathHops) {
        self.paths.entry(source).or_default().insert(target, path);
    }

    /// All paths rooted at `source`, or `None` if the backend reported
    /// nothing for it (a contract violation for enumerated nodes).
    pub fn from_source(&self, source: NodeId) -> Option<&HashMap<NodeId, PathHops>> {
        self.paths.get(&source)
    }

    /// Hop count of the shortest path `source → target`; `None` when
    /// `target` is unreachable.
    pub fn hop_count(&self, source: NodeId, target: NodeId) -> Option<usize> {
        self.paths.get(&source)?.get(&target).map(SmallVec::len)
    }

    /// Number of sources with at least one recorded path.
    pub fn source_count(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

// ============================================================================
// PairwiseTable
// ============================================================================

/// Dense N×N table over a fixed node enumeration, zero-initialized.
///
/// Pairs the backend does not report — self-pairs above all — stay 0.
/// Statistics reduce over all N² cells, so the zero diagonal participates;
/// this pulls the mean down as N grows and is kept deliberately for
/// compatibility with the aggregation this crate reproduces.
#[derive(Debug, Clone)]
pub struct PairwiseTable {
    dim: usize,
    index: HashMap<NodeId, usize>,
    values: Vec<f64>,
}

impl PairwiseTable {
    /// An all-zero table with both axes in `nodes` enumeration order.
    pub fn zeroed(nodes: &[NodeId]) -> Self {
        let dim = nodes.len();
        let index = nodes.iter().copied().enumerate().map(|(i, n)| (n, i)).collect();
        Self {
            dim,
            index,
            values: vec![0.0; dim * dim],
        }
    }

    /// Materialize a pairwise mapping into a dense table.
    ///
    /// Fails with [`Error::UnknownNode`] if the mapping names a node
    /// outside the enumeration.
    pub fn from_pairs(
        nodes: &[NodeId],
        pairs: impl IntoIterator<Item = ((NodeId, NodeId), f64)>,
    ) -> Result<Self> {
        let mut table = Self::zeroed(nodes);
        for ((u, v), value) in pairs {
            table.set(u, v, value)?;
        }
        Ok(table)
    }

    pub fn set(&mut self, u: NodeId, v: NodeId, value: f64) -> Result<()> {
        let i = self.position(u)?;
        let j = self.position(v)?;
        self.values[i * self.dim + j] = value;
        Ok(())
    }

    pub fn get(&self, u: NodeId, v: NodeId) -> Option<f64> {
        let i = *self.index.get(&u)?;
        let j = *self.index.get(&v)?;
        Some(self.values[i * self.dim + j])
    }

    fn position(&self, node: NodeId) -> Result<usize> {
        self.index.get(&node).copied().ok_or(Error::UnknownNode(node))
    }

    /// Table dimension N (the node count it was built with).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// All N² cells, row-major in enumeration order.
    pub fn cells(&self) -> &[f64] {
        &self.values
    }

    /// Mean, population std and median over all N² cells (zero diagonal
    /// included). An empty table yields all-zero statistics.
    pub fn summary(&self) -> SummaryStats {
        stats::summarize(&self.values)
    }
}

// ============================================================================
// Tests
// ============================================================================
