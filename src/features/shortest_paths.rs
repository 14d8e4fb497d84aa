//! Shortest-path statistics.
//!
//! Both features reduce the session-cached all-pairs shortest-path table
//! to one value per node, emitted in graph enumeration order. Hop counts
//! are measured in nodes with both endpoints included — the trivial
//! self-path counts 1, a single edge counts 2 — so on the path graph
//! 0-1-2-3-4 the largest shortest path per node is `[5, 4, 3, 4, 5]`.
//!
//! Unreachable targets are absent from the table and excluded from the
//! aggregation (never zero-defaulted — the deliberate asymmetry with the
//! connectivity unit's dense table).

use std::sync::Arc;

use crate::algo::GraphAlgorithms;
use crate::features::FeatureUnit;
use crate::model::{FeatureValue, GraphTopology, InterpretabilityScore, StatCategory};
use crate::registry::FeatureRegistry;
use crate::session::EvalSession;
use crate::{Error, Result};

/// Per-node statistics derived from shortest paths to all other nodes.
pub struct ShortestPathFeatures<A> {
    algo: Arc<A>,
}

impl<A> ShortestPathFeatures<A>
where
    A: GraphAlgorithms,
    A::Graph: GraphTopology,
{
    pub fn new(algo: Arc<A>) -> Self {
        Self { algo }
    }

    /// For each node, the hop count of its longest shortest path.
    /// At least 1 for every node, via the self-path.
    pub fn largest_per_node(
        &self,
        session: &mut EvalSession,
        graph: &A::Graph,
    ) -> Result<Vec<f64>> {
        per_node(self.algo.as_ref(), session, graph, largest)
    }

    /// For each node, the arithmetic mean hop count over all its shortest
    /// paths (self-path included, unreachable targets excluded).
    pub fn mean_per_node(&self, session: &mut EvalSession, graph: &A::Graph) -> Result<Vec<f64>> {
        per_node(self.algo.as_ref(), session, graph, mean_hops)
    }
}

impl<A> FeatureUnit<A::Graph> for ShortestPathFeatures<A>
where
    A: GraphAlgorithms + Send + Sync + 'static,
    A::Graph: GraphTopology,
{
    fn name(&self) -> &'static str {
        "shortest_paths"
    }

    fn register(&self, registry: &mut FeatureRegistry<A::Graph>) {
        let algo = Arc::clone(&self.algo);
        registry.add_feature(
            "largest_shortest_path",
            move |session, graph| {
                Ok(FeatureValue::Distribution(per_node(
                    algo.as_ref(),
                    session,
                    graph,
                    largest,
                )?))
            },
            "For each node we compute the shortest paths to every other node. \
             We then find the longest 'shortest path' for each node.",
            InterpretabilityScore::new(3),
            StatCategory::Centrality,
        );

        let algo = Arc::clone(&self.algo);
        registry.add_feature(
            "mean_shortest_path",
            move |session, graph| {
                Ok(FeatureValue::Distribution(per_node(
                    algo.as_ref(),
                    session,
                    graph,
                    mean_hops,
                )?))
            },
            "For each node we compute the shortest paths to every other node. \
             We then find the mean of the 'shortest paths' for each node.",
            InterpretabilityScore::new(3),
            StatCategory::Centrality,
        );
    }
}

/// Reduce the hop counts rooted at each node, in graph enumeration order.
///
/// A node the graph enumerates but the table omits is a backend contract
/// violation, surfaced as [`Error::MissingNode`].
fn per_node<A>(
    algo: &A,
    session: &mut EvalSession,
    graph: &A::Graph,
    reduce: fn(&[usize]) -> f64,
) -> Result<Vec<f64>>
where
    A: GraphAlgorithms,
    A::Graph: GraphTopology,
{
    let table = session.shortest_paths(algo, graph)?;
    let nodes = graph.nodes();
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        let paths = table.from_source(node).ok_or(Error::MissingNode(node))?;
        let lengths: Vec<usize> = paths.values().map(|p| p.len()).collect();
        out.push(reduce(&lengths));
    }
    Ok(out)
}

fn largest(lengths: &[usize]) -> f64 {
    lengths.iter().copied().max().unwrap_or(0) as f64
}

fn mean_hops(lengths: &[usize]) -> f64 {
    if lengths.is_empty() {
        return 0.0;
    }
    lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_of_lengths() {
        assert_eq!(largest(&[1, 4, 2]), 4.0);
        assert_eq!(largest(&[]), 0.0);
    }

    #[test]
    fn test_mean_of_lengths() {
        assert_eq!(mean_hops(&[1, 2, 3]), 2.0);
        assert_eq!(mean_hops(&[]), 0.0);
    }

    #[test]
    fn test_largest_never_below_mean() {
        let lengths = [1, 2, 3, 4, 5];
        assert!(largest(&lengths) >= mean_hops(&lengths));
    }
}
