//! Node-connectivity statistics.
//!
//! The backend reports, for every ordered pair of distinct nodes (u, v),
//! the minimum number of node removals disconnecting v from u. This unit
//! materializes those values into a dense N×N table — unreported pairs and
//! the diagonal default to 0 — and reduces **all N² cells** to mean,
//! population std and median.
//!
//! Known bias, kept on purpose: the always-zero diagonal participates in
//! the statistics, so the mean drifts low as N grows. Reductions over only
//! the off-diagonal cells would be the "fixed" variant; this unit
//! reproduces the historical behavior and flags it here instead.

use std::sync::Arc;

use crate::algo::GraphAlgorithms;
use crate::features::FeatureUnit;
use crate::model::{FeatureValue, GraphTopology, InterpretabilityScore, StatCategory};
use crate::registry::FeatureRegistry;
use crate::session::EvalSession;
use crate::stats::SummaryStats;
use crate::Result;

/// Summary statistics of all-pairs node connectivity.
pub struct NodeConnectivityFeatures<A> {
    algo: Arc<A>,
}

impl<A> NodeConnectivityFeatures<A>
where
    A: GraphAlgorithms,
    A::Graph: GraphTopology,
{
    pub fn new(algo: Arc<A>) -> Self {
        Self { algo }
    }

    /// Mean / population std / median over the full N×N connectivity
    /// table. Zero- and one-node graphs yield all-zero statistics.
    ///
    /// One backend call per session per graph; the three registered
    /// statistics share the cached table.
    pub fn summary(&self, session: &mut EvalSession, graph: &A::Graph) -> Result<SummaryStats> {
        let table = session.connectivity(self.algo.as_ref(), graph)?;
        Ok(table.summary())
    }
}

impl<A> FeatureUnit<A::Graph> for NodeConnectivityFeatures<A>
where
    A: GraphAlgorithms + Send + Sync + 'static,
    A::Graph: GraphTopology,
{
    fn name(&self) -> &'static str {
        "node_connectivity"
    }

    fn register(&self, registry: &mut FeatureRegistry<A::Graph>) {
        let algo = Arc::clone(&self.algo);
        registry.add_feature(
            "node_connectivity_mean",
            move |session, graph| {
                let table = session.connectivity(algo.as_ref(), graph)?;
                Ok(FeatureValue::Scalar(table.summary().mean))
            },
            "Mean of the pairwise node connectivity over the full N x N table: \
             on average, how many nodes must be removed to disconnect an ordered pair.",
            InterpretabilityScore::new(4),
            StatCategory::Connectivity,
        );

        let algo = Arc::clone(&self.algo);
        registry.add_feature(
            "node_connectivity_std",
            move |session, graph| {
                let table = session.connectivity(algo.as_ref(), graph)?;
                Ok(FeatureValue::Scalar(table.summary().std))
            },
            "Population standard deviation of the pairwise node connectivity \
             over the full N x N table.",
            InterpretabilityScore::new(3),
            StatCategory::Connectivity,
        );

        let algo = Arc::clone(&self.algo);
        registry.add_feature(
            "node_connectivity_median",
            move |session, graph| {
                let table = session.connectivity(algo.as_ref(), graph)?;
                Ok(FeatureValue::Scalar(table.summary().median))
            },
            "Median of the pairwise node connectivity over the full N x N table.",
            InterpretabilityScore::new(4),
            StatCategory::Connectivity,
        );
    }
}
