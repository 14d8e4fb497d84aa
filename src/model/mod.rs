//! # Feature Data Model
//!
//! Clean DTOs that define what the feature units consume and produce.
//! These types cross every boundary: algorithm backend ↔ session ↔
//! feature units ↔ registry ↔ export.
//!
//! Design rule: this module is pure data — no I/O, no state, no backend
//! types. The only petgraph coupling lives in `crate::algo::petgraph`.

pub mod table;
pub mod value;

pub use table::{PairwiseTable, PathHops, PathTable};
pub use value::{FeatureValue, InterpretabilityScore, StatCategory};

use serde::{Deserialize, Serialize};

/// Opaque node identifier.
///
/// The default backend maps `petgraph::graph::NodeIndex` 1:1 onto this;
/// any other backend may use whatever numbering it likes, as long as the
/// graph's enumeration and the algorithm output agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the feature units need from a graph beyond the algorithm calls.
///
/// `nodes()` fixes the enumeration order: per-node distributions are
/// emitted in this order, and it defines both axes of a [`PairwiseTable`].
/// Graphs are borrowed read-only for the duration of feature computation.
pub trait GraphTopology {
    fn node_count(&self) -> usize;

    /// Node enumeration. One entry per node; no further ordering guarantee
    /// beyond being stable for an unmodified graph instance.
    fn nodes(&self) -> Vec<NodeId>;
}
