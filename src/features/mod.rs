//! The feature units.
//!
//! A unit is one cohesive class of related named features computed from
//! the same underlying algorithm family. Units share nothing beyond the
//! registration contract; an orchestrator instantiates each one, lets it
//! register, and iterates the registry per graph.

pub mod connectivity;
pub mod shortest_paths;

pub use connectivity::NodeConnectivityFeatures;
pub use shortest_paths::ShortestPathFeatures;

use crate::registry::FeatureRegistry;

/// The contract between a feature unit and the registry.
pub trait FeatureUnit<G> {
    /// Short unit name, for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Append this unit's feature descriptors, in a stable order.
    fn register(&self, registry: &mut FeatureRegistry<G>);
}
