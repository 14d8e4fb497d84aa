//! The feature registry: ordered, metadata-carrying feature records.
//!
//! Each record binds a stable name, a description, an interpretability
//! score and a statistic-category tag to a reduction function. Units
//! populate the registry once at setup; the orchestrator iterates it
//! directly — there is no lookup by name on the evaluation path.

use std::fmt;

use crate::model::{FeatureValue, InterpretabilityScore, StatCategory};
use crate::session::EvalSession;
use crate::Result;

/// The reduction bound to one named feature.
pub type ComputeFn<G> = Box<dyn Fn(&mut EvalSession, &G) -> Result<FeatureValue> + Send + Sync>;

/// One named feature: metadata plus its reduction function.
///
/// Registered once per unit at setup time, evaluated once per graph; the
/// result is either a single scalar or a full per-node distribution.
pub struct FeatureDescriptor<G> {
    name: &'static str,
    description: &'static str,
    interpretability: InterpretabilityScore,
    category: StatCategory,
    compute: ComputeFn<G>,
}

impl<G> FeatureDescriptor<G> {
    pub fn new(
        name: &'static str,
        compute: ComputeFn<G>,
        description: &'static str,
        interpretability: InterpretabilityScore,
        category: StatCategory,
    ) -> Self {
        Self {
            name,
            description,
            interpretability,
            category,
            compute,
        }
    }

    /// Run the reduction against one graph. Backend failures propagate
    /// unchanged; a descriptor never substitutes a default value.
    pub fn evaluate(&self, session: &mut EvalSession, graph: &G) -> Result<FeatureValue> {
        (self.compute)(session, graph)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn interpretability(&self) -> InterpretabilityScore {
        self.interpretability
    }

    pub fn category(&self) -> StatCategory {
        self.category
    }
}

impl<G> fmt::Debug for FeatureDescriptor<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureDescriptor")
            .field("name", &self.name)
            .field("interpretability", &self.interpretability)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Ordered sequence of feature records for one graph type.
#[derive(Debug)]
pub struct FeatureRegistry<G> {
    entries: Vec<FeatureDescriptor<G>>,
}

impl<G> FeatureRegistry<G> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, descriptor: FeatureDescriptor<G>) {
        self.entries.push(descriptor);
    }

    /// Register a feature. Argument order mirrors the historical
    /// `add_feature(name, fn, description, score, statistics)` shape.
    pub fn add_feature<F>(
        &mut self,
        name: &'static str,
        compute: F,
        description: &'static str,
        interpretability: InterpretabilityScore,
        category: StatCategory,
    ) where
        F: Fn(&mut EvalSession, &G) -> Result<FeatureValue> + Send + Sync + 'static,
    {
        self.add(FeatureDescriptor::new(
            name,
            Box::new(compute),
            description,
            interpretability,
            category,
        ));
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureDescriptor<G>> {
        self.entries.iter()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<G> Default for FeatureRegistry<G> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
