//! JSON export of evaluated features.
//!
//! One graph's evaluated features serialize to a JSON array; an external
//! orchestrator stacks these rows into the graphs × features matrix.
//!
//! ```text
//! FeatureExtractor::extract() → Vec<EvaluatedFeature> → export_json()
//!   → one row of the downstream feature matrix
//! ```

use std::io::Write;

use serde::Serialize;

use crate::model::{FeatureValue, StatCategory};
use crate::registry::FeatureDescriptor;
use crate::Result;

/// One evaluated feature with its metadata, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedFeature {
    pub name: &'static str,
    pub description: &'static str,
    pub interpretability: u8,
    pub category: StatCategory,
    pub value: FeatureValue,
}

impl EvaluatedFeature {
    pub fn new<G>(descriptor: &FeatureDescriptor<G>, value: FeatureValue) -> Self {
        Self {
            name: descriptor.name(),
            description: descriptor.description(),
            interpretability: descriptor.interpretability().get(),
            category: descriptor.category(),
            value,
        }
    }
}

/// Serialize evaluated features as a pretty-printed JSON array.
pub fn export_json(features: &[EvaluatedFeature]) -> Result<String> {
    Ok(serde_json::to_string_pretty(features)?)
}

/// Write evaluated features as JSON to `writer`, newline-terminated.
pub fn export_json_to(writer: &mut dyn Write, features: &[EvaluatedFeature]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, features)?;
    writer.write_all(b"\n")?;
    Ok(())
}
