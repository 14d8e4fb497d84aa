//! Feature values and metadata tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What one named feature evaluates to on one graph.
///
/// Scalar features are already reduced; distribution features hand the
/// orchestrator one value per node (in graph enumeration order) for
/// whatever further reduction it applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FeatureValue {
    Scalar(f64),
    Distribution(Vec<f64>),
}

impl FeatureValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Distribution(_) => None,
        }
    }

    pub fn as_distribution(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Distribution(values) => Some(values),
        }
    }
}

/// How human-interpretable a feature is, from 1 (opaque) to 5 (obvious).
///
/// Used downstream for feature selection, never computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterpretabilityScore(u8);

impl InterpretabilityScore {
    /// Scores are clamped to 1..=5.
    pub fn new(score: u8) -> Self {
        Self(score.clamp(1, 5))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for InterpretabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// Statistic-category tag attached to each named feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    Connectivity,
    Centrality,
}

impl StatCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connectivity => "connectivity",
            Self::Centrality => "centrality",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
