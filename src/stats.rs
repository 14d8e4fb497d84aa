//! Scalar reductions: mean, population standard deviation, median.
//!
//! These mirror numpy's `mean`/`std`/`median` conventions: `std` divides
//! by N (population form, not the N-1 sample form), and the median of an
//! even-length input averages the two middle values.

use serde::Serialize;

/// The three summary scalars reported by table-reducing features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub std: f64,
    pub median: f64,
}

impl SummaryStats {
    pub const ZERO: SummaryStats = SummaryStats {
        mean: 0.0,
        std: 0.0,
        median: 0.0,
    };
}

/// Summarize `values` into mean / population std / median.
///
/// Empty input yields [`SummaryStats::ZERO`]: degenerate graphs (zero or
/// one node) produce empty or all-zero tables, and their statistics are
/// defined as zero rather than an error.
pub fn summarize(values: &[f64]) -> SummaryStats {
    if values.is_empty() {
        return SummaryStats::ZERO;
    }
    SummaryStats {
        mean: mean(values),
        std: population_std(values),
        median: median(values),
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

// ============================================================================
// Tests
// ============================================================================
