//! Isolation Forest outlier detection for 1-D series
//!
//! Scoring is done by the `extended-isolation-forest` crate (extension level
//! 0, which is the classic axis-parallel forest). This adapter rescales the
//! series onto `[0, 1]`, applies the contamination cut-off and returns the
//! outlier indices.

use std::panic::{self, AssertUnwindSafe};

use extended_isolation_forest::{Forest, ForestOptions};

use crate::error::{ServiceError, ServiceResult};
use crate::traits::OutlierDetector;
use crate::types::IsolationParams;

pub const DEFAULT_TREES: usize = 200;
pub const DEFAULT_MAX_SAMPLES: usize = 256;

/// Isolation Forest backed outlier detector
#[derive(Debug, Clone, PartialEq)]
pub struct IsolationForestDetector {
    n_trees: usize,
    max_samples: usize,
}

impl Default for IsolationForestDetector {
    fn default() -> Self {
        Self::new(DEFAULT_TREES, DEFAULT_MAX_SAMPLES)
    }
}

impl IsolationForestDetector {
    pub fn new(n_trees: usize, max_samples: usize) -> Self {
        Self {
            n_trees: n_trees.max(1),
            max_samples: max_samples.max(2),
        }
    }

    /// Anomaly score per value; higher is more anomalous
    pub fn score_samples(&self, values: &[f64]) -> ServiceResult<Vec<f64>> {
        // A constant series has nothing to isolate
        let Some(points) = unit_interval(values) else {
            return Ok(vec![0.5; values.len()]);
        };

        let options = ForestOptions {
            n_trees: self.n_trees,
            sample_size: self.max_samples.min(points.len()),
            max_tree_depth: None,
            extension_level: 0,
        };

        let scored = panic::catch_unwind(AssertUnwindSafe(|| {
            Forest::<f64, 1>::from_slice(&points, &options)
                .map(|forest| points.iter().map(|point| forest.score(point)).collect::<Vec<f64>>())
        }));

        match scored {
            Ok(Ok(scores)) => Ok(scores),
            Ok(Err(err)) => Err(ServiceError::DetectorFailure {
                message: format!("{err:?}"),
            }),
            Err(_) => Err(ServiceError::DetectorFailure {
                message: "forest construction aborted".to_string(),
            }),
        }
    }
}

impl OutlierDetector for IsolationForestDetector {
    fn is_available(&self) -> bool {
        true
    }

    fn detect_outliers(&self, values: &[f64], params: &IsolationParams) -> ServiceResult<Vec<usize>> {
        let scores = self.score_samples(values)?;
        if scores.is_empty() {
            return Ok(Vec::new());
        }

        let cutoff = percentile(&scores, 100.0 * (1.0 - params.contamination));

        let outliers: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|(_, score)| **score > cutoff)
            .map(|(i, _)| i)
            .collect();

        // The forest draws from its own thread-local generator
        tracing::debug!(
            points = values.len(),
            outliers = outliers.len(),
            cutoff,
            random_state = ?params.random_state,
            "Isolation forest pass"
        );

        Ok(outliers)
    }
}

/// Map a series onto `[0, 1]`, or `None` when all values are equal
fn unit_interval(values: &[f64]) -> Option<Vec<[f64; 1]>> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if min >= max {
        return None;
    }

    // Halved before subtracting so spans near f64::MAX stay finite
    let half_span = max / 2.0 - min / 2.0;
    Some(
        values
            .iter()
            .map(|&v| [((v / 2.0 - min / 2.0) / half_span).clamp(0.0, 1.0)])
            .collect(),
    )
}

/// Percentile with linear interpolation between closest ranks
fn percentile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (q / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
