//! JSON output structures for evaluation results.

use crate::confusion::ConfusionMatrix;
use crate::error::EvaluateError;
use knnlab_knn::{ClassifierConfig, Weighting};
use serde::Serialize;

/// Top-level evaluation output.
#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    /// Configuration summary.
    pub config: ConfigSummary,
    /// Outcome counts.
    pub confusion: ConfusionMatrix,
    /// `(TP + TN) / n_points`, 0 for an empty dataset.
    pub accuracy: f64,
}

/// Summary of the classifier configuration used.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub k: usize,
    /// k after clamping to `n_points - 1`.
    pub k_effective: usize,
    pub metric_order: u8,
    pub weighting: Weighting,
    pub n_points: usize,
}

impl EvaluationReport {
    /// Assembles a report for `matrix`, computed over `n_points` points.
    pub fn new(config: &ClassifierConfig, n_points: usize, matrix: ConfusionMatrix) -> Self {
        Self {
            config: ConfigSummary {
                k: config.k(),
                k_effective: config.k().min(n_points.saturating_sub(1)),
                metric_order: config.metric().order(),
                weighting: config.weighting(),
                n_points,
            },
            accuracy: matrix.accuracy(),
            confusion: matrix,
        }
    }
}

/// Serialize an evaluation report to a JSON string.
pub fn to_json(report: &EvaluationReport) -> Result<String, EvaluateError> {
    serde_json::to_string_pretty(report).map_err(|e| EvaluateError::Serialization {
        reason: e.to_string(),
    })
}
