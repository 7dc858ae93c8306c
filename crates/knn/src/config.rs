//! Configuration for KNN classification queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KnnError;

/// Minkowski distance order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Order 1: `|Δx| + |Δy|`.
    Manhattan,
    /// Order 2: `sqrt(Δx² + Δy²)`.
    #[default]
    Euclidean,
}

impl Metric {
    /// Maps a Minkowski order to a metric. Only orders 1 and 2 are supported.
    pub fn from_order(order: u8) -> Result<Self, KnnError> {
        match order {
            1 => Ok(Metric::Manhattan),
            2 => Ok(Metric::Euclidean),
            other => Err(KnnError::UnsupportedMetric { order: other }),
        }
    }

    /// Returns the Minkowski order (1 or 2).
    pub fn order(self) -> u8 {
        match self {
            Metric::Manhattan => 1,
            Metric::Euclidean => 2,
        }
    }
}

/// Vote weighting scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Every neighbor casts one vote.
    #[default]
    Uniform,
    /// Each neighbor votes with weight `1 / distance`.
    ///
    /// A neighbor at distance exactly zero votes with
    /// [`ZERO_DISTANCE_WEIGHT`](crate::ZERO_DISTANCE_WEIGHT).
    Distance,
}

impl Weighting {
    pub fn as_str(self) -> &'static str {
        match self {
            Weighting::Uniform => "uniform",
            Weighting::Distance => "distance",
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weighting {
    type Err = KnnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" => Ok(Weighting::Uniform),
            "distance" => Ok(Weighting::Distance),
            _ => Err(KnnError::UnknownWeighting {
                name: s.to_string(),
            }),
        }
    }
}

/// Configuration for a KNN classification query.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use knnlab_knn::{ClassifierConfig, Metric, Weighting};
///
/// let config = ClassifierConfig::new(7)
///     .with_metric(Metric::Manhattan)
///     .with_weighting(Weighting::Distance);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Number of nearest neighbors that vote.
    k: usize,
    /// Distance metric.
    metric: Metric,
    /// Vote weighting scheme.
    weighting: Weighting,
}

impl ClassifierConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: `metric = Euclidean`, `weighting = Uniform`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            metric: Metric::Euclidean,
            weighting: Weighting::Uniform,
        }
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the vote weighting scheme.
    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Returns the configured k (before clamping to the candidate count).
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k });
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new(5)
    }
}
