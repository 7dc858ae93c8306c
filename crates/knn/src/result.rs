//! Output types for KNN classification queries.

use knnlab_datasets::{Label, LabeledPoint};
use serde::Serialize;

use crate::vote::Tally;

/// A candidate point paired with its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    /// The neighboring point.
    pub point: LabeledPoint,
    /// Position of the point in the dataset passed to the classifier.
    pub index: usize,
    /// Distance from the query under the configured metric.
    pub distance: f64,
}

/// Result of a single KNN classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Winning label.
    label: Label,
    /// The `min(k, n_candidates)` nearest neighbors, ascending by distance.
    neighbors: Vec<Neighbor>,
    /// Accumulated vote weight per label.
    tally: Tally,
}

impl PredictionResult {
    pub(crate) fn new(label: Label, neighbors: Vec<Neighbor>, tally: Tally) -> Self {
        Self {
            label,
            neighbors,
            tally,
        }
    }

    /// Returns the predicted label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the neighbors that voted, nearest first.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Returns the vote weight accumulated for `label`.
    pub fn weight(&self, label: Label) -> f64 {
        self.tally[label.index()]
    }

    /// Consumes the result, returning the neighbor list.
    pub fn into_neighbors(self) -> Vec<Neighbor> {
        self.neighbors
    }
}
