//! K-nearest-neighbor classification of labeled 2-D points.
//!
//! This crate provides a single-query KNN classifier with two vote weighting
//! schemes:
//!
//! | Scheme | Weight per neighbor | Use case |
//! |--------|---------------------|----------|
//! | Uniform | `1` | Plain majority vote |
//! | Distance | `1/d` (or [`ZERO_DISTANCE_WEIGHT`] at `d = 0`) | Closer neighbors dominate |
//!
//! and two Minkowski metrics (Manhattan, Euclidean).
//!
//! # Quick start
//!
//! ```
//! use knnlab_datasets::{Label, LabeledPoint, Query};
//! use knnlab_knn::{ClassifierConfig, Weighting, predict};
//!
//! let points = vec![
//!     LabeledPoint::new(0.0, 0.0, Label::ClassA),
//!     LabeledPoint::new(0.2, 0.1, Label::ClassA),
//!     LabeledPoint::new(1.0, 1.0, Label::ClassB),
//! ];
//! let config = ClassifierConfig::new(3).with_weighting(Weighting::Distance);
//!
//! let result = predict(&points, Query::new(0.9, 0.9), &config).unwrap();
//! assert_eq!(result.label(), Label::ClassB);
//! assert_eq!(result.neighbors().len(), 3);
//! ```
//!
//! # Architecture
//!
//! ```text
//! predict()
//!   ├─ validate inputs
//!   ├─ distances_from()      (distance.rs)
//!   ├─ select_k_nearest()    (select.rs)
//!   └─ tally_votes/winner()  (vote.rs)
//!
//! decision_grid()            (grid.rs, rayon over cells)
//! ```
//!
//! For hot loops, use [`predict_with_scratch`] with a reusable
//! [`KnnScratch`] to avoid per-call heap allocation.

pub mod config;
pub mod error;
pub mod grid;
pub mod knn;
pub mod result;

pub(crate) mod distance;
pub(crate) mod select;
pub(crate) mod vote;

pub use config::{ClassifierConfig, Metric, Weighting};
pub use distance::distance;
pub use error::KnnError;
pub use grid::{DecisionGrid, decision_grid};
pub use knn::{
    KnnScratch, predict, predict_excluding, predict_excluding_with_scratch, predict_with_scratch,
};
pub use result::{Neighbor, PredictionResult};
pub use vote::{Tally, ZERO_DISTANCE_WEIGHT, vote};

/// Resolution of the decision-boundary preview grid in the playground.
pub const DEFAULT_GRID_RESOLUTION: usize = 60;
