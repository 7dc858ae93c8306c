//! knnlab evaluation: leave-one-out accuracy and confusion matrices.
//!
//! # Quick start
//!
//! ```
//! use knnlab_datasets::{GenerationConfig, Shape, generate};
//! use knnlab_evaluate::evaluate;
//! use knnlab_knn::ClassifierConfig;
//!
//! let points = generate(&GenerationConfig::new(Shape::Blobs, 60).with_noise(0.0)).unwrap();
//! let matrix = evaluate(&points, &ClassifierConfig::new(5)).unwrap();
//!
//! assert_eq!(matrix.total(), 60);
//! assert!(matrix.accuracy() > 0.8);
//! ```

mod confusion;
mod error;
mod loocv;
mod output;

pub use confusion::ConfusionMatrix;
pub use error::EvaluateError;
pub use loocv::evaluate;
pub use output::{ConfigSummary, EvaluationReport, to_json};
