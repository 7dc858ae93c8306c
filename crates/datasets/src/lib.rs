//! Seeded synthetic datasets for the knnlab classifier.
//!
//! Three shape families, each producing a two-class point set:
//!
//! | Shape | Class A (label 0) | Class B (label 1) |
//! |-------|-------------------|-------------------|
//! | Moons | upper unit semicircle | lower semicircle shifted by `(1, 0.5)` |
//! | Circles | ring of radius 0.4 | ring of radius 1.0 |
//! | Blobs | cluster at `(-0.5, -0.5)` | cluster at `(0.5, 0.5)` |
//!
//! # Quick start
//!
//! ```
//! use knnlab_datasets::{GenerationConfig, Label, Shape, bounding_box, generate};
//!
//! let config = GenerationConfig::new(Shape::Moons, 101).with_noise(0.15).with_seed(42);
//! let points = generate(&config).unwrap();
//!
//! assert_eq!(points.len(), 101);
//! assert_eq!(points.iter().filter(|p| p.label == Label::ClassA).count(), 50);
//!
//! let bb = bounding_box(&points);
//! assert!(points.iter().all(|p| bb.contains(p.x, p.y)));
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod point;
pub mod rng;
pub mod shapes;

use tracing::debug;

pub use bounds::{BoundingBox, DEFAULT_PADDING, bounding_box};
pub use config::{GenerationConfig, Shape};
pub use error::DatasetError;
pub use point::{Label, LabeledPoint, Query};
pub use rng::SeededRandom;

/// Generates the dataset described by `config`.
///
/// A fresh [`SeededRandom`] is created from the configured seed for every
/// call, so identical configurations always yield identical datasets.
///
/// # Errors
///
/// Returns [`DatasetError`] if the sample size is zero or noise is invalid.
pub fn generate(config: &GenerationConfig) -> Result<Vec<LabeledPoint>, DatasetError> {
    config.validate()?;

    let mut rng = SeededRandom::new(config.seed());
    let n = config.sample_size();
    let noise = config.noise();
    let points = match config.shape() {
        Shape::Moons => shapes::moons(n, noise, &mut rng),
        Shape::Circles => shapes::circles(n, noise, &mut rng),
        Shape::Blobs => shapes::blobs(n, noise, &mut rng),
    };

    debug!(
        shape = %config.shape(),
        n_points = points.len(),
        noise,
        seed = config.seed(),
        "dataset generated"
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = GenerationConfig::new(Shape::Blobs, 0);
        assert!(matches!(
            generate(&config),
            Err(DatasetError::InvalidSampleSize { sample_size: 0 })
        ));
    }

    #[test]
    fn test_generate_dispatches_by_shape() {
        let moons = generate(&GenerationConfig::new(Shape::Moons, 10)).unwrap();
        let circles = generate(&GenerationConfig::new(Shape::Circles, 10)).unwrap();
        let blobs = generate(&GenerationConfig::new(Shape::Blobs, 10)).unwrap();
        assert_ne!(moons, circles);
        assert_ne!(circles, blobs);
        assert_ne!(moons, blobs);
    }

    #[test]
    fn test_generate_matches_direct_call() {
        let config = GenerationConfig::new(Shape::Circles, 30)
            .with_noise(0.05)
            .with_seed(55);
        let expected = shapes::circles(30, 0.05, &mut SeededRandom::new(55));
        assert_eq!(generate(&config).unwrap(), expected);
    }
}
