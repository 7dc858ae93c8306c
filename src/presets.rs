//! Built-in teaching examples.

use knnlab_datasets::{GenerationConfig, Shape};
use knnlab_knn::{ClassifierConfig, Metric, Weighting};
use serde::Serialize;

/// A named dataset and classifier setup illustrating one KNN behavior.
#[derive(Debug, Serialize)]
pub struct Preset {
    pub id: u8,
    pub title: &'static str,
    pub goal: &'static str,
    pub observation: &'static str,
    pub shape: Shape,
    pub sample_size: usize,
    pub noise: f64,
    pub seed: u64,
    pub k: usize,
    pub metric: Metric,
    pub weighting: Weighting,
}

impl Preset {
    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig::new(self.shape, self.sample_size)
            .with_noise(self.noise)
            .with_seed(self.seed)
    }

    pub fn classifier(&self) -> ClassifierConfig {
        ClassifierConfig::new(self.k)
            .with_metric(self.metric)
            .with_weighting(self.weighting)
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        id: 1,
        title: "Effect of k on Decision Boundary",
        goal: "Observe how increasing k smooths the decision boundary",
        observation: "With k=3, the boundary is jagged and follows individual points. Try increasing k to 15 or 25 to see how the boundary becomes smoother and more generalized.",
        shape: Shape::Moons,
        sample_size: 100,
        noise: 0.15,
        seed: 42,
        k: 3,
        metric: Metric::Euclidean,
        weighting: Weighting::Uniform,
    },
    Preset {
        id: 2,
        title: "Uniform vs Distance Weights",
        goal: "Compare how weighting schemes affect predictions near class boundaries",
        observation: "Start with uniform weights - all 7 neighbors vote equally. Switch to distance weighting to see how closer neighbors have more influence, especially useful when classes overlap.",
        shape: Shape::Blobs,
        sample_size: 80,
        noise: 0.25,
        seed: 17,
        k: 7,
        metric: Metric::Euclidean,
        weighting: Weighting::Uniform,
    },
    Preset {
        id: 3,
        title: "Manhattan vs Euclidean Distance",
        goal: "See how different distance metrics change the decision boundary shape",
        observation: "Euclidean (L2) creates circular neighborhoods. Switch to Manhattan (L1) to see diamond-shaped neighborhoods, which can better separate the concentric circles pattern.",
        shape: Shape::Circles,
        sample_size: 100,
        noise: 0.1,
        seed: 33,
        k: 5,
        metric: Metric::Euclidean,
        weighting: Weighting::Uniform,
    },
    Preset {
        id: 4,
        title: "Overfitting with Small k",
        goal: "Understand why k=1 leads to overfitting",
        observation: "With k=1 and high noise, every point creates its own classification region, including noisy outliers. This is overfitting - the model memorizes noise rather than learning the true pattern.",
        shape: Shape::Moons,
        sample_size: 60,
        noise: 0.3,
        seed: 7,
        k: 1,
        metric: Metric::Euclidean,
        weighting: Weighting::Uniform,
    },
    Preset {
        id: 5,
        title: "Underfitting with Large k",
        goal: "See how too large k leads to underfitting",
        observation: "With k=35 (nearly half the dataset), the boundary becomes too simple and misses the moon pattern. This is underfitting - the model is too simple to capture the true structure.",
        shape: Shape::Moons,
        sample_size: 80,
        noise: 0.1,
        seed: 22,
        k: 35,
        metric: Metric::Euclidean,
        weighting: Weighting::Uniform,
    },
    Preset {
        id: 6,
        title: "Noise Sensitivity",
        goal: "Explore how noise affects classification accuracy",
        observation: "At low noise, classes are well-separated and accuracy is high. Gradually increase noise to 0.3+ and watch how the decision boundary becomes uncertain and accuracy drops.",
        shape: Shape::Circles,
        sample_size: 100,
        noise: 0.05,
        seed: 55,
        k: 5,
        metric: Metric::Euclidean,
        weighting: Weighting::Distance,
    },
];

/// Looks up a preset by id.
pub fn find(id: u8) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_sequential() {
        let ids: HashSet<u8> = PRESETS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PRESETS.len());
        for id in 1..=6 {
            assert!(find(id).is_some(), "missing preset {id}");
        }
        assert!(find(0).is_none());
        assert!(find(7).is_none());
    }

    #[test]
    fn test_every_preset_is_valid() {
        for p in PRESETS {
            p.generation().validate().unwrap();
            p.classifier().validate().unwrap();
        }
    }

    #[test]
    fn test_observations_keep_full_text() {
        assert!(
            find(3)
                .unwrap()
                .observation
                .ends_with("which can better separate the concentric circles pattern.")
        );
        assert!(find(2).unwrap().observation.starts_with("Start with uniform weights - all 7"));
        for p in PRESETS {
            assert!(p.observation.ends_with('.'), "preset {} truncated", p.id);
        }
    }

    #[test]
    fn test_noise_sensitivity_uses_distance_weighting() {
        let p = find(6).unwrap();
        assert_eq!(p.classifier().weighting(), Weighting::Distance);
        assert_eq!(p.generation().seed(), 55);
    }
}
