use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level knnlab configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnlabConfig {
    /// Dataset generation settings.
    #[serde(default)]
    pub dataset: DatasetToml,

    /// Classifier settings.
    #[serde(default)]
    pub classifier: ClassifierToml,
}

impl KnnlabConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetToml {
    #[serde(default = "default_shape")]
    pub shape: String,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "default_noise")]
    pub noise: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for DatasetToml {
    fn default() -> Self {
        Self {
            shape: default_shape(),
            sample_size: default_sample_size(),
            noise: default_noise(),
            seed: default_seed(),
        }
    }
}

fn default_shape() -> String {
    "moons".to_string()
}
fn default_sample_size() -> usize {
    100
}
fn default_noise() -> f64 {
    0.15
}
fn default_seed() -> u64 {
    42
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierToml {
    #[serde(default = "default_k")]
    pub k: usize,
    /// Minkowski order, 1 or 2.
    #[serde(default = "default_metric")]
    pub metric: u8,
    #[serde(default = "default_weighting")]
    pub weighting: String,
}

impl Default for ClassifierToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            metric: default_metric(),
            weighting: default_weighting(),
        }
    }
}

fn default_k() -> usize {
    5
}
fn default_metric() -> u8 {
    2
}
fn default_weighting() -> String {
    "uniform".to_string()
}
