//! Pure conversion functions: TOML config, presets and CLI overrides -> crate API config types.

use anyhow::Result;

use knnlab_datasets::{GenerationConfig, Shape};
use knnlab_knn::{ClassifierConfig, Metric, Weighting};

use crate::cli::DataArgs;
use crate::config::{ClassifierToml, DatasetToml};
use crate::presets::Preset;

/// Parses a dataset shape name (case-insensitive).
pub fn parse_shape(s: &str) -> Result<Shape> {
    Ok(s.parse()?)
}

/// Parses a Minkowski order into a metric.
pub fn parse_metric(order: u8) -> Result<Metric> {
    Ok(Metric::from_order(order)?)
}

/// Parses a vote weighting name (case-insensitive).
pub fn parse_weighting(s: &str) -> Result<Weighting> {
    Ok(s.parse()?)
}

/// Builds a [`GenerationConfig`] from the TOML dataset section, an optional
/// preset and CLI overrides, in increasing order of precedence.
///
/// `drawn_seed` is an entropy seed requested with `--random-seed`; it ranks
/// alongside `--seed`, which clap keeps mutually exclusive with it.
pub fn build_generation_config(
    file: &DatasetToml,
    preset: Option<&Preset>,
    args: &DataArgs,
    drawn_seed: Option<u64>,
) -> Result<GenerationConfig> {
    let from_file = GenerationConfig::new(parse_shape(&file.shape)?, file.sample_size)
        .with_noise(file.noise)
        .with_seed(file.seed);
    let base = preset.map_or(from_file, |p| p.generation());

    let shape = match args.shape.as_deref() {
        Some(s) => parse_shape(s)?,
        None => base.shape(),
    };
    Ok(
        GenerationConfig::new(shape, args.samples.unwrap_or(base.sample_size()))
            .with_noise(args.noise.unwrap_or(base.noise()))
            .with_seed(args.seed.or(drawn_seed).unwrap_or(base.seed())),
    )
}

/// Builds a [`ClassifierConfig`] from the TOML classifier section, an optional
/// preset and CLI overrides, in increasing order of precedence.
pub fn build_classifier_config(
    file: &ClassifierToml,
    preset: Option<&Preset>,
    args: &DataArgs,
) -> Result<ClassifierConfig> {
    let from_file = ClassifierConfig::new(file.k)
        .with_metric(parse_metric(file.metric)?)
        .with_weighting(parse_weighting(&file.weighting)?);
    let base = preset.map_or(from_file, |p| p.classifier());

    let metric = match args.metric {
        Some(order) => parse_metric(order)?,
        None => base.metric(),
    };
    let weighting = match args.weighting.as_deref() {
        Some(s) => parse_weighting(s)?,
        None => base.weighting(),
    };
    Ok(ClassifierConfig::new(args.k.unwrap_or(base.k()))
        .with_metric(metric)
        .with_weighting(weighting))
}
