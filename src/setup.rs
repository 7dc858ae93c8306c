//! Shared plumbing for the data subcommands: resolve settings, build the
//! dataset, write JSON.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use knnlab_datasets::{GenerationConfig, LabeledPoint, generate};
use knnlab_knn::ClassifierConfig;

use crate::cli::DataArgs;
use crate::config::KnnlabConfig;
use crate::convert;
use crate::presets::{self, PRESETS};

/// Fully resolved settings for one run.
#[derive(Debug, Serialize)]
pub struct Setup {
    pub dataset: GenerationConfig,
    pub classifier: ClassifierConfig,
}

impl Setup {
    /// Merges defaults, `--config`, `--example` and flag overrides.
    pub fn resolve(args: &DataArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                KnnlabConfig::load(path)?
            }
            None => KnnlabConfig::default(),
        };

        let preset = args
            .example
            .map(|id| {
                presets::find(id)
                    .ok_or_else(|| anyhow!("unknown example {id}: expected 1-{}", PRESETS.len()))
            })
            .transpose()?;
        if let Some(p) = preset {
            info!(example = p.id, title = p.title, "using example");
        }

        let drawn_seed = args.random_seed.then(|| {
            let seed = u64::from(StdRng::from_os_rng().random::<u32>());
            info!(seed, "drew random dataset seed");
            seed
        });

        let dataset = convert::build_generation_config(&file.dataset, preset, args, drawn_seed)?;
        let classifier = convert::build_classifier_config(&file.classifier, preset, args)?;
        dataset.validate().context("invalid dataset settings")?;
        classifier.validate().context("invalid classifier settings")?;

        Ok(Self {
            dataset,
            classifier,
        })
    }

    /// Generates the configured dataset.
    pub fn points(&self) -> Result<Vec<LabeledPoint>> {
        let points = generate(&self.dataset).context("dataset generation failed")?;
        info!(
            shape = %self.dataset.shape(),
            n_points = points.len(),
            seed = self.dataset.seed(),
            "dataset ready"
        );
        Ok(points)
    }
}

/// Writes `value` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn emit<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    match path {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
