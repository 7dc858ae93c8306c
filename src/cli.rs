use std::path::PathBuf;

use clap::{Parser, Subcommand};
use knnlab_knn::DEFAULT_GRID_RESOLUTION;

/// knnlab k-nearest-neighbor teaching engine.
#[derive(Parser)]
#[command(
    name = "knnlab",
    version,
    about = "Synthetic 2-D datasets and k-nearest-neighbor classification"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a dataset and print it with its bounding box.
    Generate(DataArgs),
    /// Classify a single query point.
    Predict(PredictArgs),
    /// Show the leave-one-out neighbors of one dataset point.
    Inspect(InspectArgs),
    /// Run leave-one-out cross-validation.
    Evaluate(DataArgs),
    /// Classify every cell of a grid over the dataset's bounding box.
    Grid(GridArgs),
    /// List the built-in teaching examples.
    Examples,
}

/// Dataset and classifier selection shared by every data subcommand.
///
/// Precedence: explicit flag, then `--example`, then `--config`, then defaults.
#[derive(clap::Args, Debug, Default)]
pub struct DataArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start from a built-in example (see `knnlab examples`).
    #[arg(short, long)]
    pub example: Option<u8>,

    /// Dataset shape: moons, circles or blobs.
    #[arg(long)]
    pub shape: Option<String>,

    /// Number of points to generate.
    #[arg(long)]
    pub samples: Option<usize>,

    /// Noise amplitude.
    #[arg(long)]
    pub noise: Option<f64>,

    /// Dataset seed.
    #[arg(short, long, conflicts_with = "random_seed")]
    pub seed: Option<u64>,

    /// Draw a fresh dataset seed from OS entropy.
    #[arg(long)]
    pub random_seed: bool,

    /// Number of neighbors.
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Minkowski order: 1 (Manhattan) or 2 (Euclidean).
    #[arg(long)]
    pub metric: Option<u8>,

    /// Vote weighting: uniform or distance.
    #[arg(long)]
    pub weighting: Option<String>,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Query x coordinate.
    #[arg(long, allow_negative_numbers = true)]
    pub x: f64,

    /// Query y coordinate.
    #[arg(long, allow_negative_numbers = true)]
    pub y: f64,
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Index of the dataset point to inspect.
    #[arg(short, long)]
    pub index: usize,
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Cells per side.
    #[arg(short, long, default_value_t = DEFAULT_GRID_RESOLUTION)]
    pub resolution: usize,
}
