//! Predict command: classify one query point.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use knnlab_datasets::Query;
use knnlab_knn::{PredictionResult, predict};

use crate::cli::PredictArgs;
use crate::setup::{Setup, emit};

#[derive(Serialize)]
struct PredictOutput<'a> {
    #[serde(flatten)]
    setup: &'a Setup,
    query: Query,
    prediction: PredictionResult,
}

/// Run the predict command.
pub fn run(args: PredictArgs) -> Result<()> {
    let _cmd = info_span!("predict").entered();
    let setup = Setup::resolve(&args.data)?;
    let points = setup.points()?;

    let query = Query::new(args.x, args.y);
    let prediction = predict(&points, query, &setup.classifier).context("prediction failed")?;
    info!(
        x = query.x,
        y = query.y,
        label = prediction.label().name(),
        n_neighbors = prediction.neighbors().len(),
        "query classified"
    );

    emit(
        &PredictOutput {
            setup: &setup,
            query,
            prediction,
        },
        args.data.output.as_deref(),
    )
}
