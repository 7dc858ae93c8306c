//! Inspect command: show which neighbors decide one dataset point when it is
//! held out.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use knnlab_datasets::LabeledPoint;
use knnlab_knn::{PredictionResult, predict_excluding};

use crate::cli::InspectArgs;
use crate::setup::{Setup, emit};

#[derive(Serialize)]
struct InspectOutput<'a> {
    #[serde(flatten)]
    setup: &'a Setup,
    index: usize,
    point: LabeledPoint,
    correct: bool,
    prediction: PredictionResult,
}

/// Run the inspect command.
pub fn run(args: InspectArgs) -> Result<()> {
    let _cmd = info_span!("inspect", index = args.index).entered();
    let setup = Setup::resolve(&args.data)?;
    let points = setup.points()?;

    let prediction = predict_excluding(&points, args.index, &setup.classifier)
        .with_context(|| format!("cannot inspect point {}", args.index))?;
    let point = points[args.index];
    let correct = prediction.label() == point.label;
    info!(
        actual = point.label.name(),
        predicted = prediction.label().name(),
        correct,
        "point inspected"
    );

    emit(
        &InspectOutput {
            setup: &setup,
            index: args.index,
            point,
            correct,
            prediction,
        },
        args.data.output.as_deref(),
    )
}
