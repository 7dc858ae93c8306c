//! Evaluate command: leave-one-out accuracy of the configured classifier.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use knnlab_datasets::GenerationConfig;
use knnlab_evaluate::{EvaluationReport, evaluate};

use crate::cli::DataArgs;
use crate::setup::{Setup, emit};

#[derive(Serialize)]
struct EvaluateOutput<'a> {
    dataset: &'a GenerationConfig,
    #[serde(flatten)]
    report: EvaluationReport,
}

/// Run the evaluate command.
pub fn run(args: DataArgs) -> Result<()> {
    let _cmd = info_span!("evaluate").entered();
    let setup = Setup::resolve(&args)?;
    let points = setup.points()?;

    info!(k = setup.classifier.k(), "running leave-one-out evaluation");
    let matrix = evaluate(&points, &setup.classifier).context("evaluation failed")?;
    let report = EvaluationReport::new(&setup.classifier, points.len(), matrix);
    info!(
        accuracy = report.accuracy,
        correct = matrix.correct(),
        total = matrix.total(),
        "evaluation complete"
    );

    emit(
        &EvaluateOutput {
            dataset: &setup.dataset,
            report,
        },
        args.output.as_deref(),
    )
}
