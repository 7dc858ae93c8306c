//! Generate command: print a dataset with its padded bounding box.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span};

use knnlab_datasets::{BoundingBox, GenerationConfig, LabeledPoint, bounding_box};

use crate::cli::DataArgs;
use crate::setup::{Setup, emit};

#[derive(Serialize)]
struct GenerateOutput<'a> {
    dataset: &'a GenerationConfig,
    bounds: BoundingBox,
    points: &'a [LabeledPoint],
}

/// Run the generate command.
pub fn run(args: DataArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let setup = Setup::resolve(&args)?;
    let points = setup.points()?;

    let bounds = bounding_box(&points);
    info!(
        min_x = bounds.min_x,
        max_x = bounds.max_x,
        min_y = bounds.min_y,
        max_y = bounds.max_y,
        "bounding box computed"
    );

    emit(
        &GenerateOutput {
            dataset: &setup.dataset,
            bounds,
            points: &points,
        },
        args.output.as_deref(),
    )
}
