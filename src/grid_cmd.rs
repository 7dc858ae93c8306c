//! Grid command: classify the centre of every cell over the dataset's
//! bounding box.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use knnlab_datasets::{Label, bounding_box};
use knnlab_knn::{DecisionGrid, decision_grid};

use crate::cli::GridArgs;
use crate::setup::{Setup, emit};

#[derive(Serialize)]
struct GridOutput<'a> {
    #[serde(flatten)]
    setup: &'a Setup,
    class_b_share: f64,
    grid: DecisionGrid,
}

/// Run the grid command.
pub fn run(args: GridArgs) -> Result<()> {
    let _cmd = info_span!("grid", resolution = args.resolution).entered();
    let setup = Setup::resolve(&args.data)?;
    let points = setup.points()?;

    let bounds = bounding_box(&points);
    let grid = decision_grid(&points, &bounds, args.resolution, &setup.classifier)
        .context("decision grid failed")?;
    let class_b_share = grid.share(Label::ClassB);
    info!(
        n_cells = grid.labels().len(),
        class_b_share, "decision grid computed"
    );

    emit(
        &GridOutput {
            setup: &setup,
            class_b_share,
            grid,
        },
        args.data.output.as_deref(),
    )
}
