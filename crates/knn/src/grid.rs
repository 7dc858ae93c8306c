//! Decision-boundary scans over a bounding box.

use knnlab_datasets::{BoundingBox, Label, LabeledPoint};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::ClassifierConfig;
use crate::error::KnnError;
use crate::knn::{KnnScratch, predict_with_scratch};

/// Predicted labels on a `resolution × resolution` grid of cell centres.
///
/// Stored row-major: row 0 is the top edge (`max_y`), column 0 the left edge
/// (`min_x`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionGrid {
    resolution: usize,
    bounds: BoundingBox,
    labels: Vec<Label>,
}

impl DecisionGrid {
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// All cell labels, row-major.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Label of the cell at `(col, row)`, or `None` if outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<Label> {
        if col >= self.resolution || row >= self.resolution {
            return None;
        }
        Some(self.labels[row * self.resolution + col])
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Label]> {
        self.labels.chunks(self.resolution)
    }

    /// Fraction of cells assigned to `label`.
    pub fn share(&self, label: Label) -> f64 {
        let hits = self.labels.iter().filter(|&&l| l == label).count();
        hits as f64 / self.labels.len() as f64
    }
}

/// Classifies the centre of every grid cell over `bounds`.
///
/// Cells are independent and evaluated in parallel; the output is identical
/// to a sequential scan.
///
/// # Errors
///
/// Returns [`KnnError`] if `resolution` is zero, `points` is empty, the
/// configuration is invalid, or `bounds` yields non-finite cell centres.
pub fn decision_grid(
    points: &[LabeledPoint],
    bounds: &BoundingBox,
    resolution: usize,
    config: &ClassifierConfig,
) -> Result<DecisionGrid, KnnError> {
    if resolution == 0 {
        return Err(KnnError::InvalidResolution { resolution });
    }
    config.validate()?;
    if points.is_empty() {
        return Err(KnnError::EmptyCandidates);
    }

    let labels = (0..resolution * resolution)
        .into_par_iter()
        .map_init(
            || KnnScratch::new(points.len()),
            |scratch, cell| {
                let (row, col) = (cell / resolution, cell % resolution);
                let query = bounds.cell_center(col, row, resolution);
                predict_with_scratch(points, query, config, scratch).map(|r| r.label())
            },
        )
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        resolution,
        n_points = points.len(),
        k = config.k(),
        "decision grid scanned"
    );

    Ok(DecisionGrid {
        resolution,
        bounds: *bounds,
        labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knn::predict;
    use knnlab_datasets::bounding_box;

    fn split_plane() -> Vec<LabeledPoint> {
        vec![
            LabeledPoint::new(-1.0, 0.0, Label::ClassA),
            LabeledPoint::new(-1.0, 1.0, Label::ClassA),
            LabeledPoint::new(1.0, 0.0, Label::ClassB),
            LabeledPoint::new(1.0, 1.0, Label::ClassB),
        ]
    }

    #[test]
    fn test_left_right_split() {
        let points = split_plane();
        let bb = bounding_box(&points);
        let grid = decision_grid(&points, &bb, 4, &ClassifierConfig::new(1)).unwrap();
        assert_eq!(grid.labels().len(), 16);
        for row in grid.rows() {
            assert_eq!(row, &[Label::ClassA, Label::ClassA, Label::ClassB, Label::ClassB]);
        }
        assert_eq!(grid.share(Label::ClassA), 0.5);
    }

    #[test]
    fn test_matches_sequential_predict() {
        let points = split_plane();
        let bb = bounding_box(&points);
        let config = ClassifierConfig::new(3);
        let res = 7;
        let grid = decision_grid(&points, &bb, res, &config).unwrap();
        for row in 0..res {
            for col in 0..res {
                let q = bb.cell_center(col, row, res);
                let expected = predict(&points, q, &config).unwrap().label();
                assert_eq!(grid.get(col, row), Some(expected));
            }
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let points = split_plane();
        let grid =
            decision_grid(&points, &bounding_box(&points), 2, &ClassifierConfig::new(1)).unwrap();
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert!(grid.get(1, 1).is_some());
    }

    #[test]
    fn test_errors() {
        let points = split_plane();
        let bb = bounding_box(&points);
        assert!(matches!(
            decision_grid(&points, &bb, 0, &ClassifierConfig::new(1)),
            Err(KnnError::InvalidResolution { resolution: 0 })
        ));
        assert!(matches!(
            decision_grid(&[], &bb, 3, &ClassifierConfig::new(1)),
            Err(KnnError::EmptyCandidates)
        ));
        assert!(matches!(
            decision_grid(&points, &bb, 3, &ClassifierConfig::new(0)),
            Err(KnnError::InvalidK { k: 0 })
        ));
    }
}
