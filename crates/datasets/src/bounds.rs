//! Padded axis-aligned bounding boxes.

use serde::Serialize;

use crate::point::{LabeledPoint, Query};

/// Default padding: 10% of each axis range on both sides.
pub const DEFAULT_PADDING: f64 = 0.1;

/// Range substituted when an axis has zero extent.
const DEGENERATE_RANGE: f64 = 1.0;

/// Padded extent of a point set, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Computes the box around `points`, padding each axis by
    /// `padding × range`.
    ///
    /// A zero-width axis (all points share the coordinate) uses a range of 1
    /// before padding. An empty slice is treated as a single point at the
    /// origin.
    pub fn with_padding(points: &[LabeledPoint], padding: f64) -> Self {
        let (min_x, max_x, min_y, max_y) = if points.is_empty() {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            points.iter().fold(
                (
                    f64::INFINITY,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    f64::NEG_INFINITY,
                ),
                |(lx, hx, ly, hy), p| (lx.min(p.x), hx.max(p.x), ly.min(p.y), hy.max(p.y)),
            )
        };

        let range_x = axis_range(min_x, max_x);
        let range_y = axis_range(min_y, max_y);

        Self {
            min_x: min_x - range_x * padding,
            max_x: max_x + range_x * padding,
            min_y: min_y - range_y * padding,
            max_y: max_y + range_y * padding,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns `true` if `(x, y)` lies inside the box (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    /// Maps a data coordinate into the unit square, y pointing up.
    pub fn to_unit(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.min_x) / self.width(), (y - self.min_y) / self.height())
    }

    /// Centre of cell `(col, row)` in a `resolution × resolution` scan.
    ///
    /// Columns run left to right from `min_x`; rows run top to bottom from
    /// `max_y`.
    pub fn cell_center(&self, col: usize, row: usize, resolution: usize) -> Query {
        let res = resolution as f64;
        let x = self.min_x + (col as f64 + 0.5) / res * self.width();
        let y = self.max_y - (row as f64 + 0.5) / res * self.height();
        Query::new(x, y)
    }
}

fn axis_range(min: f64, max: f64) -> f64 {
    let range = max - min;
    if range == 0.0 { DEGENERATE_RANGE } else { range }
}

/// Computes the bounding box of `points` with [`DEFAULT_PADDING`].
pub fn bounding_box(points: &[LabeledPoint]) -> BoundingBox {
    BoundingBox::with_padding(points, DEFAULT_PADDING)
}
