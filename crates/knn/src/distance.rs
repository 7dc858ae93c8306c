//! Minkowski distances in the plane.

use knnlab_datasets::{LabeledPoint, Query};

use crate::config::Metric;

/// Distance between two coordinates under `metric`.
///
/// ```
/// use knnlab_datasets::Query;
/// use knnlab_knn::{Metric, distance};
///
/// let a = Query::new(0.0, 0.0);
/// let b = Query::new(3.0, 4.0);
/// assert_eq!(distance(a, b, Metric::Euclidean), 5.0);
/// assert_eq!(distance(a, b, Metric::Manhattan), 7.0);
/// ```
#[inline]
pub fn distance(a: Query, b: Query, metric: Metric) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    match metric {
        Metric::Manhattan => dx.abs() + dy.abs(),
        Metric::Euclidean => (dx * dx + dy * dy).sqrt(),
    }
}

/// Fills `pairs` with `(distance, dataset_index)` for every point except
/// `skip`.
pub(crate) fn distances_from(
    points: &[LabeledPoint],
    query: Query,
    metric: Metric,
    skip: Option<usize>,
    pairs: &mut Vec<(f64, usize)>,
) {
    pairs.clear();
    pairs.extend(
        points
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != skip)
            .map(|(i, p)| (distance(p.position(), query, metric), i)),
    );
}
