//! KNN prediction entry points and scratch buffer management.

use knnlab_datasets::{LabeledPoint, Query};

use crate::config::ClassifierConfig;
use crate::distance::distances_from;
use crate::error::KnnError;
use crate::result::{Neighbor, PredictionResult};
use crate::select::select_k_nearest;
use crate::vote::{tally_votes, winner};

/// Pre-allocated scratch buffers for KNN prediction.
///
/// Reuse across multiple calls to [`predict_with_scratch`] to avoid repeated
/// heap allocation in hot loops (leave-one-out evaluation, grid scans).
///
/// # Example
///
/// ```
/// use knnlab_knn::KnnScratch;
///
/// let mut scratch = KnnScratch::new(200);
/// // Use with predict_with_scratch() in a loop...
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnnScratch {
    /// (distance, dataset_index) pairs for sorting.
    pub(crate) pairs: Vec<(f64, usize)>,
}

impl KnnScratch {
    /// Creates a new scratch buffer with capacity for `max_candidates` candidates.
    pub fn new(max_candidates: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(max_candidates),
        }
    }
}

/// Validates inputs and returns the number of usable candidates.
fn validate_inputs(
    points: &[LabeledPoint],
    skip: Option<usize>,
    query: Query,
    config: &ClassifierConfig,
) -> Result<usize, KnnError> {
    config.validate()?;

    if !query.is_finite() {
        return Err(KnnError::NonFiniteQuery {
            x: query.x,
            y: query.y,
        });
    }

    let n_candidates = match skip {
        Some(index) if index >= points.len() => {
            return Err(KnnError::IndexOutOfRange {
                index,
                len: points.len(),
            });
        }
        Some(_) => points.len() - 1,
        None => points.len(),
    };
    if n_candidates == 0 {
        return Err(KnnError::EmptyCandidates);
    }

    if let Some(index) = points
        .iter()
        .enumerate()
        .position(|(i, p)| Some(i) != skip && !p.position().is_finite())
    {
        return Err(KnnError::NonFiniteCandidate { index });
    }

    Ok(n_candidates)
}

/// Internal implementation that assumes all inputs are validated.
fn predict_inner(
    points: &[LabeledPoint],
    n_candidates: usize,
    skip: Option<usize>,
    query: Query,
    config: &ClassifierConfig,
    scratch: &mut KnnScratch,
) -> PredictionResult {
    // Step 1: Compute k_eff
    let k_eff = config.k().min(n_candidates);

    // Step 2: Distances to every candidate
    distances_from(points, query, config.metric(), skip, &mut scratch.pairs);

    // Step 3: Select k nearest neighbors
    select_k_nearest(&mut scratch.pairs, k_eff);

    // Step 4: Vote
    let tally = tally_votes(
        scratch.pairs.iter().map(|&(d, i)| (d, points[i].label)),
        config.weighting(),
    );

    let neighbors = scratch
        .pairs
        .iter()
        .map(|&(distance, index)| Neighbor {
            point: points[index],
            index,
            distance,
        })
        .collect();

    PredictionResult::new(winner(&tally), neighbors, tally)
}

/// Classifies `query` against `points`, allocating scratch buffers internally.
///
/// This is the simple entry point. For hot loops, use
/// [`predict_with_scratch`] to reuse allocations.
///
/// The `min(k, points.len())` nearest points vote; distance ties are broken
/// by position in `points`, and label ties go to Class A.
///
/// # Errors
///
/// Returns [`KnnError`] if `points` is empty, the query or any candidate is
/// not finite, or the configuration is invalid.
pub fn predict(
    points: &[LabeledPoint],
    query: Query,
    config: &ClassifierConfig,
) -> Result<PredictionResult, KnnError> {
    let n_candidates = validate_inputs(points, None, query, config)?;
    let mut scratch = KnnScratch::new(n_candidates);
    Ok(predict_inner(
        points,
        n_candidates,
        None,
        query,
        config,
        &mut scratch,
    ))
}

/// Classifies `query`, reusing pre-allocated scratch buffers.
///
/// Identical to [`predict`] but avoids reallocating the distance buffer.
/// Buffers grow as needed and never shrink.
///
/// # Errors
///
/// Returns [`KnnError`] if inputs are invalid.
pub fn predict_with_scratch(
    points: &[LabeledPoint],
    query: Query,
    config: &ClassifierConfig,
    scratch: &mut KnnScratch,
) -> Result<PredictionResult, KnnError> {
    let n_candidates = validate_inputs(points, None, query, config)?;
    Ok(predict_inner(
        points,
        n_candidates,
        None,
        query,
        config,
        scratch,
    ))
}

/// Classifies the point at `index` using every *other* point as a candidate.
///
/// Used for leave-one-out evaluation and for inspecting the neighbors of a
/// dataset point. Neighbor indices refer to positions in `points`.
///
/// # Errors
///
/// Returns [`KnnError::IndexOutOfRange`] if `index >= points.len()` and
/// [`KnnError::EmptyCandidates`] if `points` holds a single point.
pub fn predict_excluding(
    points: &[LabeledPoint],
    index: usize,
    config: &ClassifierConfig,
) -> Result<PredictionResult, KnnError> {
    let mut scratch = KnnScratch::new(points.len());
    predict_excluding_with_scratch(points, index, config, &mut scratch)
}

/// Scratch-reusing variant of [`predict_excluding`].
///
/// # Errors
///
/// Same as [`predict_excluding`].
pub fn predict_excluding_with_scratch(
    points: &[LabeledPoint],
    index: usize,
    config: &ClassifierConfig,
    scratch: &mut KnnScratch,
) -> Result<PredictionResult, KnnError> {
    let query = match points.get(index) {
        Some(p) => p.position(),
        None => {
            return Err(KnnError::IndexOutOfRange {
                index,
                len: points.len(),
            });
        }
    };
    let n_candidates = validate_inputs(points, Some(index), query, config)?;
    Ok(predict_inner(
        points,
        n_candidates,
        Some(index),
        query,
        config,
        scratch,
    ))
}
