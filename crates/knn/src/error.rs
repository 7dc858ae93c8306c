//! Error types for the knnlab-knn crate.

/// Error type for all fallible operations in the knnlab-knn crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when there are no candidate points to vote.
    #[error("no candidates provided")]
    EmptyCandidates,

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when a Minkowski order other than 1 or 2 is requested.
    #[error("unsupported metric order {order}, expected 1 or 2")]
    UnsupportedMetric {
        /// The unsupported order.
        order: u8,
    },

    /// Returned when a weighting name is not `uniform` or `distance`.
    #[error("unknown weighting scheme: {name:?}")]
    UnknownWeighting {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a query coordinate is NaN or infinite.
    #[error("query ({x}, {y}) is not finite")]
    NonFiniteQuery {
        /// Query x coordinate.
        x: f64,
        /// Query y coordinate.
        y: f64,
    },

    /// Returned when a candidate point has a NaN or infinite coordinate.
    #[error("candidate point {index} is not finite")]
    NonFiniteCandidate {
        /// Dataset index of the offending point.
        index: usize,
    },

    /// Returned when an inspected point index is outside the dataset.
    #[error("index {index} out of range for dataset of {len} points")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Dataset length.
        len: usize,
    },

    /// Returned when a decision grid resolution is zero.
    #[error("grid resolution must be >= 1, got {resolution}")]
    InvalidResolution {
        /// The invalid resolution.
        resolution: usize,
    },
}
