//! Error types for the knnlab-datasets crate.

/// Error type for all fallible operations in the knnlab-datasets crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    /// Returned when the requested sample size is zero.
    #[error("sample size must be >= 1, got {sample_size}")]
    InvalidSampleSize {
        /// The invalid sample size.
        sample_size: usize,
    },

    /// Returned when noise is negative or non-finite.
    #[error("noise must be finite and >= 0, got {noise}")]
    InvalidNoise {
        /// The invalid noise level.
        noise: f64,
    },

    /// Returned when a shape name is not one of `moons`, `circles`, `blobs`.
    #[error("unknown dataset shape: {name:?}")]
    UnknownShape {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when an integer label is neither 0 nor 1.
    #[error("label must be 0 or 1, got {value}")]
    InvalidLabel {
        /// The out-of-range label value.
        value: u8,
    },
}
