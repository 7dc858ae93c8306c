//! Evaluation error types.

use knnlab_knn::KnnError;

/// Errors that can occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    /// The classifier rejected its configuration or input.
    #[error("classifier error: {0}")]
    Classifier(#[from] KnnError),

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_display() {
        let err = EvaluateError::from(KnnError::InvalidK { k: 0 });
        let msg = format!("{}", err);
        assert!(msg.contains("classifier error"));
        assert!(msg.contains("k must be >= 1"));
    }

    #[test]
    fn test_serialization_display() {
        let err = EvaluateError::Serialization {
            reason: "invalid JSON".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("serialization error"));
        assert!(msg.contains("invalid JSON"));
    }

    #[test]
    fn test_source_is_classifier_error() {
        use std::error::Error;
        let err = EvaluateError::from(KnnError::EmptyCandidates);
        assert!(err.source().is_some());
    }
}
