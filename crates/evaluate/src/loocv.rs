//! Leave-one-out cross-validation.

use knnlab_datasets::LabeledPoint;
use knnlab_knn::{ClassifierConfig, KnnScratch, predict_excluding_with_scratch, vote};
use tracing::debug;

use crate::confusion::ConfusionMatrix;
use crate::error::EvaluateError;

/// Predicts every point from all the others and tallies the outcomes.
///
/// `k` is clamped to `n - 1` per prediction. An empty dataset yields an
/// all-zero matrix; a single point has no other candidates, so its vote is
/// empty and resolves to Class A.
///
/// # Errors
///
/// Returns [`EvaluateError::Classifier`] if the classifier configuration is
/// invalid or a point has a non-finite coordinate.
pub fn evaluate(
    points: &[LabeledPoint],
    config: &ClassifierConfig,
) -> Result<ConfusionMatrix, EvaluateError> {
    config.validate()?;

    let mut matrix = ConfusionMatrix::default();
    match points {
        [] => {}
        [only] => matrix.record(only.label, vote(&[], config.weighting())),
        _ => {
            let mut scratch = KnnScratch::new(points.len());
            for (i, p) in points.iter().enumerate() {
                let predicted =
                    predict_excluding_with_scratch(points, i, config, &mut scratch)?.label();
                matrix.record(p.label, predicted);
            }
        }
    }

    debug!(
        n_points = points.len(),
        k = config.k(),
        accuracy = matrix.accuracy(),
        "leave-one-out evaluation finished"
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use knnlab_datasets::Label;
    use knnlab_knn::KnnError;

    fn pt(x: f64, y: f64, label: Label) -> LabeledPoint {
        LabeledPoint::new(x, y, label)
    }

    #[test]
    fn test_two_tight_pairs_perfect_at_k1() {
        let points = [
            pt(0.0, 0.0, Label::ClassA),
            pt(0.1, 0.0, Label::ClassA),
            pt(5.0, 5.0, Label::ClassB),
            pt(5.1, 5.0, Label::ClassB),
        ];
        let m = evaluate(&points, &ClassifierConfig::new(1)).unwrap();
        assert_eq!(m.true_negative, 2);
        assert_eq!(m.true_positive, 2);
        assert_eq!(m.accuracy(), 1.0);
    }

    #[test]
    fn test_alternating_line_all_wrong_at_k1() {
        // Each point's nearest other point has the opposite label.
        let points = [
            pt(0.0, 0.0, Label::ClassA),
            pt(1.0, 0.0, Label::ClassB),
        ];
        let m = evaluate(&points, &ClassifierConfig::new(1)).unwrap();
        assert_eq!(m.false_positive, 1);
        assert_eq!(m.false_negative, 1);
        assert_eq!(m.accuracy(), 0.0);
    }

    #[test]
    fn test_k_clamped_to_n_minus_one() {
        let points = [
            pt(0.0, 0.0, Label::ClassA),
            pt(0.0, 1.0, Label::ClassA),
            pt(0.0, 2.0, Label::ClassB),
        ];
        // k=10 → every prediction uses the 2 remaining points.
        // p0: {A, B} tie → A (TN). p1: {A, B} tie → A (TN). p2: {A, A} → A (FN).
        let m = evaluate(&points, &ClassifierConfig::new(10)).unwrap();
        assert_eq!(m.true_negative, 2);
        assert_eq!(m.false_negative, 1);
        assert_abs_diff_eq!(m.accuracy(), 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_dataset() {
        let m = evaluate(&[], &ClassifierConfig::new(3)).unwrap();
        assert_eq!(m, ConfusionMatrix::default());
        assert_eq!(m.accuracy(), 0.0);
    }

    #[test]
    fn test_single_point_defaults_to_class_a() {
        let m = evaluate(&[pt(1.0, 1.0, Label::ClassB)], &ClassifierConfig::new(1)).unwrap();
        assert_eq!(m.false_negative, 1);
        assert_eq!(m.total(), 1);

        let m = evaluate(&[pt(1.0, 1.0, Label::ClassA)], &ClassifierConfig::new(1)).unwrap();
        assert_eq!(m.true_negative, 1);
    }

    #[test]
    fn test_non_finite_point_rejected() {
        let points = [
            pt(0.0, 0.0, Label::ClassA),
            pt(f64::NAN, 0.0, Label::ClassB),
            pt(5.0, 0.0, Label::ClassB),
        ];
        let err = evaluate(&points, &ClassifierConfig::new(2)).unwrap_err();
        assert!(matches!(
            err,
            EvaluateError::Classifier(KnnError::NonFiniteCandidate { index: 1 })
        ));
    }

    #[test]
    fn test_invalid_k_rejected_even_when_empty() {
        let err = evaluate(&[], &ClassifierConfig::new(0)).unwrap_err();
        assert!(matches!(
            err,
            EvaluateError::Classifier(KnnError::InvalidK { k: 0 })
        ));
    }
}
