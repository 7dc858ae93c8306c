//! Integration tests for KnnError variants.

use knnlab_datasets::{BoundingBox, Label, LabeledPoint, Query, bounding_box};
use knnlab_knn::{
    ClassifierConfig, KnnError, Metric, Weighting, decision_grid, predict, predict_excluding,
};

fn points() -> Vec<LabeledPoint> {
    vec![
        LabeledPoint::new(0.0, 0.0, Label::ClassA),
        LabeledPoint::new(1.0, 1.0, Label::ClassB),
    ]
}

#[test]
fn error_empty_candidates() {
    let result = predict(&[], Query::new(0.0, 0.0), &ClassifierConfig::new(1));
    assert!(matches!(result, Err(KnnError::EmptyCandidates)));
}

#[test]
fn error_invalid_k() {
    let result = predict(&points(), Query::new(0.0, 0.0), &ClassifierConfig::new(0));
    assert!(matches!(result, Err(KnnError::InvalidK { k: 0 })));
}

#[test]
fn error_invalid_k_checked_before_empty() {
    let result = predict(&[], Query::new(0.0, 0.0), &ClassifierConfig::new(0));
    assert!(matches!(result, Err(KnnError::InvalidK { k: 0 })));
}

#[test]
fn error_unsupported_metric() {
    assert!(matches!(
        Metric::from_order(3),
        Err(KnnError::UnsupportedMetric { order: 3 })
    ));
}

#[test]
fn error_unknown_weighting() {
    assert!(matches!(
        "inverse".parse::<Weighting>(),
        Err(KnnError::UnknownWeighting { .. })
    ));
}

#[test]
fn error_non_finite_query() {
    let config = ClassifierConfig::new(1);
    for q in [
        Query::new(f64::NAN, 0.0),
        Query::new(0.0, f64::INFINITY),
        Query::new(f64::NEG_INFINITY, f64::NAN),
    ] {
        assert!(matches!(
            predict(&points(), q, &config),
            Err(KnnError::NonFiniteQuery { .. })
        ));
    }
}

#[test]
fn error_non_finite_candidate() {
    let pts = vec![
        LabeledPoint::new(f64::NAN, 0.0, Label::ClassB),
        LabeledPoint::new(5.0, 0.0, Label::ClassB),
    ];
    let config = ClassifierConfig::new(2).with_weighting(Weighting::Distance);
    let result = predict(&pts, Query::new(5.0, 0.0), &config);
    assert!(matches!(
        result,
        Err(KnnError::NonFiniteCandidate { index: 0 })
    ));
}

#[test]
fn error_non_finite_candidate_found_while_excluding_another() {
    let pts = vec![
        LabeledPoint::new(0.0, 0.0, Label::ClassA),
        LabeledPoint::new(1.0, 1.0, Label::ClassB),
        LabeledPoint::new(2.0, f64::INFINITY, Label::ClassA),
    ];
    let result = predict_excluding(&pts, 0, &ClassifierConfig::new(1));
    assert!(matches!(
        result,
        Err(KnnError::NonFiniteCandidate { index: 2 })
    ));
}

#[test]
fn error_grid_non_finite_candidate() {
    let mut pts = points();
    pts.push(LabeledPoint::new(f64::NAN, f64::NAN, Label::ClassA));
    let bb = bounding_box(&points());
    let result = decision_grid(&pts, &bb, 2, &ClassifierConfig::new(1));
    assert!(matches!(
        result,
        Err(KnnError::NonFiniteCandidate { index: 2 })
    ));
}

#[test]
fn error_index_out_of_range() {
    let result = predict_excluding(&points(), 2, &ClassifierConfig::new(1));
    assert!(matches!(
        result,
        Err(KnnError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn error_excluding_only_point() {
    let single = [LabeledPoint::new(0.0, 0.0, Label::ClassB)];
    let result = predict_excluding(&single, 0, &ClassifierConfig::new(1));
    assert!(matches!(result, Err(KnnError::EmptyCandidates)));
}

#[test]
fn error_grid_resolution() {
    let pts = points();
    let result = decision_grid(&pts, &bounding_box(&pts), 0, &ClassifierConfig::new(1));
    assert!(matches!(
        result,
        Err(KnnError::InvalidResolution { resolution: 0 })
    ));
}

#[test]
fn error_grid_non_finite_bounds() {
    let bb = BoundingBox {
        min_x: f64::NAN,
        max_x: 1.0,
        min_y: 0.0,
        max_y: 1.0,
    };
    let result = decision_grid(&points(), &bb, 2, &ClassifierConfig::new(1));
    assert!(matches!(result, Err(KnnError::NonFiniteQuery { .. })));
}
