//! Binary confusion matrix. Class B (label 1) is the positive class.

use knnlab_datasets::Label;
use serde::Serialize;

/// Tally of prediction outcomes against ground truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub true_positive: usize,
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
}

impl ConfusionMatrix {
    /// Records one prediction.
    pub fn record(&mut self, actual: Label, predicted: Label) {
        match (actual, predicted) {
            (Label::ClassB, Label::ClassB) => self.true_positive += 1,
            (Label::ClassA, Label::ClassA) => self.true_negative += 1,
            (Label::ClassA, Label::ClassB) => self.false_positive += 1,
            (Label::ClassB, Label::ClassA) => self.false_negative += 1,
        }
    }

    /// Number of recorded predictions.
    pub fn total(&self) -> usize {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    /// Number of correct predictions.
    pub fn correct(&self) -> usize {
        self.true_positive + self.true_negative
    }

    /// `(TP + TN) / total`, or `0.0` when nothing was recorded.
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            n => self.correct() as f64 / n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_record_cells() {
        let mut m = ConfusionMatrix::default();
        m.record(Label::ClassB, Label::ClassB);
        m.record(Label::ClassA, Label::ClassA);
        m.record(Label::ClassA, Label::ClassA);
        m.record(Label::ClassA, Label::ClassB);
        m.record(Label::ClassB, Label::ClassA);
        assert_eq!(
            m,
            ConfusionMatrix {
                true_positive: 1,
                true_negative: 2,
                false_positive: 1,
                false_negative: 1,
            }
        );
        assert_eq!(m.total(), 5);
        assert_eq!(m.correct(), 3);
        assert_abs_diff_eq!(m.accuracy(), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_accuracy_is_zero() {
        let m = ConfusionMatrix::default();
        assert_eq!(m.total(), 0);
        assert_eq!(m.accuracy(), 0.0);
    }

    #[test]
    fn test_serializes_cell_names() {
        let m = ConfusionMatrix {
            true_positive: 4,
            true_negative: 3,
            false_positive: 2,
            false_negative: 1,
        };
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(
            json,
            r#"{"true_positive":4,"true_negative":3,"false_positive":2,"false_negative":1}"#
        );
    }
}
