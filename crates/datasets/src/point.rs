//! Labeled points and query coordinates.

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// Binary class label.
///
/// Serializes as the integer `0` (Class A) or `1` (Class B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    /// Label 0, "Class A".
    ClassA,
    /// Label 1, "Class B". The positive class for confusion matrices.
    ClassB,
}

impl Label {
    /// Both labels in ascending order.
    pub const ALL: [Label; 2] = [Label::ClassA, Label::ClassB];

    /// Returns the tally slot for this label (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Label::ClassA => 0,
            Label::ClassB => 1,
        }
    }

    /// Human-readable class name.
    pub fn name(self) -> &'static str {
        match self {
            Label::ClassA => "Class A",
            Label::ClassB => "Class B",
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.index() as u8
    }
}

impl TryFrom<u8> for Label {
    type Error = DatasetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::ClassA),
            1 => Ok(Label::ClassB),
            other => Err(DatasetError::InvalidLabel { value: other }),
        }
    }
}

/// A point in the plane, not necessarily part of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub x: f64,
    pub y: f64,
}

impl Query {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A generated sample: position plus class label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

impl LabeledPoint {
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self { x, y, label }
    }

    /// The point's coordinates as a query.
    pub fn position(&self) -> Query {
        Query::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_index_order() {
        assert_eq!(Label::ClassA.index(), 0);
        assert_eq!(Label::ClassB.index(), 1);
        assert!(Label::ClassA < Label::ClassB);
        assert_eq!(Label::ALL, [Label::ClassA, Label::ClassB]);
    }

    #[test]
    fn test_label_try_from() {
        assert_eq!(Label::try_from(0).unwrap(), Label::ClassA);
        assert_eq!(Label::try_from(1).unwrap(), Label::ClassB);
        assert!(matches!(
            Label::try_from(2),
            Err(DatasetError::InvalidLabel { value: 2 })
        ));
    }

    #[test]
    fn test_label_serializes_as_integer() {
        let p = LabeledPoint::new(0.5, -1.0, Label::ClassB);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":0.5,"y":-1.0,"label":1}"#);
    }

    #[test]
    fn test_label_rejects_out_of_range_integer() {
        let result: Result<LabeledPoint, _> =
            serde_json::from_str(r#"{"x":0.0,"y":0.0,"label":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_position() {
        let p = LabeledPoint::new(3.0, 4.0, Label::ClassA);
        assert_eq!(p.position(), Query::new(3.0, 4.0));
    }

    #[test]
    fn test_query_is_finite() {
        assert!(Query::new(0.0, 1.0).is_finite());
        assert!(!Query::new(f64::NAN, 1.0).is_finite());
        assert!(!Query::new(0.0, f64::INFINITY).is_finite());
    }
}
