//! Weighted majority voting over selected neighbors.

use knnlab_datasets::Label;

use crate::config::Weighting;
use crate::result::Neighbor;

/// Vote weight of a neighbor sitting exactly on the query under
/// [`Weighting::Distance`].
///
/// Finite, not infinity: tallies must stay finite so ties compare normally.
pub const ZERO_DISTANCE_WEIGHT: f64 = 1e10;

/// Per-label vote totals, indexed by [`Label::index`].
pub type Tally = [f64; 2];

/// Weight a single neighbor contributes.
#[inline]
pub(crate) fn vote_weight(distance: f64, weighting: Weighting) -> f64 {
    match weighting {
        Weighting::Uniform => 1.0,
        Weighting::Distance if distance == 0.0 => ZERO_DISTANCE_WEIGHT,
        Weighting::Distance => 1.0 / distance,
    }
}

/// Accumulates `(distance, label)` votes into a two-slot tally.
pub(crate) fn tally_votes(
    votes: impl IntoIterator<Item = (f64, Label)>,
    weighting: Weighting,
) -> Tally {
    let mut tally = [0.0; 2];
    for (d, label) in votes {
        tally[label.index()] += vote_weight(d, weighting);
    }
    tally
}

/// Label with the larger total; Class A wins ties.
#[inline]
pub(crate) fn winner(tally: &Tally) -> Label {
    if tally[Label::ClassB.index()] > tally[Label::ClassA.index()] {
        Label::ClassB
    } else {
        Label::ClassA
    }
}

/// Predicts a label from an already-selected neighbor list.
///
/// An empty list tallies zero for both labels and therefore yields
/// [`Label::ClassA`].
pub fn vote(neighbors: &[Neighbor], weighting: Weighting) -> Label {
    winner(&tally_votes(
        neighbors.iter().map(|n| (n.distance, n.point.label)),
        weighting,
    ))
}
