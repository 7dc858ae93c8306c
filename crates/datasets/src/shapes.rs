//! Shape generators.
//!
//! Each generator emits `floor(n/2)` Class A points followed by the remaining
//! Class B points, drawing from the random source in that order. Within a
//! point, draws are taken x before y (moons, blobs) or angle before radius
//! (circles).

use std::f64::consts::PI;

use crate::point::{Label, LabeledPoint};
use crate::rng::SeededRandom;

const INNER_RADIUS: f64 = 0.4;
const OUTER_RADIUS: f64 = 1.0;
const BLOB_CENTERS: [(f64, f64); 2] = [(-0.5, -0.5), (0.5, 0.5)];
const BLOB_BASE_SPREAD: f64 = 0.3;

/// Splits `n` into the Class A and Class B counts.
pub(crate) fn split(n: usize) -> (usize, usize) {
    let half = n / 2;
    (half, n - half)
}

/// Two interleaving crescents.
///
/// Class A traces the upper unit semicircle; Class B traces the lower
/// semicircle mirrored and shifted by `(1, 0.5)`. Both coordinates are
/// perturbed by `gaussian() * noise`.
pub fn moons(n: usize, noise: f64, rng: &mut SeededRandom) -> Vec<LabeledPoint> {
    let (n_a, n_b) = split(n);
    let mut points = Vec::with_capacity(n);

    for i in 0..n_a {
        let angle = PI * i as f64 / n_a as f64;
        let x = angle.cos() + rng.gaussian() * noise;
        let y = angle.sin() + rng.gaussian() * noise;
        points.push(LabeledPoint::new(x, y, Label::ClassA));
    }

    for i in 0..n_b {
        let angle = PI * i as f64 / n_b as f64;
        let x = 1.0 - angle.cos() + rng.gaussian() * noise;
        let y = 0.5 - angle.sin() + rng.gaussian() * noise;
        points.push(LabeledPoint::new(x, y, Label::ClassB));
    }

    points
}

/// Concentric rings: Class A at radius 0.4, Class B at radius 1.0.
///
/// Angles are uniform on `[0, 2π)`; radii are perturbed by `gaussian() * noise`.
pub fn circles(n: usize, noise: f64, rng: &mut SeededRandom) -> Vec<LabeledPoint> {
    let (n_a, n_b) = split(n);
    let mut points = Vec::with_capacity(n);
    ring(&mut points, n_a, INNER_RADIUS, noise, Label::ClassA, rng);
    ring(&mut points, n_b, OUTER_RADIUS, noise, Label::ClassB, rng);
    points
}

fn ring(
    out: &mut Vec<LabeledPoint>,
    count: usize,
    radius: f64,
    noise: f64,
    label: Label,
    rng: &mut SeededRandom,
) {
    for _ in 0..count {
        let angle = 2.0 * PI * rng.next_uniform();
        let r = radius + rng.gaussian() * noise;
        out.push(LabeledPoint::new(r * angle.cos(), r * angle.sin(), label));
    }
}

/// Two isotropic Gaussian clusters with per-axis spread `0.3 + noise`.
pub fn blobs(n: usize, noise: f64, rng: &mut SeededRandom) -> Vec<LabeledPoint> {
    let (n_a, n_b) = split(n);
    let spread = BLOB_BASE_SPREAD + noise;
    let mut points = Vec::with_capacity(n);

    for (label, count) in [(Label::ClassA, n_a), (Label::ClassB, n_b)] {
        let (cx, cy) = BLOB_CENTERS[label.index()];
        for _ in 0..count {
            let x = cx + rng.gaussian() * spread;
            let y = cy + rng.gaussian() * spread;
            points.push(LabeledPoint::new(x, y, label));
        }
    }

    points
}
