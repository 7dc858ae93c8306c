//! Seeded linear congruential random source.
//!
//! Every dataset generation owns its own [`SeededRandom`]; the stream is a
//! pure function of the seed and the number of draws taken so far.

use std::f64::consts::PI;

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS_MASK: u64 = 0x7fff_ffff;
const MODULUS: f64 = 2_147_483_648.0;

/// Smallest non-zero value [`SeededRandom::next_uniform`] can return.
///
/// Box–Muller clamps its first uniform to this floor so `ln(u1)` stays finite.
pub const U1_FLOOR: f64 = 1.0 / MODULUS;

/// Deterministic uniform and Gaussian source.
///
/// State update: `state = (state * 1103515245 + 12345) mod 2^31`. The
/// product is taken with wrapping `u64` arithmetic, which is exact modulo
/// 2^31 for any seed.
///
/// # Example
///
/// ```
/// use knnlab_datasets::SeededRandom;
///
/// let mut a = SeededRandom::new(42);
/// let mut b = SeededRandom::new(42);
/// assert_eq!(a.next_uniform(), b.next_uniform());
/// assert_eq!(a.gaussian(), b.gaussian());
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Creates a source whose first draw is derived from `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the generator and returns a value in `[0, 1)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MODULUS_MASK;
        self.state as f64 / MODULUS
    }

    /// Standard-normal sample via Box–Muller, consuming two uniform draws.
    pub fn gaussian(&mut self) -> f64 {
        let u1 = self.next_uniform().max(U1_FLOOR);
        let u2 = self.next_uniform();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}
