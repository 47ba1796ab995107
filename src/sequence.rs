//! Seeded pseudo-random draw stream.
//!
//! A `SeededSequence` folds an arbitrary seed string into a 32-bit
//! accumulator and then steps it with a fixed linear-congruential
//! recurrence. Every draw is a float in `[0, 1)`.
//!
//! The fold and the constants below are part of the reproducibility
//! contract: changing any of them changes every avatar ever generated.

/// LCG multiplier.
pub const MULTIPLIER: u64 = 1_103_515_245;

/// LCG increment.
pub const INCREMENT: u64 = 12_345;

/// LCG modulus (2^31).
pub const MODULUS: u64 = 1 << 31;

/// Multiplier used when folding the seed into the initial state.
const FOLD_FACTOR: i32 = 31;

/// A deterministic stream of draws derived from a seed string.
///
/// The stream is a plain value: copying it forks the sequence, and two
/// copies produce identical draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeededSequence {
    /// Accumulator, always below `MODULUS` once a draw has been made.
    state: u64,
}

impl SeededSequence {
    /// Create a sequence from a seed string.
    ///
    /// Any string is valid, including the empty string. The seed is folded
    /// over its UTF-16 code units with wrapping 32-bit arithmetic, and the
    /// absolute value of the result becomes the starting accumulator.
    pub fn new(seed: &str) -> Self {
        let folded = seed.encode_utf16().fold(0i32, |hash, unit| {
            hash.wrapping_mul(FOLD_FACTOR).wrapping_add(i32::from(unit))
        });

        Self {
            state: u64::from(folded.unsigned_abs()),
        }
    }

    /// Current accumulator value.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance one step, returning the advanced sequence and its draw.
    ///
    /// This is the pure form of [`draw`](Self::draw): `self` is left untouched.
    #[must_use]
    pub fn step(self) -> (Self, f64) {
        let state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        (Self { state }, state as f64 / MODULUS as f64)
    }

    /// Advance in place and return the draw in `[0, 1)`.
    pub fn draw(&mut self) -> f64 {
        let (next, value) = self.step();
        *self = next;
        value
    }

    /// Draw a value in `[low, low + span)`.
    pub fn draw_range(&mut self, low: f64, span: f64) -> f64 {
        low + self.draw() * span
    }

    /// Draw an index in `[0, n)`.
    pub fn draw_index(&mut self, n: usize) -> usize {
        (self.draw() * n as f64).floor() as usize
    }
}

impl Iterator for SeededSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.draw())
    }
}
