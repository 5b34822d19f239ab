//! Injectable randomness
//!
//! The simulation only ever needs uniform draws in [0, 1). Sessions use a
//! seeded PCG stream; tests can script the exact sequence instead.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform random numbers for spawn timing and spawn chances
pub trait RandomSource {
    /// Next value in [0, 1)
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Seeded RNG for reproducible runs
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    /// Values are clamped into [0, 1); an empty list always yields 0.
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let below_one = 1.0 - f32::EPSILON;
        Self {
            values: values
                .into_iter()
                .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, below_one) })
                .collect(),
            cursor: 0,
        }
    }

    /// A source that always returns the same value
    pub fn constant(value: f32) -> Self {
        Self::new([value])
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
