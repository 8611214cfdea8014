//! Random source used by every randomized decision in the field.
//!
//! The simulator never reaches for a global RNG. Callers pass a
//! [`RandomSource`]: the browser front-end hands in a seeded-from-entropy
//! `StdRng`, tests hand in a fixed seed or a [`SequenceRandom`] script.

use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::TAU;

pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform value in `[min, max)`.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.unit() * (max - min)
    }

    fn range_of(&mut self, bounds: (f32, f32)) -> f32 {
        self.range(bounds.0, bounds.1)
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }

    /// Uniform value in `[-span / 2, span / 2)`.
    fn centered(&mut self, span: f32) -> f32 {
        (self.unit() - 0.5) * span
    }

    fn angle(&mut self) -> f32 {
        self.unit() * TAU
    }
}

impl RandomSource for StdRng {
    fn unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Replays a fixed list of unit values, wrapping around at the end.
///
/// An empty script behaves like a constant `0.0`.
#[derive(Clone, Debug, Default)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v.clamp(0.0, 1.0 - f32::EPSILON)
    }
}
