//! Injectable sources of uniform integer draws.

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// A source of uniform integer draws.
///
/// Every roll in the engine goes through this trait. A source does not need
/// to be thread-safe: give each call (or each thread) its own.
pub trait RandomSource {
    /// Draw a uniform integer in `low..=high`. Returns `low` when the range
    /// is empty or a single value.
    fn draw(&mut self, low: u32, high: u32) -> u32;
}

impl RandomSource for StdRng {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.random_range(low..=high)
    }
}

impl RandomSource for ThreadRng {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.random_range(low..=high)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        (**self).draw(low, high)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each value is clamped into the requested range, so a script written for
/// d20 rolls stays valid when the same source is asked for a d6.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<u32>,
    index: usize,
}

impl ScriptedSource {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            index: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws_taken(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() || low >= high {
            return low;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value.clamp(low, high)
    }
}
