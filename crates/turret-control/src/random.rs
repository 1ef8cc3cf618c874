//! Injectable randomness for briefing draws and hit/miss outcomes.
//!
//! Production uses a seeded `ChaCha8Rng`; tests script exact draws with
//! `ScriptedRandom`.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws consumed by the station.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `lo..=hi`.
    fn between(&mut self, lo: usize, hi: usize) -> usize {
        lo + self.index(hi - lo + 1)
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.index(2) == 1
    }
}

impl RandomSource for ChaCha8Rng {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Fixed-sequence source. Each draw consumes the next value modulo `len`;
/// once exhausted every draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        self.values.pop_front().map_or(0, |v| v % len)
    }
}
