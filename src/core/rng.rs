//! Injectable randomness for deck shuffles and damage variance.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only sees `RandomSource`, so tests can
//!   script exact variance values
//! - **Deterministic**: `GameRng` with the same seed produces the same battle
//! - **Serializable**: O(1) state capture and restore for battle snapshots
//! - **Context streams**: independent sequences keyed by a string, such
//!   as per-card stat generation
//!
//! ```
//! use circle_battle::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.uniform(0.9, 1.1), b.uniform(0.9, 1.1));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Source of randomness consumed by the deck builder and the damage roll.
pub trait RandomSource {
    /// Draw a float uniformly from the closed interval `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draw an index uniformly from `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Permute `indices` uniformly in place.
    ///
    /// The default is a Fisher-Yates pass over `below`, which lets
    /// scripted sources control the order.
    fn shuffle_indices(&mut self, indices: &mut [usize]) {
        for i in (1..indices.len()).rev() {
            let j = self.below(i + 1);
            indices.swap(i, j);
        }
    }
}

/// Uniformly shuffle `items` in place using `rng`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    let mut order: Vec<usize> = (0..items.len()).collect();
    rng.shuffle_indices(&mut order);

    // Apply `items[i] = old[order[i]]` one cycle at a time; visited slots
    // are marked by pointing them at themselves.
    for start in 0..items.len() {
        let mut current = start;
        loop {
            let next = order[current];
            order[current] = current;
            if next == start {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}

/// Deterministic ChaCha8-backed generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// Production battles use this; the seed is still recorded so the
    /// battle can be snapshotted and resumed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = rustc_hash::FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Generate a random u32 in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if !low.is_finite() || !high.is_finite() || high <= low {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    fn below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn shuffle_indices(&mut self, indices: &mut [usize]) {
        indices.shuffle(&mut self.inner);
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
