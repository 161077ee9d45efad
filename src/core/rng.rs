//! Seeded randomness for a match.
//!
//! All randomness in a match (deck shuffles, armor rolls, picking the
//! opposing hero) goes through one `GameRng`, so a seed fixes the whole
//! game.
//!
//! ```
//! use duel_engine::core::GameRng;
//!
//! let mut first = GameRng::new(42);
//! let mut second = GameRng::new(42);
//!
//! let mut a: Vec<u32> = (0..30).collect();
//! let mut b = a.clone();
//! first.shuffle(&mut a);
//! second.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Match RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Succeed with probability `chance`, clamped to `0.0..=1.0`.
    pub fn roll(&mut self, chance: f64) -> bool {
        self.inner.gen_bool(chance.clamp(0.0, 1.0))
    }

    /// Uniform Fisher–Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// One element of `items`, or `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured with `state`.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Seed plus ChaCha word position; constant size however far the stream ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
