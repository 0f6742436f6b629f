//! Injectable randomness for tile spawns.
//!
//! The spawn generator only ever asks two questions: "which of these `n`
//! cells?" and "did an event with probability `p` happen?". [`TileRng`]
//! captures exactly that, so sessions can run on a seeded [`GameRng`] in
//! production and on a [`ScriptedRng`] in tests.
//!
//! ```
//! use rust_2048::core::{GameRng, TileRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! for _ in 0..10 {
//!     assert_eq!(a.pick(16), b.pick(16));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the random draws a spawn needs.
pub trait TileRng {
    /// Uniform index in `0..len`. `len` is always positive.
    fn pick(&mut self, len: usize) -> usize;

    /// Returns true with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping high-quality output. The stream
/// position can be captured with [`GameRng::state`] and restored later.
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

    /// Create an RNG seeded from OS entropy. The chosen seed is available
    /// through [`GameRng::seed`] so the game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
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

impl TileRng for GameRng {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed, cycling script of unit-interval draws.
///
/// Each draw `u` in `[0, 1)` answers one question: `pick(len)` returns
/// `floor(u * len)` and `chance(p)` returns `u < p`.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// # Panics
    ///
    /// Panics if `draws` is empty or any draw is outside `[0, 1)`.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        let draws: Vec<f64> = draws.into_iter().collect();
        assert!(!draws.is_empty(), "ScriptedRng needs at least one draw");
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "ScriptedRng draws must lie in [0, 1)"
        );
        Self { draws, cursor: 0 }
    }

    /// Script that always picks the first candidate and rolls low.
    #[must_use]
    pub fn zeros() -> Self {
        Self::new([0.0])
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    fn next_draw(&mut self) -> f64 {
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}

impl TileRng for ScriptedRng {
    fn pick(&mut self, len: usize) -> usize {
        let index = (self.next_draw() * len as f64) as usize;
        index.min(len - 1)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.next_draw() < probability
    }
}
