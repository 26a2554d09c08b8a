//! Random number generation for card draws and placement jitter.
//!
//! `SpreadRng` wraps a ChaCha8 stream: entropy-seeded in a running
//! application, fixed-seeded in tests where the draw sequence must be
//! reproducible.
//!
//! ```
//! use tarot_canvas::core::SpreadRng;
//!
//! let mut a = SpreadRng::new(42);
//! let mut b = SpreadRng::new(42);
//! assert_eq!(a.pick_index(78), b.pick_index(78));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG for draws and jitter.
#[derive(Clone, Debug)]
pub struct SpreadRng {
    inner: ChaCha8Rng,
}

impl SpreadRng {
    /// Create a deterministic RNG from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Pick a uniform index into a collection of `len` elements.
    ///
    /// Returns `None` when `len` is zero.
    #[must_use]
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.inner.gen_range(0..len))
        }
    }

    /// Uniform offset in `[-magnitude, magnitude]`.
    #[must_use]
    pub fn jitter(&mut self, magnitude: f64) -> f64 {
        if magnitude <= 0.0 {
            return 0.0;
        }
        self.inner.gen_range(-magnitude..=magnitude)
    }
}
