//! Random sources for shuffling.
//!
//! - **Deterministic**: Same seed produces an identical shuffle order
//! - **Thread-local engine**: `Deck::shuffle()` draws from a per-thread engine
//!   that is seeded from OS entropy on first use and reused afterwards
//!
//! `DeckRng` implements [`rand::RngCore`], so it can be handed to
//! `Deck::shuffle_with` like any other random source.
//!
//! ```
//! use rust_deck::core::DeckRng;
//! use rust_deck::deck::Deck;
//!
//! let mut a: Deck<u32> = (0..10).collect();
//! let mut b = a.clone();
//! a.shuffle_with(&mut DeckRng::new(42));
//! b.shuffle_with(&mut DeckRng::new(42));
//! assert_eq!(a, b);
//! ```

use std::cell::RefCell;

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Seedable ChaCha8 engine used to permute decks.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create an engine with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an engine seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = OsRng.next_u64();
        debug!(seed, "seeded deck rng from entropy");
        Self::new(seed)
    }

    /// The seed this engine was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for DeckRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

thread_local! {
    static THREAD_RNG: RefCell<DeckRng> = RefCell::new(DeckRng::from_entropy());
}

/// Run `f` with this thread's shared engine.
///
/// The engine is created lazily on the first call made from each thread and
/// lives until the thread exits. It is never shared between threads.
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f`.
pub fn with_thread_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut DeckRng) -> R,
{
    THREAD_RNG.with(|rng| f(&mut rng.borrow_mut()))
}
