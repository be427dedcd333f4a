//! # rust-deck
//!
//! A generic, ordered deck of records.
//!
//! ## Design Principles
//!
//! 1. **Element-Agnostic**: `Deck<T>` treats its elements as opaque values.
//!    `Card` is provided as a stock element type.
//!
//! 2. **Type-Driven Construction**: `deck![a, b]` copies a range when its
//!    arguments are iterators and holds two elements otherwise. The choice
//!    is made during type checking.
//!
//! 3. **Explicit Randomness**: `shuffle_with` takes the random source as an
//!    argument. The implicit `shuffle` uses a per-thread engine, never a
//!    process-wide one.
//!
//! ## Modules
//!
//! - `core`: random sources, configuration, errors
//! - `cards`: the `Card` record type
//! - `deck`: the collection, its cursors and iterators, range traits,
//!   construction dispatch and rendering
//!
//! ```
//! use rust_deck::cards::Card;
//! use rust_deck::deck;
//!
//! let deck = deck![Card::new("x", "y", 5), Card::new("y", "f", 2)];
//! assert_eq!(deck.size(), 2);
//! assert_eq!(deck.to_string(), "Name: x\nName: y\n");
//! ```

pub mod core;
pub mod cards;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{
    with_thread_rng, DeckError, DeckRng, RenderConfig, ShuffleConfig,
};

pub use crate::cards::Card;

pub use crate::deck::{
    Cursor, CursorMut, Deck, IteratorTraits, Iter, IterMut, Named, RangeIterator, Rendered,
};
