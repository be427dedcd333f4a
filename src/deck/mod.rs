//! The deck collection and its traversal types.
//!
//! ## Key Types
//!
//! - `Deck`: owned, ordered buffer with range/list construction and shuffling
//! - `Cursor` / `CursorMut`: positions into a deck
//! - `Iter` / `IterMut`: double-ended iterators built on cursors
//! - `IteratorTraits` / `RangeIterator`: what a range endpoint must provide
//! - `Named` / `Rendered`: one-line-per-element text output

pub mod collection;
pub mod cursor;
pub mod dispatch;
pub mod render;
pub mod traits;

pub use collection::Deck;
pub use cursor::{Cursor, CursorMut, Iter, IterMut};
pub use render::{Named, Rendered};
pub use traits::{IteratorTraits, RangeIterator};
