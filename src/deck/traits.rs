//! Iterator capabilities used to build decks from ranges.
//!
//! - `IteratorTraits`: a position that dereferences to some `Value`
//! - `RangeIterator`: a position that can copy the half-open range
//!   `[self, end)` out of the sequence it walks
//!
//! Every [`Iterator`] has `IteratorTraits` with `Value = Item`; every
//! [`ExactSizeIterator`] is a `RangeIterator`, where the range between two
//! iterators over the same sequence is measured by their remaining lengths.
//! The deck's own [`Cursor`](super::Cursor) implements both with
//! `Value = T`, copying elements out of the deck.

use crate::core::error::DeckError;

/// Types that denote a position yielding a value of type `Value`.
///
/// A `Value` of `()` marks a position without a readable value; such types
/// are not classified as iterators by [`is_iterator!`](crate::is_iterator).
pub trait IteratorTraits {
    /// Type reached by dereferencing the position.
    type Value;
}

impl<I: Iterator> IteratorTraits for I {
    type Value = I::Item;
}

/// Positions that can delimit a half-open range `[begin, end)`.
pub trait RangeIterator: IteratorTraits + Sized {
    /// Number of values between `self` and `end`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvertedRange`] when `end` lies before `self`, and
    /// [`DeckError::ForeignEndpoints`] when the implementation can tell that
    /// the two positions walk different sequences.
    fn distance_to(&self, end: &Self) -> Result<usize, DeckError>;

    /// Copy `count` values starting at this position, in order.
    fn copy_n(self, count: usize) -> Vec<Self::Value>;
}

impl<I: ExactSizeIterator> RangeIterator for I {
    fn distance_to(&self, end: &Self) -> Result<usize, DeckError> {
        let (begin, end) = (self.len(), end.len());
        begin
            .checked_sub(end)
            .ok_or_else(|| DeckError::InvertedRange { overshoot: end - begin })
    }

    fn copy_n(self, count: usize) -> Vec<I::Item> {
        self.take(count).collect()
    }
}
