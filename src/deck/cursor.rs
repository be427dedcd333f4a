//! Positions and iterators over a deck's buffer.
//!
//! A [`Cursor`] is an index paired with a borrow of the deck's buffer. It
//! can be dereferenced, moved forwards and backwards, and compared with other
//! cursors: two cursors are equal when they denote the same position in the
//! same buffer. Buffer identity is the address of the owning `Vec`, which is
//! distinct for every live deck even when the decks are empty or hold
//! zero-sized elements.
//!
//! Because a cursor borrows the deck, the deck cannot be shuffled or
//! otherwise mutated while any cursor into it is alive; the compiler rejects
//! such code instead of leaving a dangling position behind.
//!
//! ## Contract
//!
//! Dereferencing a cursor at the end position, advancing past the end, or
//! retreating before the beginning is a caller error and panics.
//!
//! ```
//! use rust_deck::deck;
//!
//! let deck = deck![1u8, 2, 3];
//! let mut cursor = deck.begin();
//! let mut seen = Vec::new();
//! while cursor != deck.end() {
//!     seen.push(*cursor.get());
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

use std::iter::FusedIterator;

use super::traits::{IteratorTraits, RangeIterator};
use crate::core::error::DeckError;

/// Read-only position in a deck.
pub struct Cursor<'a, T> {
    buf: &'a Vec<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    #[allow(clippy::ptr_arg)]
    pub(crate) fn new(buf: &'a Vec<T>, index: usize) -> Self {
        debug_assert!(index <= buf.len());
        Self { buf, index }
    }

    /// Zero-based index of this position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Is this the one-past-the-last position?
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index == self.buf.len()
    }

    /// Element at this position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end position.
    #[must_use]
    pub fn get(&self) -> &'a T {
        match self.buf.get(self.index) {
            Some(value) => value,
            None => panic!("dereferenced end cursor at position {}", self.index),
        }
    }

    /// Element at this position, or `None` at the end position.
    #[must_use]
    pub fn try_get(&self) -> Option<&'a T> {
        self.buf.get(self.index)
    }

    /// Move to the next position and return the moved cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end position.
    pub fn advance(&mut self) -> &mut Self {
        assert!(!self.is_end(), "advanced cursor past end");
        self.index += 1;
        self
    }

    /// Move to the next position and return the position held before moving.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end position.
    pub fn post_advance(&mut self) -> Self {
        let previous = *self;
        self.advance();
        previous
    }

    /// Move to the previous position and return the moved cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the first position.
    pub fn retreat(&mut self) -> &mut Self {
        assert!(self.index > 0, "retreated cursor before beginning");
        self.index -= 1;
        self
    }

    fn same_buffer(&self, other: &Self) -> bool {
        std::ptr::eq(self.buf, other.buf)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> std::fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.index)
            .field("len", &self.buf.len())
            .finish()
    }
}

impl<T> IteratorTraits for Cursor<'_, T> {
    type Value = T;
}

impl<T: Clone> RangeIterator for Cursor<'_, T> {
    fn distance_to(&self, end: &Self) -> Result<usize, DeckError> {
        if !self.same_buffer(end) {
            return Err(DeckError::ForeignEndpoints);
        }
        end.index
            .checked_sub(self.index)
            .ok_or_else(|| DeckError::InvertedRange {
                overshoot: self.index - end.index,
            })
    }

    fn copy_n(self, count: usize) -> Vec<T> {
        self.buf[self.index..self.index + count].to_vec()
    }
}

/// Exclusive position in a deck, allowing elements to be modified in place.
pub struct CursorMut<'a, T> {
    buf: &'a mut Vec<T>,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(buf: &'a mut Vec<T>, index: usize) -> Self {
        debug_assert!(index <= buf.len());
        Self { buf, index }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index == self.buf.len()
    }

    /// Element at this position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end position.
    #[must_use]
    pub fn get(&self) -> &T {
        match self.buf.get(self.index) {
            Some(value) => value,
            None => panic!("dereferenced end cursor at position {}", self.index),
        }
    }

    /// Mutable element at this position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end position.
    pub fn get_mut(&mut self) -> &mut T {
        let index = self.index;
        match self.buf.get_mut(index) {
            Some(value) => value,
            None => panic!("dereferenced end cursor at position {index}"),
        }
    }

    /// Consume the cursor, keeping the borrow of its element.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end position.
    #[must_use]
    pub fn into_mut(self) -> &'a mut T {
        let Self { buf, index } = self;
        match buf.get_mut(index) {
            Some(value) => value,
            None => panic!("dereferenced end cursor at position {index}"),
        }
    }

    /// Move to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end position.
    pub fn advance(&mut self) -> &mut Self {
        assert!(!self.is_end(), "advanced cursor past end");
        self.index += 1;
        self
    }

    /// Move to the previous position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the first position.
    pub fn retreat(&mut self) -> &mut Self {
        assert!(self.index > 0, "retreated cursor before beginning");
        self.index -= 1;
        self
    }

    /// Read-only view of the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.buf, self.index)
    }
}

impl<T> std::fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.index)
            .field("len", &self.buf.len())
            .finish()
    }
}

impl<T> IteratorTraits for CursorMut<'_, T> {
    type Value = T;
}

/// Borrowing iterator over a deck, walking a front and a back cursor
/// towards each other.
pub struct Iter<'a, T> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    #[allow(clippy::ptr_arg)]
    pub(crate) fn new(buf: &'a Vec<T>) -> Self {
        Self {
            front: Cursor::new(buf, 0),
            back: Cursor::new(buf, buf.len()),
        }
    }

    fn remaining(&self) -> usize {
        self.back.index - self.front.index
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> std::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front.index)
            .field("back", &self.back.index)
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining() == 0 {
            return None;
        }
        Some(self.front.post_advance().get())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining() == 0 {
            return None;
        }
        Some(self.back.retreat().get())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over a deck.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    rest: &'a mut [T],
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(buf: &'a mut [T]) -> Self {
        Self { rest: buf }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let (first, rest) = std::mem::take(&mut self.rest).split_first_mut()?;
        self.rest = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len(), Some(self.rest.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        let (last, rest) = std::mem::take(&mut self.rest).split_last_mut()?;
        self.rest = rest;
        Some(last)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walk() {
        let values = vec![1, 2, 3];
        let mut cursor = Cursor::new(&values, 0);

        assert_eq!(*cursor.get(), 1);
        cursor.advance();
        assert_eq!(*cursor.get(), 2);
        assert_eq!(cursor.position(), 1);
        cursor.advance().advance();
        assert!(cursor.is_end());
        assert_eq!(cursor.try_get(), None);
    }

    #[test]
    fn test_post_advance_returns_previous_position() {
        let values = vec![1, 2, 3];
        let mut cursor = Cursor::new(&values, 0);

        let previous = cursor.post_advance();
        assert_eq!(previous.position(), 0);
        assert_eq!(cursor.position(), 1);
        assert_ne!(previous, cursor);
    }

    #[test]
    fn test_pre_advance_returns_new_position() {
        let values = vec![1, 2, 3];
        let mut cursor = Cursor::new(&values, 0);

        let moved = *cursor.advance();
        assert_eq!(moved.position(), 1);
        assert_eq!(moved, cursor);
    }

    #[test]
    fn test_cursor_equality_requires_same_buffer() {
        let a = vec![1, 2, 3];
        let b = vec![1, 2, 3];

        assert_eq!(Cursor::new(&a, 1), Cursor::new(&a, 1));
        assert_ne!(Cursor::new(&a, 1), Cursor::new(&a, 2));
        assert_ne!(Cursor::new(&a, 1), Cursor::new(&b, 1));
    }

    #[test]
    fn test_empty_buffers_are_distinct() {
        let a: Vec<u8> = Vec::new();
        let b: Vec<u8> = Vec::new();

        assert_eq!(Cursor::new(&a, 0), Cursor::new(&a, 0));
        assert_ne!(Cursor::new(&a, 0), Cursor::new(&b, 0));
        assert_eq!(
            Cursor::new(&a, 0).distance_to(&Cursor::new(&b, 0)),
            Err(DeckError::ForeignEndpoints)
        );
    }

    #[test]
    fn test_zero_sized_buffers_are_distinct() {
        let a = vec![(); 3];
        let b = vec![(); 3];

        assert_ne!(Cursor::new(&a, 1), Cursor::new(&b, 1));
        assert_eq!(
            Cursor::new(&a, 0).distance_to(&Cursor::new(&b, 3)),
            Err(DeckError::ForeignEndpoints)
        );
        assert_eq!(Cursor::new(&a, 0).distance_to(&Cursor::new(&a, 3)), Ok(3));
    }

    #[test]
    fn test_retreat() {
        let values = vec![1, 2];
        let mut cursor = Cursor::new(&values, 2);
        assert_eq!(*cursor.retreat().get(), 2);
        assert_eq!(*cursor.retreat().get(), 1);
    }

    #[test]
    #[should_panic(expected = "dereferenced end cursor")]
    fn test_dereference_end_panics() {
        let values = vec![1];
        let _ = Cursor::new(&values, 1).get();
    }

    #[test]
    #[should_panic(expected = "past end")]
    fn test_advance_past_end_panics() {
        let values: Vec<u8> = Vec::new();
        Cursor::new(&values, 0).advance();
    }

    #[test]
    fn test_cursor_range_distance() {
        let values = vec![1, 2, 3, 4];
        let other = vec![1, 2, 3, 4];

        let begin = Cursor::new(&values, 1);
        let end = Cursor::new(&values, 3);
        assert_eq!(begin.distance_to(&end), Ok(2));
        assert_eq!(begin.copy_n(2), vec![2, 3]);

        assert_eq!(
            end.distance_to(&begin),
            Err(DeckError::InvertedRange { overshoot: 2 })
        );
        assert_eq!(
            begin.distance_to(&Cursor::new(&other, 3)),
            Err(DeckError::ForeignEndpoints)
        );
    }

    #[test]
    fn test_cursor_mut_edits_in_place() {
        let mut values = vec![1, 2, 3];
        let mut cursor = CursorMut::new(&mut values, 0);

        while !cursor.is_end() {
            *cursor.get_mut() *= 10;
            cursor.advance();
        }

        assert_eq!(values, [10, 20, 30]);
    }

    #[test]
    fn test_cursor_mut_as_cursor() {
        let mut values = vec![1, 2, 3];
        let mut cursor = CursorMut::new(&mut values, 0);
        cursor.advance();
        assert_eq!(cursor.as_cursor().position(), 1);
        assert_eq!(*cursor.as_cursor().get(), 2);
        assert_eq!(*cursor.into_mut(), 2);
    }

    #[test]
    fn test_iter_both_ends() {
        let values = vec![1, 2, 3, 4];
        let mut iter = Iter::new(&values);

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter_mut_both_ends() {
        let mut values = vec![1, 2, 3];
        let mut iter = IterMut::new(&mut values);

        *iter.next().unwrap() = 10;
        *iter.next_back().unwrap() = 30;
        assert_eq!(iter.len(), 1);
        drop(iter);

        assert_eq!(values, [10, 2, 30]);
    }
}
