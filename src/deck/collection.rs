//! The deck: an owned, ordered buffer of elements.
//!
//! A `Deck<T>` keeps its elements in insertion order until it is shuffled.
//! Duplicates are allowed. It exclusively owns its elements; cursors and
//! iterators borrow it and therefore block any mutation while they live.
//!
//! ## Construction
//!
//! - [`Deck::new`]: empty
//! - [`Deck::from_range`]: copy a half-open range `[begin, end)`
//! - [`Deck::from_elements`]: move a list of elements in, in order
//! - [`deck!`](crate::deck!): picks between the two from the argument types
//!
//! ## Shuffling
//!
//! [`Deck::shuffle_with`] permutes the deck with a caller-supplied random
//! source. [`Deck::shuffle`] uses a lazily seeded engine owned by the calling
//! thread (see [`with_thread_rng`]).

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::cursor::{Cursor, CursorMut, Iter, IterMut};
use super::traits::RangeIterator;
use crate::core::error::DeckError;
use crate::core::rng::with_thread_rng;

/// An ordered collection of elements.
///
/// ## Usage
///
/// ```
/// use rust_deck::cards::Card;
/// use rust_deck::core::DeckRng;
/// use rust_deck::deck::Deck;
///
/// let mut deck = Deck::from_elements([
///     Card::new("x", "y", 5),
///     Card::new("y", "f", 2),
/// ]);
/// assert_eq!(deck.size(), 2);
///
/// deck.shuffle_with(&mut DeckRng::new(42));
/// assert_eq!(deck.size(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck<T> {
    cards: Vec<T>,
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deck<T> {
    /// Create an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Copy every value in `[begin, end)`, in order.
    ///
    /// Equal endpoints produce an empty deck.
    ///
    /// # Panics
    ///
    /// Panics if `end` lies before `begin`, or if the endpoints walk
    /// different sequences. Use [`Deck::try_from_range`] to get an error
    /// instead.
    #[must_use]
    pub fn from_range<I>(begin: I, end: I) -> Self
    where
        I: RangeIterator<Value = T>,
    {
        match Self::try_from_range(begin, end) {
            Ok(deck) => deck,
            Err(err) => panic!("invalid deck range: {err}"),
        }
    }

    /// Copy every value in `[begin, end)`, in order.
    ///
    /// # Errors
    ///
    /// Returns a [`DeckError`] when the endpoints do not form a range.
    pub fn try_from_range<I>(begin: I, end: I) -> Result<Self, DeckError>
    where
        I: RangeIterator<Value = T>,
    {
        let count = begin.distance_to(&end)?;
        let cards = begin.copy_n(count);
        trace!(count, "built deck from range");
        Ok(Self { cards })
    }

    /// Move `elements` into a new deck, preserving their order.
    #[must_use]
    pub fn from_elements<E>(elements: E) -> Self
    where
        E: IntoIterator<Item = T>,
    {
        let cards: Vec<T> = elements.into_iter().collect();
        trace!(count = cards.len(), "built deck from elements");
        Self { cards }
    }

    /// Number of elements in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Element at `index`, counting from the first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cards
    }

    /// Append an element after the last one.
    pub fn push(&mut self, card: T) {
        self.cards.push(card);
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.cards.pop()
    }

    /// Permute the deck in place using `rng`.
    ///
    /// Uses [`SliceRandom::shuffle`], a Fisher–Yates shuffle: walking `i`
    /// from the last index down to 1, element `i` is swapped with an index
    /// drawn uniformly from `0..=i`. With a uniform source every permutation
    /// is equally likely.
    pub fn shuffle_with<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        debug!(len = self.cards.len(), "shuffling deck");
        self.cards.shuffle(rng);
    }

    /// Permute the deck in place using this thread's engine.
    ///
    /// The engine is seeded from OS entropy the first time any deck is
    /// shuffled on the current thread and reused afterwards.
    pub fn shuffle(&mut self) {
        with_thread_rng(|rng| self.shuffle_with(rng));
    }

    /// Cursor at the first element (equal to [`Deck::end`] when empty).
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(&self.cards, 0)
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(&self.cards, self.cards.len())
    }

    /// Mutable cursor at the first element.
    #[must_use]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(&mut self.cards, 0)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.cards)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.cards)
    }
}

impl<T> From<Vec<T>> for Deck<T> {
    fn from(cards: Vec<T>) -> Self {
        Self { cards }
    }
}

impl<T> FromIterator<T> for Deck<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T> Extend<T> for Deck<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<T> IntoIterator for Deck<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deck<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deck<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// One element per line.
impl<T: std::fmt::Display> std::fmt::Display for Deck<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for card in self {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
