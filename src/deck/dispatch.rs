//! Type-driven selection between range and element-list construction.
//!
//! `deck![a, b]` is ambiguous: `a` and `b` may be the two endpoints of a
//! range, or two elements. The choice is made from the argument type alone,
//! during type checking, with no runtime branch.
//!
//! Classification uses method resolution on layered references. A witness
//! for type `X` is called as `(&&&Witness::<X>::new()).classify()`; the compiler
//! tries the candidate impls from the outermost reference inwards and picks
//! the first whose bounds hold:
//!
//! 1. `X: IteratorTraits<Value = ()>`: a position with no readable value,
//!    classified as [`NotIterator`]
//! 2. `X: IteratorTraits`: classified as [`IsIterator`]
//! 3. anything else: classified as [`NotIterator`]
//!
//! Being an iterator is decided on [`IteratorTraits`] alone. Building a range
//! from two iterators additionally needs [`RangeIterator`], which std
//! iterators get through `ExactSizeIterator`. So `deck![0u32..3, 1u32..3]`
//! copies a range, while `deck![0u64..3, 1u64..3]` is classified as a range
//! and is rejected at compile time because `Range<u64>` has no exact size.
//!
//! The items in this module are support for [`is_iterator!`](crate::is_iterator)
//! and [`deck!`](crate::deck) and are hidden from the documentation.
//!
//! Classification only sees bounds that are provable where the macro
//! expands. Inside a generic function over an unconstrained `T`, every `T`
//! falls through to [`NotIterator`].

use std::marker::PhantomData;

use super::collection::Deck;
use super::traits::{IteratorTraits, RangeIterator};

/// Zero-sized stand-in for a type being classified.
#[doc(hidden)]
pub struct Witness<T: ?Sized>(PhantomData<fn() -> PhantomData<T>>);

impl<T: ?Sized> Witness<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Witness<T> {
    /// Witness the type of `value` without naming it.
    #[must_use]
    pub const fn of(_value: &T) -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for Witness<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Classification: the type is an iterator; two of them delimit a range.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsIterator;

/// Classification: the type is a plain element.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotIterator;

impl IsIterator {
    #[must_use]
    pub const fn is_iterator(self) -> bool {
        true
    }

    /// Copy the range `[begin, end)`.
    ///
    /// Requires [`RangeIterator`]; an iterator without it is still classified
    /// here, so a `deck![a, b]` over such a type does not compile.
    ///
    /// # Panics
    ///
    /// Panics if the endpoints do not form a valid range; see
    /// [`Deck::from_range`].
    pub fn build<I: RangeIterator>(self, begin: I, end: I) -> Deck<I::Value> {
        Deck::from_range(begin, end)
    }
}

impl NotIterator {
    #[must_use]
    pub const fn is_iterator(self) -> bool {
        false
    }

    /// Collect both arguments as elements, in order.
    pub fn build<T>(self, first: T, second: T) -> Deck<T> {
        Deck::from_elements([first, second])
    }
}

/// Highest priority: positions whose value type is `()`.
#[doc(hidden)]
pub trait UnitValueKind {
    #[inline]
    fn classify(&self) -> NotIterator {
        NotIterator
    }
}

impl<I> UnitValueKind for &&Witness<I> where I: IteratorTraits<Value = ()> {}

/// Positions with a readable value type.
#[doc(hidden)]
pub trait IteratorKind {
    #[inline]
    fn classify(&self) -> IsIterator {
        IsIterator
    }
}

impl<I: IteratorTraits> IteratorKind for &Witness<I> {}

/// Fallback for every other type.
#[doc(hidden)]
pub trait OpaqueKind {
    #[inline]
    fn classify(&self) -> NotIterator {
        NotIterator
    }
}

impl<T: ?Sized> OpaqueKind for Witness<T> {}

/// Does `T` behave as an iterator over some value type?
///
/// Expands to a `bool` fixed during type checking. `true` when `T`
/// implements [`IteratorTraits`](crate::deck::IteratorTraits) with a value
/// type other than `()`.
///
/// ```
/// use rust_deck::cards::Card;
/// use rust_deck::deck::Cursor;
/// use rust_deck::is_iterator;
///
/// assert!(is_iterator!(Cursor<'static, Card>));
/// assert!(is_iterator!(std::vec::IntoIter<Card>));
/// assert!(!is_iterator!(Card));
/// assert!(!is_iterator!(std::iter::Empty<()>));
/// ```
#[macro_export]
macro_rules! is_iterator {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::deck::dispatch::{IteratorKind as _, OpaqueKind as _, UnitValueKind as _};
        (&&&$crate::deck::dispatch::Witness::<$ty>::new())
            .classify()
            .is_iterator()
    }};
}

/// Build a [`Deck`](crate::deck::Deck).
///
/// - `deck![]` is an empty deck.
/// - `deck![a, b, c, ...]` moves the elements in, in order.
/// - `deck![a, b]` copies the range `[a, b)` when the arguments are
///   iterators (see [`is_iterator!`](crate::is_iterator)) and holds the two
///   elements otherwise. The range path needs
///   [`RangeIterator`](crate::deck::RangeIterator); an iterator type without
///   it, such as `Range<u64>`, is a compile error here.
///
/// ```
/// use rust_deck::cards::Card;
/// use rust_deck::deck;
///
/// let source = deck![Card::new("a", "s", 1), Card::new("b", "s", 2), Card::new("c", "s", 3)];
/// let copy = deck![source.begin(), source.end()];
/// assert_eq!(copy.size(), 3);
///
/// let pair = deck![Card::new("x", "y", 5), Card::new("y", "f", 2)];
/// assert_eq!(pair.size(), 2);
/// ```
#[macro_export]
macro_rules! deck {
    () => {
        $crate::deck::Deck::new()
    };
    ($first:expr, $second:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::deck::dispatch::{IteratorKind as _, OpaqueKind as _, UnitValueKind as _};
        let first = $first;
        let second = $second;
        (&&&$crate::deck::dispatch::Witness::of(&first))
            .classify()
            .build(first, second)
    }};
    ($($element:expr),+ $(,)?) => {
        $crate::deck::Deck::from_elements([$($element),+])
    };
}
