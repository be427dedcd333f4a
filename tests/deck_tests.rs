//! Deck construction and traversal tests.
//!
//! These tests exercise the public surface the way a caller would:
//! - Range construction from cursors and standard iterators
//! - Element-list construction
//! - Cursor walks and iterator traversal
//! - The end-to-end render scenario

use rust_deck::cards::Card;
use rust_deck::core::{DeckError, RenderConfig};
use rust_deck::deck::Deck;

fn e1() -> Card {
    Card::new("x", "y", 5)
}

fn e2() -> Card {
    Card::new("y", "f", 2)
}

fn numbered(count: i32) -> Vec<Card> {
    (0..count)
        .map(|i| Card::new(format!("card-{i}"), "s", i))
        .collect()
}

// =============================================================================
// Construction Tests
// =============================================================================

/// Range construction keeps length and order of the source.
#[test]
fn test_range_preserves_order_and_length() {
    let source = numbered(8);
    let deck = Deck::from_range(source.iter().cloned(), source[8..].iter().cloned());

    assert_eq!(deck.size(), source.len());
    assert!(deck.iter().eq(source.iter()));
}

/// A sub-range copies only the span between the endpoints.
#[test]
fn test_range_copies_subspan() {
    let source = numbered(6);
    let deck = Deck::from_range(source[2..].iter().cloned(), source[5..].iter().cloned());

    let numbers: Vec<_> = deck.iter().map(Card::number).collect();
    assert_eq!(numbers, vec![2, 3, 4]);
}

/// Range construction from another deck's cursors.
#[test]
fn test_range_from_deck_cursors() {
    let source = Deck::from_elements(numbered(5));
    let mut begin = source.begin();
    begin.advance().advance();
    let mut end = source.end();
    end.retreat();

    let deck = Deck::from_range(begin, end);
    let numbers: Vec<_> = deck.iter().map(Card::number).collect();
    assert_eq!(numbers, vec![2, 3]);
}

/// Checked construction reports inverted ranges.
#[test]
fn test_try_from_range_reports_inverted() {
    let source = Deck::from_elements(numbered(4));
    let mut begin = source.begin();
    begin.advance().advance().advance();

    let result = Deck::try_from_range(begin, source.begin());
    assert_eq!(result, Err(DeckError::InvertedRange { overshoot: 3 }));
}

/// Element lists keep argument order; an empty list is an empty deck.
#[test]
fn test_element_list_order() {
    let deck = Deck::from_elements([e1(), e2(), e1()]);
    let names: Vec<_> = deck.iter().map(Card::name).collect();
    assert_eq!(names, vec!["x", "y", "x"]);

    let empty: Deck<Card> = Deck::from_elements([]);
    assert_eq!(empty.size(), 0);
}

/// Decks can be moved without copying their elements.
#[test]
fn test_move_keeps_contents() {
    let deck = Deck::from_elements([e1(), e2()]);
    let moved = deck;
    assert_eq!(moved.size(), 2);
    assert_eq!(moved.get(0), Some(&e1()));
}

// =============================================================================
// Traversal Tests
// =============================================================================

/// Advancing exactly size() times reaches end(); fewer never does.
#[test]
fn test_cursor_reaches_end_after_size_steps() {
    for count in 1..6 {
        let deck = Deck::from_elements(numbered(count));
        let mut cursor = deck.begin();

        for _ in 0..deck.size() {
            assert_ne!(cursor, deck.end());
            cursor.advance();
        }

        assert_eq!(cursor, deck.end());
    }
}

/// Cursors from two decks never compare equal.
#[test]
fn test_cursor_equality_is_per_deck() {
    let a = Deck::from_elements(numbered(3));
    let b = Deck::from_elements(numbered(3));

    assert_eq!(a.begin(), a.begin());
    assert_ne!(a.begin(), b.begin());
    assert_ne!(a.end(), b.end());
}

/// Empty decks are still distinct buffers.
#[test]
fn test_cursor_equality_for_empty_decks() {
    let a: Deck<Card> = Deck::new();
    let b: Deck<Card> = Deck::new();

    assert_eq!(a.begin(), a.end());
    assert_ne!(a.begin(), b.begin());
    assert_eq!(
        Deck::try_from_range(a.begin(), b.end()),
        Err(DeckError::ForeignEndpoints)
    );
}

/// Decks of zero-sized elements are still distinct buffers.
#[test]
fn test_cursor_equality_for_zero_sized_elements() {
    let a = Deck::from_elements([(), (), ()]);
    let b = Deck::from_elements([(), (), ()]);

    assert_ne!(a.begin(), b.begin());
    assert_eq!(
        Deck::try_from_range(a.begin(), b.end()),
        Err(DeckError::ForeignEndpoints)
    );

    let copy = Deck::from_range(a.begin(), a.end());
    assert_eq!(copy.size(), 3);
}

/// The read-only iterator walks forwards and backwards.
#[test]
fn test_bidirectional_iteration() {
    let deck = Deck::from_elements(numbered(4));

    let forward: Vec<_> = deck.iter().map(Card::number).collect();
    let backward: Vec<_> = deck.iter().rev().map(Card::number).collect();

    assert_eq!(forward, vec![0, 1, 2, 3]);
    assert_eq!(backward, vec![3, 2, 1, 0]);
}

/// A mutable cursor edits elements in place.
#[test]
fn test_cursor_mut_replaces_elements() {
    let mut deck = Deck::from_elements([e1(), e2()]);

    let mut cursor = deck.begin_mut();
    cursor.advance();
    *cursor.get_mut() = Card::new("z", "q", 1);

    let names: Vec<_> = deck.iter().map(Card::name).collect();
    assert_eq!(names, vec!["x", "z"]);
}

/// `for` loops work over owned, borrowed and mutably borrowed decks.
#[test]
fn test_for_loops() {
    let mut deck: Deck<u32> = (1..=3).collect();

    for value in &mut deck {
        *value += 10;
    }

    let mut sum = 0;
    for value in &deck {
        sum += value;
    }
    assert_eq!(sum, 36);

    let owned: Vec<u32> = deck.into_iter().collect();
    assert_eq!(owned, vec![11, 12, 13]);
}

// =============================================================================
// End-to-End
// =============================================================================

/// Two cards in, two cards out, rendered one per line.
#[test]
fn test_two_card_scenario() {
    let deck = Deck::from_elements([e1(), e2()]);

    assert_eq!(deck.size(), 2);

    let mut iter = deck.iter();
    assert_eq!(iter.next(), Some(&e1()));
    assert_eq!(iter.next(), Some(&e2()));
    assert_eq!(iter.next(), None);

    let lines: Vec<_> = deck.render(&RenderConfig::default()).lines().collect();
    assert_eq!(lines, vec!["Name: x", "Name: y"]);
    assert_eq!(deck.to_string(), "Name: x\nName: y\n");
}
