//! The record type held in decks.
//!
//! A `Card` is immutable once built: it carries a display name, a symbol and
//! a number, and only exposes read access to them.

use serde::{Deserialize, Serialize};

use crate::deck::render::Named;

/// A named record.
///
/// ## Example
///
/// ```
/// use rust_deck::cards::Card;
///
/// let card = Card::new("x", "y", 5);
/// assert_eq!(card.name(), "x");
/// assert_eq!(card.to_string(), "Name: x");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    name: String,
    symbol: String,
    number: i32,
}

impl Card {
    /// Create a card from all three fields.
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            number,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Secondary label.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub const fn number(&self) -> i32 {
        self.number
    }
}

impl Named for Card {
    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Name: {}", self.name)
    }
}
