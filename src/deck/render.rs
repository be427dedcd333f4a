//! Text rendering of decks.
//!
//! Each element becomes one line: the configured label, the element's name,
//! then the line ending. With the default [`RenderConfig`] a card named `x`
//! renders as `Name: x`.

use std::fmt;

use super::collection::Deck;
use crate::core::config::RenderConfig;

/// Elements that have a display name.
pub trait Named {
    fn name(&self) -> &str;
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A deck paired with a layout, ready to be formatted.
#[derive(Debug)]
pub struct Rendered<'a, T> {
    deck: &'a Deck<T>,
    config: &'a RenderConfig,
}

impl<'a, T: Named> Rendered<'a, T> {
    /// Rendered lines without line endings, in deck order.
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        let config: &'a RenderConfig = self.config;
        let deck: &'a Deck<T> = self.deck;
        let label = &config.label;
        deck.iter()
            .map(move |card| format!("{label}{}", card.name()))
    }
}

impl<T: Named> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.deck {
            write!(
                f,
                "{}{}{}",
                self.config.label,
                card.name(),
                self.config.line_ending
            )?;
        }
        Ok(())
    }
}

impl<T: Named> Deck<T> {
    /// Render with the given layout.
    ///
    /// ```
    /// use rust_deck::cards::Card;
    /// use rust_deck::core::RenderConfig;
    /// use rust_deck::deck;
    ///
    /// let deck = deck![Card::new("x", "y", 5), Card::new("y", "f", 2)];
    /// let config = RenderConfig::default();
    /// assert_eq!(deck.render(&config).to_string(), "Name: x\nName: y\n");
    /// ```
    #[must_use]
    pub fn render<'a>(&'a self, config: &'a RenderConfig) -> Rendered<'a, T> {
        Rendered { deck: self, config }
    }
}
