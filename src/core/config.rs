//! Configuration types.
//!
//! - `ShuffleConfig`: where the random source for a shuffle comes from
//! - `RenderConfig`: how a deck is rendered as text, one line per element

use serde::{Deserialize, Serialize};

use super::rng::DeckRng;

/// Random source selection for shuffling.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleConfig {
    /// Fixed seed for reproducible shuffles. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ShuffleConfig {
    /// Reproducible shuffles from `seed`.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Build the engine described by this config.
    #[must_use]
    pub fn rng(&self) -> DeckRng {
        self.seed.map_or_else(DeckRng::from_entropy, DeckRng::new)
    }
}

/// Text layout for rendered decks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Written before each element's name.
    pub label: String,

    /// Written after each element.
    pub line_ending: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            label: "Name: ".to_string(),
            line_ending: "\n".to_string(),
        }
    }
}

impl RenderConfig {
    /// Replace the label (builder pattern).
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Replace the line ending (builder pattern).
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }
}
