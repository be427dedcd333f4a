//! Record types stored in decks.
//!
//! The deck itself is generic over its element type; `Card` is the stock
//! element used by rendering and the examples.

pub mod card;

pub use card::Card;
