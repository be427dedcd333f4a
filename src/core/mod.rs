//! Core support types: random sources, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{RenderConfig, ShuffleConfig};
pub use error::DeckError;
pub use rng::{with_thread_rng, DeckRng};
