//! Error types.

/// Deck and navigation errors.
pub mod deck_error;

pub use deck_error::DeckError;
