//! Deck error types.

use thiserror::Error;

/// Errors raised by the slide catalog and the deck controller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeckError {
    /// A slide record is missing a required field or is otherwise malformed.
    /// Fatal at startup: the deck cannot render without a valid catalog.
    #[error("slide `{slide_id}`: {detail}")]
    SchemaViolation {
        /// Identifier of the offending slide (or `#<position>` when the id
        /// itself is missing).
        slide_id: String,
        /// Which field is absent or malformed.
        detail: String,
    },

    /// The deck contains no slides.
    #[error("deck contains no slides")]
    EmptyDeck,

    /// A navigation or lookup index fell outside `[0, len)`. Recovered
    /// locally: the operation is rejected and prior state retained.
    #[error("slide index {index} out of range (deck has {len} slides)")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of slides in the deck.
        len: usize,
    },

    /// No slide carries the requested identifier.
    #[error("no slide with id `{id}`")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },
}

impl DeckError {
    /// Creates a schema violation error.
    #[must_use]
    pub fn schema(slide_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::SchemaViolation {
            slide_id: slide_id.into(),
            detail: detail.into(),
        }
    }

    /// Creates an out-of-range error.
    #[must_use]
    pub const fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Returns whether the error is fatal to startup rather than
    /// recoverable at the controller boundary.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::SchemaViolation { .. } | Self::EmptyDeck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_slide_and_field() {
        let err = DeckError::schema("coffman", "missing required field `title`");
        assert_eq!(
            err.to_string(),
            "slide `coffman`: missing required field `title`"
        );
    }

    #[test]
    fn test_fatality_split() {
        assert!(DeckError::schema("x", "y").is_fatal());
        assert!(DeckError::EmptyDeck.is_fatal());
        assert!(!DeckError::out_of_range(5, 3).is_fatal());
        assert!(!DeckError::not_found("x").is_fatal());
    }
}
