//! Deck navigation: the owned state container over an immutable catalog.

use crate::domain::entities::{Deck, Slide};
use crate::domain::errors::DeckError;

/// Owns the current slide index and exposes safe navigation over the deck.
///
/// The only mutable state is `current`, with the invariant
/// `0 <= current < deck.count()`. `next` and `previous` saturate silently at
/// the boundaries; `jump_to` rejects out-of-range targets without touching
/// the index. The controller is constructed once and passed explicitly to
/// whatever consumes it; there is no ambient singleton.
#[derive(Debug)]
pub struct DeckController {
    deck: Deck,
    current: usize,
}

impl DeckController {
    /// Creates a controller positioned on the first slide.
    ///
    /// The deck is non-empty by construction ([`Deck::load`] rejects empty
    /// record lists), so index 0 is always valid.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self { deck, current: 0 }
    }

    /// Returns the underlying catalog.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the current slide index.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the slide at the current index.
    ///
    /// Always in range: the index invariant guarantees the lookup succeeds.
    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        &self.deck.slides()[self.current]
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn count(&self) -> usize {
        self.deck.count()
    }

    /// Advances to the next slide, saturating at the last one.
    ///
    /// Returns whether the index moved. Calling at the last slide is a
    /// silent no-op.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.deck.count() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Retreats to the previous slide, saturating at the first one.
    ///
    /// Returns whether the index moved. Calling at the first slide is a
    /// silent no-op.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps directly to the given slide index.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] for indices outside `[0, count)`;
    /// the current index is left untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), DeckError> {
        if index >= self.deck.count() {
            return Err(DeckError::out_of_range(index, self.deck.count()));
        }
        self.current = index;
        Ok(())
    }

    /// Returns the completed fraction of the deck, `(current + 1) / count`.
    ///
    /// Lies in `[1/N, 1.0]`; pure, no side effects.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.deck.count() as f64
    }

    /// Returns true when positioned on the first slide.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Returns true when positioned on the last slide.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.deck.count()
    }
}
