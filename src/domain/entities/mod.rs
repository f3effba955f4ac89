//! Entity definitions for the slide catalog.

/// Deck catalog and raw slide records.
pub mod deck;
/// Slide, slide kind, and slide point types.
pub mod slide;

pub use deck::{Deck, PointRecord, SlideRecord};
pub use slide::{Slide, SlideKind, SlidePoint};
