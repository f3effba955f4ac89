//! Deck catalog: the ordered, immutable sequence of slides for a session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Slide, SlideKind, SlidePoint};
use crate::domain::errors::DeckError;

/// A slide record as authored, before validation.
///
/// Every field is optional so that authoring mistakes surface as
/// [`DeckError::SchemaViolation`] naming the slide and field, rather than as
/// an opaque deserialization failure. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Unique slide identifier. Required.
    #[serde(default)]
    pub id: Option<String>,
    /// Layout kind string. Required; values outside the closed set are
    /// accepted and flagged for fallback rendering.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Display title. Required.
    #[serde(default)]
    pub title: Option<String>,
    /// Display subtitle.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Header icon name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Ordered paragraph/bullet lines.
    #[serde(default)]
    pub content: Option<Vec<String>>,
    /// Ordered structured sub-items.
    #[serde(default)]
    pub points: Option<Vec<PointRecord>>,
    /// Diagram reference for the visual collaborator.
    #[serde(default)]
    pub visual_id: Option<String>,
    /// Diagram step parameter.
    #[serde(default)]
    pub visual_step: Option<u8>,
}

/// A point record as authored, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointRecord {
    /// Point label. Required.
    #[serde(default)]
    pub label: Option<String>,
    /// Point description. Required.
    #[serde(default)]
    pub description: Option<String>,
    /// Deadlock-impact detail.
    #[serde(default)]
    pub impact: Option<String>,
    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,
}

/// The validated slide catalog.
///
/// Constructed once at startup via [`Deck::load`] and never mutated; indices
/// are stable positions into the fixed sequence for the life of the process.
#[derive(Debug, Clone)]
pub struct Deck {
    title: Option<String>,
    slides: Vec<Slide>,
    by_id: HashMap<String, usize>,
}

impl Deck {
    /// Validates raw records into a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] for an empty record list, and
    /// [`DeckError::SchemaViolation`] naming the offending slide when a
    /// required field (`id`, `type`, `title`, point `label`/`description`)
    /// is absent or empty, or when an `id` is duplicated. Unrecognized
    /// `type` strings are not errors; they map to [`SlideKind::Unknown`].
    pub fn load(records: Vec<SlideRecord>) -> Result<Self, DeckError> {
        if records.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let mut slides = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());

        for (position, record) in records.into_iter().enumerate() {
            let slide = validate_record(position, record)?;
            if by_id.insert(slide.id().to_string(), position).is_some() {
                return Err(DeckError::schema(slide.id(), "duplicate `id`"));
            }
            slides.push(slide);
        }

        Ok(Self {
            title: None,
            slides,
            by_id,
        })
    }

    /// Attaches a deck-level display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the deck-level display title, if authored.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the slide at the given ordinal position.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if `index` is not in `[0, count)`.
    pub fn get(&self, index: usize) -> Result<&Slide, DeckError> {
        self.slides
            .get(index)
            .ok_or_else(|| DeckError::out_of_range(index, self.slides.len()))
    }

    /// Returns the slide with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotFound`] if no slide carries that id.
    pub fn find_by_id(&self, id: &str) -> Result<&Slide, DeckError> {
        self.by_id
            .get(id)
            .map(|&position| &self.slides[position])
            .ok_or_else(|| DeckError::not_found(id))
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn count(&self) -> usize {
        self.slides.len()
    }

    /// Returns the ordered slides.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

fn validate_record(position: usize, record: SlideRecord) -> Result<Slide, DeckError> {
    let id = match record.id {
        Some(id) if !id.trim().is_empty() => id,
        _ => {
            return Err(DeckError::schema(
                format!("#{}", position + 1),
                "missing required field `id`",
            ));
        }
    };

    let kind_str = match record.kind {
        Some(kind) if !kind.trim().is_empty() => kind,
        _ => return Err(DeckError::schema(&id, "missing required field `type`")),
    };
    let kind = SlideKind::parse(&kind_str);
    if !kind.is_known() {
        debug!(slide = %id, kind = %kind_str, "Unrecognized slide type, using fallback layout");
    }

    let title = match record.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(DeckError::schema(&id, "missing required field `title`")),
    };

    let mut points = Vec::new();
    for (n, point) in record.points.unwrap_or_default().into_iter().enumerate() {
        points.push(validate_point(&id, n, point)?);
    }

    let mut slide = Slide::new(id, kind, title)
        .with_content(record.content.unwrap_or_default())
        .with_points(points);
    if let Some(subtitle) = record.subtitle {
        slide = slide.with_subtitle(subtitle);
    }
    if let Some(icon) = record.icon {
        slide = slide.with_icon(icon);
    }
    if let Some(visual_id) = record.visual_id {
        slide = slide.with_visual(visual_id);
    }
    if let Some(step) = record.visual_step {
        slide = slide.with_visual_step(step);
    }

    Ok(slide)
}

fn validate_point(slide_id: &str, n: usize, record: PointRecord) -> Result<SlidePoint, DeckError> {
    let label = match record.label {
        Some(label) if !label.trim().is_empty() => label,
        _ => {
            return Err(DeckError::schema(
                slide_id,
                format!("point #{}: missing required field `label`", n + 1),
            ));
        }
    };
    let description = match record.description {
        Some(description) if !description.trim().is_empty() => description,
        _ => {
            return Err(DeckError::schema(
                slide_id,
                format!("point #{}: missing required field `description`", n + 1),
            ));
        }
    };

    let mut point = SlidePoint::new(label, description);
    if let Some(impact) = record.impact {
        point = point.with_impact(impact);
    }
    if let Some(icon) = record.icon {
        point = point.with_icon(icon);
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, kind: &str, title: &str) -> SlideRecord {
        SlideRecord {
            id: Some(id.to_string()),
            kind: Some(kind.to_string()),
            title: Some(title.to_string()),
            ..SlideRecord::default()
        }
    }

    #[test]
    fn test_load_valid_deck() {
        let deck = Deck::load(vec![
            record("cover", "title", "Deadlock"),
            record("intro", "content", "What is a Deadlock?"),
        ])
        .unwrap();

        assert_eq!(deck.count(), 2);
        assert_eq!(deck.get(0).unwrap().id(), "cover");
        assert_eq!(deck.get(1).unwrap().kind(), SlideKind::Content);
    }

    #[test]
    fn test_load_rejects_empty_deck() {
        assert!(matches!(Deck::load(vec![]), Err(DeckError::EmptyDeck)));
    }

    #[test]
    fn test_load_rejects_missing_title_naming_slide() {
        let mut bad = record("coffman", "interactive", "");
        bad.title = None;
        let err = Deck::load(vec![record("cover", "title", "Deadlock"), bad]).unwrap_err();

        match err {
            DeckError::SchemaViolation { slide_id, detail } => {
                assert_eq!(slide_id, "coffman");
                assert!(detail.contains("`title`"));
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_missing_id_by_position() {
        let mut bad = record("", "content", "Untitled");
        bad.id = None;
        let err = Deck::load(vec![bad]).unwrap_err();

        match err {
            DeckError::SchemaViolation { slide_id, .. } => assert_eq!(slide_id, "#1"),
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_load_accepts_unknown_type_with_fallback() {
        let deck = Deck::load(vec![record("weird", "hologram", "Future Layouts")]).unwrap();

        assert_eq!(deck.get(0).unwrap().kind(), SlideKind::Unknown);
    }

    #[test]
    fn test_load_rejects_duplicate_id() {
        let err = Deck::load(vec![
            record("cover", "title", "One"),
            record("cover", "content", "Two"),
        ])
        .unwrap_err();

        match err {
            DeckError::SchemaViolation { slide_id, detail } => {
                assert_eq!(slide_id, "cover");
                assert!(detail.contains("duplicate"));
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_point_without_description() {
        let mut bad = record("coffman", "interactive", "Coffman Conditions");
        bad.points = Some(vec![PointRecord {
            label: Some("Mutual Exclusion".to_string()),
            ..PointRecord::default()
        }]);
        let err = Deck::load(vec![bad]).unwrap_err();

        match err {
            DeckError::SchemaViolation { slide_id, detail } => {
                assert_eq!(slide_id, "coffman");
                assert!(detail.contains("point #1"));
                assert!(detail.contains("`description`"));
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let deck = Deck::load(vec![record("cover", "title", "Deadlock")]).unwrap();

        assert!(deck.get(0).is_ok());
        assert!(matches!(
            deck.get(1),
            Err(DeckError::OutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_find_by_id() {
        let deck = Deck::load(vec![
            record("cover", "title", "Deadlock"),
            record("conclusion", "conclusion", "Summary"),
        ])
        .unwrap();

        assert_eq!(deck.find_by_id("conclusion").unwrap().title(), "Summary");
        assert!(matches!(
            deck.find_by_id("appendix"),
            Err(DeckError::NotFound { .. })
        ));
    }

    #[test]
    fn test_content_and_points_are_independent() {
        let mut both = record("scenario", "split", "The Kitchen Scenario");
        both.content = Some(vec!["Chefs need tools.".to_string()]);
        both.points = Some(vec![PointRecord {
            label: Some("P1".to_string()),
            description: Some("Needs Knife & Bread".to_string()),
            ..PointRecord::default()
        }]);
        let neither = record("cover", "title", "Deadlock");

        let deck = Deck::load(vec![both, neither]).unwrap();
        let scenario = deck.get(0).unwrap();
        assert_eq!(scenario.content().len(), 1);
        assert_eq!(scenario.points().len(), 1);
        let cover = deck.get(1).unwrap();
        assert!(cover.content().is_empty());
        assert!(cover.points().is_empty());
    }
}
