//! Deck file loading: the built-in deck and user-supplied TOML/JSON decks.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use tracing::info;

use crate::domain::entities::{Deck, SlideRecord};

/// The built-in deadlock presentation, embedded at compile time.
const BUILTIN_DECK: &str = include_str!("../../assets/deadlock.toml");

/// On-disk deck document shape. TOML decks use `[[slide]]` tables; JSON
/// decks use a `"slides"` array.
#[derive(Debug, Default, Deserialize)]
struct DeckFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "slide", alias = "slides")]
    slides: Vec<SlideRecord>,
}

/// Loads the built-in deadlock deck.
///
/// # Errors
///
/// Returns an error if the embedded document fails validation; this is a
/// build defect, not a runtime condition, and is covered by tests.
pub fn load_builtin() -> Result<Deck> {
    from_toml(BUILTIN_DECK).wrap_err("built-in deck failed validation")
}

/// Loads a deck from a TOML or JSON file, selected by extension.
///
/// # Errors
///
/// Returns an error naming the file if it cannot be read, parsed, or
/// validated. Per the propagation policy, this is fatal to startup.
pub fn load_from_path(path: &Path) -> Result<Deck> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read deck file {}", path.display()))?;

    let deck = if path.extension().is_some_and(|ext| ext == "json") {
        from_json(&content)
    } else {
        from_toml(&content)
    }
    .wrap_err_with(|| format!("invalid deck file {}", path.display()))?;

    info!(path = %path.display(), slides = deck.count(), "Loaded deck");
    Ok(deck)
}

fn from_toml(content: &str) -> Result<Deck> {
    let file: DeckFile = toml::from_str(content).wrap_err("deck is not valid TOML")?;
    build(file)
}

fn from_json(content: &str) -> Result<Deck> {
    let file: DeckFile = serde_json::from_str(content).wrap_err("deck is not valid JSON")?;
    build(file)
}

fn build(file: DeckFile) -> Result<Deck> {
    let deck = Deck::load(file.slides)?;
    Ok(match file.title {
        Some(title) => deck.with_title(title),
        None => deck,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SlideKind;
    use std::io::Write;

    #[test]
    fn test_builtin_deck_loads_and_validates() {
        let deck = load_builtin().unwrap();

        assert!(deck.count() >= 12);
        assert_eq!(deck.get(0).unwrap().kind(), SlideKind::Title);
        assert_eq!(
            deck.slides().last().unwrap().kind(),
            SlideKind::Conclusion
        );
    }

    #[test]
    fn test_builtin_coffman_slide_has_four_conditions() {
        let deck = load_builtin().unwrap();
        let coffman = deck.find_by_id("coffman").unwrap();

        assert_eq!(coffman.kind(), SlideKind::Interactive);
        assert_eq!(coffman.points().len(), 4);
        assert_eq!(coffman.points()[0].label(), "Mutual Exclusion");
    }

    #[test]
    fn test_builtin_rag_steps_reference_the_graph() {
        let deck = load_builtin().unwrap();
        for (id, step) in [("rag-step-1", 1), ("rag-step-2", 2), ("rag-step-3", 3)] {
            let slide = deck.find_by_id(id).unwrap();
            assert_eq!(slide.visual_id(), Some("rag-graph"));
            assert_eq!(slide.visual_step(), Some(step));
        }
    }

    #[test]
    fn test_load_toml_deck_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
                title = "Test Deck"

                [[slide]]
                id = "cover"
                type = "title"
                title = "Hello"
            "#
        )
        .unwrap();

        let deck = load_from_path(file.path()).unwrap();
        assert_eq!(deck.title(), Some("Test Deck"));
        assert_eq!(deck.count(), 1);
    }

    #[test]
    fn test_load_json_deck_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"slides": [{{"id": "cover", "type": "title", "title": "Hello"}}]}}"#
        )
        .unwrap();

        let deck = load_from_path(file.path()).unwrap();
        assert_eq!(deck.count(), 1);
        assert_eq!(deck.get(0).unwrap().title(), "Hello");
    }

    #[test]
    fn test_load_reports_schema_violation_with_slide_id() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
                [[slide]]
                id = "broken"
                type = "content"
            "#
        )
        .unwrap();

        let err = load_from_path(file.path()).unwrap_err();
        let report = format!("{err:?}");
        assert!(report.contains("broken"));
        assert!(report.contains("`title`"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_from_path(Path::new("/nonexistent/deck.toml")).is_err());
    }
}
