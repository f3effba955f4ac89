//! Slide entity: one addressable unit of the presentation.

use serde::{Deserialize, Serialize};

/// Layout kind of a slide.
///
/// The kind selects which layout the renderer uses; the navigable core never
/// interprets layout semantics beyond dispatching on this tag. Unrecognized
/// kind strings deserialize to [`SlideKind::Unknown`], which renders with the
/// default content layout instead of failing the deck load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    /// Opening slide: large centered title and subtitle.
    Title,
    /// Numbered paragraph cards.
    #[default]
    Content,
    /// Full-width diagram under the slide header.
    Visual,
    /// Text column on the left, diagram pane on the right.
    Split,
    /// Closing summary cards.
    Conclusion,
    /// Selectable point list with a detail pane.
    Interactive,
    /// Side-by-side method cards.
    Strategy,
    /// Diagram pane with a togglable scenario mode.
    Simulation,
    /// Any kind string outside the closed set; rendered with the
    /// content layout.
    #[serde(other)]
    Unknown,
}

impl SlideKind {
    /// Parses a kind string, falling back to [`SlideKind::Unknown`] for
    /// anything outside the closed set.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "title" => Self::Title,
            "content" => Self::Content,
            "visual" => Self::Visual,
            "split" => Self::Split,
            "conclusion" => Self::Conclusion,
            "interactive" => Self::Interactive,
            "strategy" => Self::Strategy,
            "simulation" => Self::Simulation,
            _ => Self::Unknown,
        }
    }

    /// Returns true if the kind belongs to the closed set.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for SlideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Visual => "visual",
            Self::Split => "split",
            Self::Conclusion => "conclusion",
            Self::Interactive => "interactive",
            Self::Strategy => "strategy",
            Self::Simulation => "simulation",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// A structured sub-item of a slide, used by the interactive and strategy
/// layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidePoint {
    label: String,
    description: String,
    impact: Option<String>,
    icon: Option<String>,
}

impl SlidePoint {
    /// Creates a point with the required label and description.
    #[must_use]
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            impact: None,
            icon: None,
        }
    }

    /// Sets the deadlock-impact detail shown in the interactive detail pane.
    #[must_use]
    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = Some(impact.into());
        self
    }

    /// Sets the icon name for this point.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Returns the point label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the point description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the deadlock-impact detail, if authored.
    #[must_use]
    pub fn impact(&self) -> Option<&str> {
        self.impact.as_deref()
    }

    /// Returns the icon name, if authored.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

/// A validated slide.
///
/// Slides are constructed through [`Deck::load`](super::Deck::load) (or the
/// builder methods in tests) and never mutated afterwards. `content` and
/// `points` are independent: a slide may carry either, both, or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    id: String,
    kind: SlideKind,
    title: String,
    subtitle: Option<String>,
    icon: Option<String>,
    content: Vec<String>,
    points: Vec<SlidePoint>,
    visual_id: Option<String>,
    visual_step: Option<u8>,
}

impl Slide {
    /// Creates a slide with the required id, kind, and title.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: SlideKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            subtitle: None,
            icon: None,
            content: Vec::new(),
            points: Vec::new(),
            visual_id: None,
            visual_step: None,
        }
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the header icon name.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the ordered content lines.
    #[must_use]
    pub fn with_content(mut self, content: Vec<String>) -> Self {
        self.content = content;
        self
    }

    /// Sets the ordered points.
    #[must_use]
    pub fn with_points(mut self, points: Vec<SlidePoint>) -> Self {
        self.points = points;
        self
    }

    /// Sets the diagram reference consumed by the visual collaborator.
    #[must_use]
    pub fn with_visual(mut self, visual_id: impl Into<String>) -> Self {
        self.visual_id = Some(visual_id.into());
        self
    }

    /// Sets the diagram step parameter.
    #[must_use]
    pub const fn with_visual_step(mut self, step: u8) -> Self {
        self.visual_step = Some(step);
        self
    }

    /// Returns the unique slide identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the layout kind.
    #[must_use]
    pub const fn kind(&self) -> SlideKind {
        self.kind
    }

    /// Returns the slide title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the subtitle, if present.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Returns the header icon name, if present.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Returns the ordered content lines (possibly empty).
    #[must_use]
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Returns the ordered points (possibly empty).
    #[must_use]
    pub fn points(&self) -> &[SlidePoint] {
        &self.points
    }

    /// Returns the diagram reference, if present.
    #[must_use]
    pub fn visual_id(&self) -> Option<&str> {
        self.visual_id.as_deref()
    }

    /// Returns the diagram step parameter, if present.
    #[must_use]
    pub const fn visual_step(&self) -> Option<u8> {
        self.visual_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_closed_set() {
        assert_eq!(SlideKind::parse("title"), SlideKind::Title);
        assert_eq!(SlideKind::parse("simulation"), SlideKind::Simulation);
        assert_eq!(SlideKind::parse("strategy"), SlideKind::Strategy);
    }

    #[test]
    fn test_kind_parse_falls_back_to_unknown() {
        assert_eq!(SlideKind::parse("holographic"), SlideKind::Unknown);
        assert_eq!(SlideKind::parse(""), SlideKind::Unknown);
        assert!(!SlideKind::Unknown.is_known());
        assert!(SlideKind::Split.is_known());
    }

    #[test]
    fn test_kind_deserializes_unknown_via_other() {
        #[derive(serde::Deserialize)]
        struct Probe {
            kind: SlideKind,
        }
        let probe: Probe = toml::from_str(r#"kind = "hologram""#).unwrap();
        assert_eq!(probe.kind, SlideKind::Unknown);
    }

    #[test]
    fn test_slide_builder() {
        let slide = Slide::new("rag-step-1", SlideKind::Split, "Partial Acquisition")
            .with_subtitle("P1 claims the Knife")
            .with_content(vec!["P1 acquires the Knife.".to_string()])
            .with_visual("rag-graph")
            .with_visual_step(1);

        assert_eq!(slide.id(), "rag-step-1");
        assert_eq!(slide.kind(), SlideKind::Split);
        assert_eq!(slide.subtitle(), Some("P1 claims the Knife"));
        assert_eq!(slide.content().len(), 1);
        assert!(slide.points().is_empty());
        assert_eq!(slide.visual_id(), Some("rag-graph"));
        assert_eq!(slide.visual_step(), Some(1));
    }

    #[test]
    fn test_point_builder() {
        let point = SlidePoint::new("Mutual Exclusion", "Only one holder at a time.")
            .with_impact("Creates the initial bottleneck.")
            .with_icon("lock");

        assert_eq!(point.label(), "Mutual Exclusion");
        assert_eq!(point.impact(), Some("Creates the initial bottleneck."));
        assert_eq!(point.icon(), Some("lock"));
    }
}
