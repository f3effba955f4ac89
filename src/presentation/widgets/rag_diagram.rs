//! Resource-allocation-graph diagram: the visual collaborator.
//!
//! Draws the fixed three-chef / three-tool scene referenced by slides
//! through `visual_id` and `visual_step`. Every scene is hard-coded per
//! mode; nothing here detects cycles or computes safety; the graphs are
//! pre-drawn illustrations, matching the slide narration.

use crate::domain::entities::Slide;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Scenario toggle for the simulation slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationMode {
    /// Arbitrary-order acquisition; the wait chain closes into a cycle.
    #[default]
    Cycle,
    /// Rank-ordered acquisition; the chain stays linear.
    Ordered,
}

impl SimulationMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Cycle => Self::Ordered,
            Self::Ordered => Self::Cycle,
        }
    }
}

/// Which pre-drawn scene to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramMode {
    /// Per-chef holds/needs cards.
    Status,
    /// The cycle forming step by step (1-3).
    Deadlock,
    /// Rank-ordered requests; no cycle possible.
    Safe,
    /// Banker's check delays the unsafe request.
    Avoidance,
    /// A victim is terminated and the cycle breaks.
    Recovery,
}

pub struct RagDiagramStyle {
    pub process: Style,
    pub resource: Style,
    pub hold: Style,
    pub request: Style,
    pub pending: Style,
    pub victim: Style,
    pub label: Style,
    pub banner_deadlock: Style,
    pub banner_safe: Style,
    pub banner_warn: Style,
}

impl RagDiagramStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            process: theme.accent_style,
            label: theme.dim_style,
            ..Self::default()
        }
    }
}

impl Default for RagDiagramStyle {
    fn default() -> Self {
        Self {
            process: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            resource: Style::default().fg(Color::Gray),
            hold: Style::default().fg(Color::Green),
            request: Style::default().fg(Color::Red),
            pending: Style::default().fg(Color::DarkGray),
            victim: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            label: Style::default().fg(Color::DarkGray),
            banner_deadlock: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            banner_safe: Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            banner_warn: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// The diagram widget. Rendered centered within its area.
pub struct RagDiagram {
    mode: DiagramMode,
    step: u8,
    style: RagDiagramStyle,
}

impl RagDiagram {
    #[must_use]
    pub fn new(mode: DiagramMode, step: u8) -> Self {
        Self {
            mode,
            step: step.clamp(1, 3),
            style: RagDiagramStyle::default(),
        }
    }

    /// Resolves a slide's diagram reference. The mode is derived from the
    /// `visual_id` and, for the simulation slide, from the scenario toggle.
    /// Unrecognized ids yield `None`; the caller shows an empty pane.
    #[must_use]
    pub fn from_slide(slide: &Slide, sim: SimulationMode) -> Option<Self> {
        let step = slide.visual_step().unwrap_or(3);
        let mode = match slide.visual_id()? {
            "scenario-status" => DiagramMode::Status,
            "rag-graph" => DiagramMode::Deadlock,
            "rag-graph-safe" | "solution-prevention" => DiagramMode::Safe,
            "solution-avoidance" => DiagramMode::Avoidance,
            "solution-recovery" => DiagramMode::Recovery,
            "interactive-rag" => match sim {
                SimulationMode::Cycle => DiagramMode::Deadlock,
                SimulationMode::Ordered => DiagramMode::Safe,
            },
            _ => return None,
        };
        Some(Self::new(mode, step))
    }

    #[must_use]
    pub const fn style(mut self, style: RagDiagramStyle) -> Self {
        self.style = style;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.mode {
            DiagramMode::Status => self.status_lines(),
            _ => self.graph_lines(),
        }
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let s = &self.style;
        let chefs = [
            ("P1", "Knife (K)", "Bread (B)"),
            ("P2", "Bread (B)", "Plate (P)"),
            ("P3", "Plate (P)", "Knife (K)"),
        ];

        let mut lines = Vec::new();
        for (chef, holds, needs) in chefs {
            lines.push(Line::from(vec![
                Span::styled(format!(" ▌ Chef {chef}  "), s.process),
                Span::styled("● holds ", s.hold),
                Span::styled(format!("{holds:<10}"), s.hold),
                Span::styled("○ needs ", s.request),
                Span::styled(format!("{needs:<10}"), s.request),
                Span::styled(" BLOCKED ", s.banner_deadlock),
            ]));
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            "every chef waits on the next; nobody finishes",
            s.label,
        )));
        lines
    }

    #[allow(clippy::too_many_lines)]
    fn graph_lines(&self) -> Vec<Line<'static>> {
        let s = &self.style;

        let (p2_present, p3_present) = match self.mode {
            DiagramMode::Deadlock => (self.step >= 2, self.step >= 3),
            _ => (true, true),
        };
        let p2_alive = self.mode != DiagramMode::Recovery;
        let p3_holds_plate = match self.mode {
            DiagramMode::Deadlock => self.step >= 3,
            DiagramMode::Recovery => true,
            _ => false,
        };
        let p3_requests_knife = p3_present;
        let knife_request_style = if self.mode == DiagramMode::Avoidance {
            s.pending
        } else {
            s.request
        };
        let knife_request_label = if self.mode == DiagramMode::Avoidance {
            "delayed "
        } else {
            "requests"
        };

        let p2_edges = p2_present && p2_alive;
        let p2_style = if p2_alive { s.process } else { s.victim };

        let gap = |n: usize| Span::raw(" ".repeat(n));
        let maybe = |cond: bool, text: &str, style: Style| {
            if cond {
                Span::styled(text.to_string(), style)
            } else {
                Span::raw(" ".repeat(text.chars().count()))
            }
        };

        let mut lines = vec![
            // Top row: Knife ━▶ P1 ┄▶ Bread.
            Line::from(vec![
                Span::styled("┌─────────┐", s.resource),
                gap(7),
                Span::styled("╭────╮", s.process),
                gap(7),
                Span::styled("┌─────────┐", s.resource),
            ]),
            Line::from(vec![
                Span::styled("│ 1·Knife │", s.resource),
                Span::styled("━━━━━━▶", s.hold),
                Span::styled("│ P1 │", s.process),
                Span::styled("┄┄┄┄┄┄▶", s.request),
                Span::styled("│ 2·Bread │", s.resource),
            ]),
            Line::from(vec![
                Span::styled("└─────────┘", s.resource),
                gap(7),
                Span::styled("╰────╯", s.process),
                gap(7),
                Span::styled("└─────────┘", s.resource),
            ]),
            // Vertical edges: P3 ┄▶ Knife on the left, Bread ━▶ P2 on the
            // right.
            Line::from(vec![
                gap(5),
                maybe(p3_requests_knife, "▲", knife_request_style),
                gap(30),
                maybe(p2_edges, "┃", s.hold),
            ]),
            Line::from(vec![
                gap(5),
                maybe(p3_requests_knife, "┆", knife_request_style),
                Span::raw(" "),
                maybe(p3_requests_knife, knife_request_label, s.label),
                gap(15),
                maybe(p2_edges, "holds ", s.label),
                maybe(p2_edges, "┃", s.hold),
            ]),
            Line::from(vec![
                gap(5),
                maybe(p3_requests_knife, "┆", knife_request_style),
                gap(30),
                maybe(p2_edges, "▼", s.hold),
            ]),
            // Bottom row: P3 ◀━ Plate ◀┄ P2.
            Line::from(vec![
                gap(2),
                maybe(p3_present, "╭────╮", s.process),
                gap(7),
                Span::styled("┌─────────┐", s.resource),
                gap(7),
                maybe(p2_present, "╭────╮", p2_style),
            ]),
            Line::from(vec![
                gap(2),
                maybe(p3_present, "│ P3 │", s.process),
                maybe(p3_holds_plate, "◀━━━━━━", s.hold),
                Span::styled("│ 3·Plate │", s.resource),
                maybe(p2_edges, "◀┄┄┄┄┄┄", s.request),
                maybe(p2_present, "│ P2 │", p2_style),
            ]),
            Line::from(vec![
                gap(2),
                maybe(p3_present, "╰────╯", s.process),
                gap(7),
                Span::styled("└─────────┘", s.resource),
                gap(7),
                maybe(p2_present, "╰────╯", p2_style),
            ]),
            Line::raw(""),
            Line::from(vec![
                gap(4),
                Span::styled("━━▶ holds", s.hold),
                gap(6),
                Span::styled("┄┄▶ requests", s.request),
            ]),
        ];

        if let Some(banner) = self.banner() {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![banner]));
        }

        lines
    }

    fn banner(&self) -> Option<Span<'static>> {
        let s = &self.style;
        match self.mode {
            DiagramMode::Deadlock if self.step >= 3 => Some(Span::styled(
                " DEADLOCK · closed cycle detected ",
                s.banner_deadlock,
            )),
            DiagramMode::Safe => Some(Span::styled(
                " SYSTEM SAFE · wait chain broken ",
                s.banner_safe,
            )),
            DiagramMode::Avoidance => Some(Span::styled(
                " REQUEST DELAYED · state stays safe ",
                s.banner_warn,
            )),
            DiagramMode::Recovery => Some(Span::styled(
                " VICTIM P2 TERMINATED · cycle broken ",
                s.banner_safe,
            )),
            _ => None,
        }
    }
}

impl Widget for RagDiagram {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let lines = self.lines();
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let height = lines.len() as u16;

        // Column alignment carries the picture, so the block is centered as
        // a whole instead of per line.
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let centered = Rect::new(
            x,
            y,
            width.min(area.width),
            height.min(area.height),
        );
        Paragraph::new(lines).render(centered, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Slide, SlideKind};

    fn text_of(diagram: &RagDiagram) -> String {
        diagram
            .lines()
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_deadlock_banner_only_when_cycle_closes() {
        let early = text_of(&RagDiagram::new(DiagramMode::Deadlock, 2));
        assert!(!early.contains("DEADLOCK"));
        assert!(!early.contains("P3"));

        let closed = text_of(&RagDiagram::new(DiagramMode::Deadlock, 3));
        assert!(closed.contains("DEADLOCK"));
        assert!(closed.contains("P3"));
    }

    #[test]
    fn test_step_one_shows_only_first_chef() {
        let text = text_of(&RagDiagram::new(DiagramMode::Deadlock, 1));
        assert!(text.contains("P1"));
        assert!(!text.contains("P2"));
        assert!(!text.contains("P3"));
    }

    #[test]
    fn test_safe_mode_has_no_plate_assignment() {
        let text = text_of(&RagDiagram::new(DiagramMode::Safe, 3));
        assert!(text.contains("SYSTEM SAFE"));
        assert!(!text.contains("◀━━━━━━"));
    }

    #[test]
    fn test_recovery_drops_victim_edges() {
        let text = text_of(&RagDiagram::new(DiagramMode::Recovery, 3));
        assert!(text.contains("VICTIM P2 TERMINATED"));
        // P2 box survives (struck through) but its request edge is gone.
        assert!(text.contains("P2"));
        assert!(!text.contains("◀┄┄┄┄┄┄"));
    }

    #[test]
    fn test_graph_columns_stay_aligned() {
        // The three vertical-edge rows must put their glyphs in the same
        // columns as the boxes above and below them.
        let diagram = RagDiagram::new(DiagramMode::Deadlock, 3);
        let text = text_of(&diagram);
        for row in text.lines().take(9) {
            let chars: Vec<char> = row.chars().collect();
            for (i, &c) in chars.iter().enumerate() {
                if c == '▲' || c == '┆' {
                    assert_eq!(i, 5, "knife request column drifted in {row:?}");
                }
                if c == '┃' || c == '▼' {
                    assert_eq!(i, 36, "bread hold column drifted in {row:?}");
                }
            }
        }
    }

    #[test]
    fn test_from_slide_mappings() {
        let slide = |visual: &str| {
            Slide::new("x", SlideKind::Split, "X")
                .with_visual(visual)
                .with_visual_step(2)
        };

        let graph = RagDiagram::from_slide(&slide("rag-graph"), SimulationMode::Cycle).unwrap();
        assert_eq!(graph.mode, DiagramMode::Deadlock);
        assert_eq!(graph.step, 2);

        let prevention =
            RagDiagram::from_slide(&slide("solution-prevention"), SimulationMode::Cycle).unwrap();
        assert_eq!(prevention.mode, DiagramMode::Safe);

        let sim =
            RagDiagram::from_slide(&slide("interactive-rag"), SimulationMode::Ordered).unwrap();
        assert_eq!(sim.mode, DiagramMode::Safe);

        assert!(RagDiagram::from_slide(&slide("unknown-visual"), SimulationMode::Cycle).is_none());
        let no_visual = Slide::new("y", SlideKind::Content, "Y");
        assert!(RagDiagram::from_slide(&no_visual, SimulationMode::Cycle).is_none());
    }

    #[test]
    fn test_status_lists_all_three_chefs() {
        let text = text_of(&RagDiagram::new(DiagramMode::Status, 3));
        for chef in ["P1", "P2", "P3"] {
            assert!(text.contains(chef));
        }
        assert!(text.contains("BLOCKED"));
    }
}
