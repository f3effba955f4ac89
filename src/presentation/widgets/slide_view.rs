//! Slide rendering: one layout per slide kind.
//!
//! The dispatch mirrors the closed kind set; anything flagged as unknown at
//! load time lands on the content layout. The view itself holds no state;
//! point selection and the scenario toggle come in from the screen state.

use crate::domain::entities::{Slide, SlideKind, SlidePoint};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::rag_diagram::{RagDiagram, RagDiagramStyle, SimulationMode};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

pub struct SlideViewStyle {
    pub title: Style,
    pub subtitle: Style,
    pub text: Style,
    pub dim: Style,
    pub chip: Style,
    pub accent: Style,
    pub border: Style,
    pub selected: Style,
    pub mode_cycle_active: Style,
    pub mode_ordered_active: Style,
}

impl SlideViewStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title: theme.accent_style.add_modifier(Modifier::BOLD),
            chip: theme.chip_style,
            accent: theme.accent_style,
            selected: theme.chip_style,
            ..Self::default()
        }
    }
}

impl Default for SlideViewStyle {
    fn default() -> Self {
        Self {
            title: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            subtitle: Style::default().fg(Color::DarkGray),
            text: Style::default(),
            dim: Style::default().fg(Color::DarkGray),
            chip: Style::default()
                .bg(Color::Blue)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            selected: Style::default()
                .bg(Color::Blue)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            mode_cycle_active: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            mode_ordered_active: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Maps icon names from the deck to terminal glyphs. Unrecognized names get
/// a neutral marker; icons are decoration, never structure.
fn icon_glyph(name: &str) -> &'static str {
    match name {
        "terminal" => "❯_",
        "alert" => "⚠",
        "key" => "🔑",
        "chef" => "🍳",
        "knife" => "🔪",
        "bread" => "🍞",
        "plate" => "🍽",
        "logic" => "⚙",
        "prevent" | "lock" => "🔒",
        "bank" => "🏦",
        "search" => "🔍",
        "book" => "📖",
        "hand" => "✋",
        "shield" => "🛡",
        "refresh" => "🔄",
        _ => "▣",
    }
}

/// Renders one slide into the body area.
pub struct SlideView<'a> {
    slide: &'a Slide,
    selected_point: Option<usize>,
    sim_mode: SimulationMode,
    theme: Theme,
    style: SlideViewStyle,
}

impl<'a> SlideView<'a> {
    #[must_use]
    pub fn new(slide: &'a Slide) -> Self {
        Self {
            slide,
            selected_point: None,
            sim_mode: SimulationMode::default(),
            theme: Theme::default(),
            style: SlideViewStyle::default(),
        }
    }

    #[must_use]
    pub const fn selected_point(mut self, selected: Option<usize>) -> Self {
        self.selected_point = selected;
        self
    }

    #[must_use]
    pub const fn simulation_mode(mut self, mode: SimulationMode) -> Self {
        self.sim_mode = mode;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.style = SlideViewStyle::from_theme(&theme);
        self.theme = theme;
        self
    }

    fn header_lines(&self) -> Vec<Line<'a>> {
        let mut spans = Vec::new();
        if let Some(icon) = self.slide.icon() {
            spans.push(Span::raw(format!("{} ", icon_glyph(icon))));
        }
        spans.push(Span::styled(self.slide.title(), self.style.title));

        let mut lines = vec![Line::from(spans)];
        if let Some(subtitle) = self.slide.subtitle() {
            lines.push(Line::from(Span::styled(subtitle, self.style.subtitle)));
        }
        lines.push(Line::raw(""));
        lines
    }

    /// Draws the slide header and returns the remaining body area.
    fn render_header(&self, area: Rect, buf: &mut Buffer) -> Rect {
        let lines = self.header_lines();
        #[allow(clippy::cast_possible_truncation)]
        let used = (lines.len() as u16).min(area.height);
        Paragraph::new(lines).render(Rect { height: used, ..area }, buf);
        Rect {
            y: area.y + used,
            height: area.height - used,
            ..area
        }
    }

    fn bullet_lines(&self, content: &'a [String]) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for entry in content {
            lines.push(Line::from(vec![
                Span::styled("▍ ", self.style.accent),
                Span::styled(entry.as_str(), self.style.text),
            ]));
            lines.push(Line::raw(""));
        }
        lines
    }

    fn render_diagram_pane(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style.border);
        let inner = block.inner(area);
        block.render(area, buf);

        match RagDiagram::from_slide(self.slide, self.sim_mode) {
            Some(diagram) => {
                diagram
                    .style(RagDiagramStyle::from_theme(&self.theme))
                    .render(inner, buf);
            }
            None => {
                // Unknown or absent visual id: an empty pane, not an error.
                let placeholder = Paragraph::new(Line::from(Span::styled(
                    "(no visual)",
                    self.style.dim,
                )))
                .alignment(Alignment::Center);
                let y = inner.y + inner.height / 2;
                placeholder.render(Rect { y, height: 1, ..inner }, buf);
            }
        }
    }

    fn render_title_slide(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            self.slide.title(),
            self.style.title,
        ))];
        if let Some(subtitle) = self.slide.subtitle() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(subtitle, self.style.subtitle)));
        }
        lines.push(Line::raw(""));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "→ to begin · ? for keys",
            self.style.dim,
        )));

        #[allow(clippy::cast_possible_truncation)]
        let height = (lines.len() as u16).min(area.height);
        let y = area.y + area.height.saturating_sub(height) / 2;
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(Rect { y, height, ..area }, buf);
    }

    fn render_content_slide(&self, area: Rect, buf: &mut Buffer) {
        let body = self.render_header(area, buf);

        let mut lines = Vec::new();
        for (i, entry) in self.slide.content().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), self.style.chip),
                Span::raw("  "),
                Span::styled(entry.as_str(), self.style.text),
            ]));
            lines.push(Line::raw(""));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);
    }

    fn render_split_slide(&self, area: Rect, buf: &mut Buffer) {
        let body = self.render_header(area, buf);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body);

        Paragraph::new(self.bullet_lines(self.slide.content()))
            .wrap(Wrap { trim: false })
            .render(left, buf);
        self.render_diagram_pane(right, buf);
    }

    fn render_interactive_slide(&self, area: Rect, buf: &mut Buffer) {
        let body = self.render_header(area, buf);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(38), Constraint::Percentage(62)])
                .areas(body);

        let mut list = Vec::new();
        for (i, point) in self.slide.points().iter().enumerate() {
            let selected = self.selected_point == Some(i);
            let marker = if selected { "▸ " } else { "  " };
            let glyph = point.icon().map_or("", icon_glyph);
            let label_style = if selected {
                self.style.selected
            } else {
                self.style.text
            };
            list.push(Line::from(vec![
                Span::styled(marker, self.style.accent),
                Span::raw(format!("{glyph} ")),
                Span::styled(format!(" {} ", point.label()), label_style),
            ]));
            list.push(Line::raw(""));
        }
        Paragraph::new(list).render(left, buf);

        match self.selected_point.and_then(|i| self.slide.points().get(i)) {
            Some(point) => self.render_point_detail(point, right, buf),
            None => {
                let hint = Paragraph::new(Line::from(Span::styled(
                    "select a condition with ↑/↓",
                    self.style.dim,
                )))
                .alignment(Alignment::Center);
                let y = right.y + right.height / 2;
                hint.render(Rect { y, height: 1, ..right }, buf);
            }
        }
    }

    fn render_point_detail(&self, point: &SlidePoint, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style.border)
            .title(Span::styled(format!(" {} ", point.label()), self.style.accent));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(point.description(), self.style.text)),
        ];
        if let Some(impact) = point.impact() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(" WHY IT MATTERS ", self.style.chip)));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(impact, self.style.text)));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_strategy_slide(&self, area: Rect, buf: &mut Buffer) {
        let body = self.render_header(area, buf);
        let points = self.slide.points();

        if points.is_empty() {
            Paragraph::new(self.bullet_lines(self.slide.content()))
                .wrap(Wrap { trim: false })
                .render(body, buf);
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, points.len() as u32); points.len()])
                .spacing(1)
                .split(body);
        for (i, (point, column)) in points.iter().zip(columns.iter()).enumerate() {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.style.border)
                .title(Span::styled(format!(" METHOD {} ", i + 1), self.style.dim));
            let inner = block.inner(*column);
            block.render(*column, buf);

            let glyph = point.icon().map_or("", icon_glyph);
            let lines = vec![
                Line::from(vec![
                    Span::raw(format!("{glyph} ")),
                    Span::styled(point.label(), self.style.accent),
                ]),
                Line::raw(""),
                Line::from(Span::styled(point.description(), self.style.text)),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(inner, buf);
        }
    }

    fn render_simulation_slide(&self, area: Rect, buf: &mut Buffer) {
        let body = self.render_header(area, buf);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body);

        let cycle_active = self.sim_mode == SimulationMode::Cycle;
        let mut lines = self.bullet_lines(self.slide.content());
        lines.push(Line::from(vec![
            Span::styled(
                " Classic Cycle ",
                if cycle_active {
                    self.style.mode_cycle_active
                } else {
                    self.style.dim
                },
            ),
            Span::raw("  "),
            Span::styled(
                " Linear Ordering ",
                if cycle_active {
                    self.style.dim
                } else {
                    self.style.mode_ordered_active
                },
            ),
            Span::styled("   Tab toggles", self.style.dim),
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            match self.sim_mode {
                SimulationMode::Cycle => {
                    "Rule: tools are grabbed in arbitrary order. P3 takes the Plate and \
                     waits for the Knife, closing a perfect circle of dependency."
                }
                SimulationMode::Ordered => {
                    "Rule: requests must follow increasing rank. P3 must ask for the \
                     Knife (1) before the Plate (3), so it waits empty-handed and the \
                     chain stays linear."
                }
            },
            self.style.subtitle,
        )));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(left, buf);

        self.render_diagram_pane(right, buf);
    }

    fn render_conclusion_slide(&self, area: Rect, buf: &mut Buffer) {
        let body = self.render_header(area, buf);
        let content = self.slide.content();
        if content.is_empty() {
            return;
        }

        let [cards, _, rule] = Layout::vertical([
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(body);

        #[allow(clippy::cast_possible_truncation)]
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, content.len() as u32); content.len()])
                .spacing(2)
                .split(cards);
        for (i, (entry, column)) in content.iter().zip(columns.iter()).enumerate() {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.style.border);
            let inner = block.inner(*column);
            block.render(*column, buf);

            let lines = vec![
                Line::from(Span::styled(format!(" {} ", i + 1), self.style.chip)),
                Line::raw(""),
                Line::from(Span::styled(entry.as_str(), self.style.text)),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(inner, buf);
        }

        Paragraph::new(Line::from(Span::styled(
            "── processes · resources · cycles ──",
            self.style.dim,
        )))
        .alignment(Alignment::Center)
        .render(rule, buf);
    }

    fn render_visual_slide(&self, area: Rect, buf: &mut Buffer) {
        let body = self.render_header(area, buf);
        self.render_diagram_pane(body, buf);
    }
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Give wide terminals comfortable margins, like a projected slide.
        let max_width = 110u16.min(area.width);
        let margin = (area.width - max_width) / 2;
        let area = Rect {
            x: area.x + margin,
            width: max_width,
            ..area
        };

        match self.slide.kind() {
            SlideKind::Title => self.render_title_slide(area, buf),
            SlideKind::Visual => self.render_visual_slide(area, buf),
            SlideKind::Split => self.render_split_slide(area, buf),
            SlideKind::Conclusion => self.render_conclusion_slide(area, buf),
            SlideKind::Interactive => self.render_interactive_slide(area, buf),
            SlideKind::Strategy => self.render_strategy_slide(area, buf),
            SlideKind::Simulation => self.render_simulation_slide(area, buf),
            SlideKind::Content | SlideKind::Unknown => self.render_content_slide(area, buf),
        }
    }
}
