use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub deck_title: Style,
    pub counter: Style,
    pub gauge_filled: Style,
    pub gauge_empty: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: theme.chip_style,
            gauge_filled: Style::default().fg(theme.accent),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            deck_title: Style::default().add_modifier(Modifier::BOLD),
            counter: Style::default().fg(Color::DarkGray),
            gauge_filled: Style::default().fg(Color::Blue),
            gauge_empty: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Top bar: app chip, deck title, `NN / NN` counter, and a thin progress
/// gauge derived from the controller's progress fraction.
pub struct HeaderBar<'a> {
    deck_title: &'a str,
    current: usize,
    count: usize,
    progress: f64,
    show_gauge: bool,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(deck_title: &'a str, current: usize, count: usize, progress: f64) -> Self {
        Self {
            deck_title,
            current,
            count,
            progress,
            show_gauge: true,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn show_gauge(mut self, show: bool) -> Self {
        self.show_gauge = show;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn counter_text(&self) -> String {
        format!("{:02} / {:02}", self.current + 1, self.count)
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_line = Line::from(vec![
            Span::styled(" GRIDLOCK ", self.style.app_name),
            Span::raw("  "),
            Span::styled(self.deck_title, self.style.deck_title),
        ]);
        let counter = self.counter_text();
        let counter_width = counter.len() as u16 + 1;
        let left_width = area.width.saturating_sub(counter_width);
        Paragraph::new(left_line).render(Rect::new(area.x, area.y, left_width, 1), buf);

        if counter_width <= area.width {
            let counter_area = Rect::new(
                area.right().saturating_sub(counter_width),
                area.y,
                counter_width,
                1,
            );
            Paragraph::new(Line::from(Span::styled(counter, self.style.counter)))
                .render(counter_area, buf);
        }

        if self.show_gauge && area.height > 1 {
            let filled = (self.progress.clamp(0.0, 1.0) * f64::from(area.width)).round() as u16;
            let y = area.y + 1;
            for x in area.left()..area.right() {
                let (glyph, style) = if x - area.left() < filled {
                    ('━', self.style.gauge_filled)
                } else {
                    ('─', self.style.gauge_empty)
                };
                buf[(x, y)].set_char(glyph).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_is_zero_padded_and_one_based() {
        let header = HeaderBar::new("Deck", 2, 13, 3.0 / 13.0);
        assert_eq!(header.counter_text(), "03 / 13");
    }

    #[test]
    fn test_render_fills_gauge_proportionally() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        HeaderBar::new("Deck", 4, 10, 0.5).render(buf.area, &mut buf);

        let filled: usize = (0..10)
            .filter(|&x| buf[(x, 1)].symbol() == "━")
            .count();
        assert_eq!(filled, 5);
    }

    #[test]
    fn test_render_zero_area_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        HeaderBar::new("Deck", 0, 1, 1.0).render(buf.area, &mut buf);
    }
}
