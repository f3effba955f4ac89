use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::footer_bar::format_key;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct HelpOverlayStyle {
    pub border: Style,
    pub key: Style,
    pub label: Style,
}

impl HelpOverlayStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border: theme.accent_style,
            key: theme.accent_style,
            label: theme.base_style,
        }
    }
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Blue),
            key: Style::default().fg(Color::Blue),
            label: Style::default(),
        }
    }
}

/// Centered popup listing every keybinding, hidden ones included.
pub struct HelpOverlay<'a> {
    keybindings: &'a [Keybind],
    style: HelpOverlayStyle,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            style: HelpOverlayStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: HelpOverlayStyle) -> Self {
        self.style = style;
        self
    }

    fn rows(&self) -> Vec<(String, &str)> {
        self.keybindings
            .iter()
            .map(|bind| (format_key(&bind.key), bind.label.as_ref()))
            .collect()
    }
}

impl Widget for HelpOverlay<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows();
        let key_width = rows.iter().map(|(key, _)| key.width()).max().unwrap_or(0);

        let lines: Vec<Line<'_>> = rows
            .iter()
            .map(|(key, label)| {
                Line::from(vec![
                    Span::styled(format!(" {key:>key_width$}  "), self.style.key),
                    Span::styled((*label).to_string(), self.style.label),
                ])
            })
            .collect();

        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 2;
        let width = (content_width + 2).min(area.width);
        let height = (lines.len() as u16 + 2).min(area.height);
        let popup = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        Clear.render(popup, buf);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style.border)
            .title(Span::styled(" keys ", self.style.key));
        let inner = block.inner(popup);
        block.render(popup, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_rows_include_hidden_bindings() {
        let binds = vec![
            Keybind::new(
                KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
                Action::Advance,
                "next",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                Action::FirstSlide,
                "first slide",
            )
            .hidden(),
        ];

        let overlay = HelpOverlay::new(&binds);
        let rows = overlay.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ("g".to_string(), "first slide"));
    }
}
