use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub dot_active: Style,
    pub dot_inactive: Style,
    pub info: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: theme.chip_style,
            dot_active: theme.accent_style,
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            dot_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            dot_inactive: Style::default().fg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Bottom bar: keybind hints on the left, one pagination dot per slide in
/// the middle, and an info string on the right.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    current: usize,
    count: usize,
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind], current: usize, count: usize) -> Self {
        Self {
            keybindings,
            current,
            count,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_hint_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        for (i, binding) in self
            .keybindings
            .iter()
            .filter(|k| k.visible_in_bar)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        spans
    }

    fn build_dot_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(self.count * 2);
        for i in 0..self.count {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            if i == self.current {
                spans.push(Span::styled("●", self.style.dot_active));
            } else {
                spans.push(Span::styled("○", self.style.dot_inactive));
            }
        }
        spans
    }
}

impl Widget for FooterBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let hint_spans = self.build_hint_spans();
        let hint_width: u16 = hint_spans.iter().map(|s| s.width() as u16).sum();
        Paragraph::new(Line::from(hint_spans)).render(
            Rect::new(area.x, area.y, hint_width.min(area.width), 1),
            buf,
        );

        let right_width = self.right_info.map_or(0, |s| s.len() as u16);
        if let Some(info) = self.right_info
            && hint_width + right_width < area.width
        {
            let right_area = Rect::new(
                area.right().saturating_sub(right_width),
                area.y,
                right_width,
                1,
            );
            Paragraph::new(Line::from(Span::styled(info, self.style.info))).render(right_area, buf);
        }

        // Pagination dots, centered; dropped when they would collide with
        // the hints on a narrow terminal.
        let dots_width = (self.count * 2).saturating_sub(1) as u16;
        let dots_x = area.x + area.width.saturating_sub(dots_width) / 2;
        if dots_width > 0 && dots_x > area.x + hint_width && dots_x + dots_width < area.right() {
            Paragraph::new(Line::from(self.build_dot_spans()))
                .render(Rect::new(dots_x, area.y, dots_width, 1), buf);
        }
    }
}

pub(crate) fn format_key(key: &crossterm::event::KeyEvent) -> String {
    use std::fmt::Write;
    let mut s = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("C-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        s.push_str("A-");
    }

    match key.code {
        KeyCode::Char(' ') => s.push_str("Space"),
        KeyCode::Char(c) => s.push(c),
        KeyCode::Enter => s.push_str("Enter"),
        KeyCode::Esc => s.push_str("Esc"),
        KeyCode::Tab => s.push_str("Tab"),
        KeyCode::Backspace => s.push_str("Bksp"),
        KeyCode::Home => s.push_str("Home"),
        KeyCode::End => s.push_str("End"),
        KeyCode::Up => s.push('↑'),
        KeyCode::Down => s.push('↓'),
        KeyCode::Left => s.push('←'),
        KeyCode::Right => s.push('→'),
        _ => {
            let _ = write!(s, "{:?}", key.code);
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_format_key() {
        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(format_key(&key), "→");

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(format_key(&key), "C-c");

        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(format_key(&key), "Space");
    }

    #[test]
    fn test_hidden_binds_are_not_hinted() {
        let binds = vec![
            Keybind::new(
                KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
                Action::Advance,
                "next",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
                Action::Advance,
                "next",
            )
            .hidden(),
        ];
        let footer = FooterBar::new(&binds, 0, 3);
        let spans = footer.build_hint_spans();

        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("next"));
        assert!(!text.contains("Space"));
    }

    #[test]
    fn test_dots_mark_current_slide() {
        let footer = FooterBar::new(&[], 1, 3);
        let dots: Vec<String> = footer
            .build_dot_spans()
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(dots, vec!["○", " ", "●", " ", "○"]);
    }
}
