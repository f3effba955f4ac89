//! Theme: accent-driven styles shared by the widgets.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Resolved theme handed to the widget style constructors.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color used for chips, selections, and the progress gauge.
    pub accent: Color,
    /// Accent foreground with emphasis.
    pub accent_style: Style,
    /// Inverted chip style (accent background).
    pub chip_style: Style,
    /// De-emphasized text.
    pub dim_style: Style,
    /// Plain body text.
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(Color::Blue)
    }
}

impl Theme {
    /// Builds a theme from a color name or hex code; unparseable strings
    /// fall back to blue.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme from a resolved accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            accent_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            chip_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            dim_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(color) = Color::from_str(s) {
        return color;
    }
    hex_color(s).unwrap_or(Color::Blue)
}

fn hex_color(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#')?;
    let expanded: String = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let value = u32::from_str_radix(&expanded, 16).ok()?;
    #[allow(clippy::cast_possible_truncation)]
    Some(Color::Rgb(
        (value >> 16) as u8,
        (value >> 8 & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#3b82f6"), Color::Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("not-a-color"), Color::Blue);
    }

    #[test]
    fn test_theme_styles_derive_from_accent() {
        let theme = Theme::new("Green");
        assert_eq!(theme.accent, Color::Green);
        assert_eq!(theme.chip_style.bg, Some(Color::Green));
    }
}
