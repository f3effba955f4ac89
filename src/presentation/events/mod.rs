//! Event handling: translation from raw key events to logical actions.
//!
//! The adapter is stateless; every navigation decision happens in the deck
//! controller. Exact bindings are a presentation concern; the contract is
//! only that advance, retreat, jump-to, and toggle-fullscreen exist.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::keybinding::{Action, Keybind};

/// Stateless key-event translator.
pub struct EventHandler;

impl EventHandler {
    /// Maps a key event to a logical action, if any.
    #[must_use]
    pub fn translate(key: &KeyEvent) -> Option<Action> {
        if Self::is_quit_event(key) {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Right
            | KeyCode::PageDown
            | KeyCode::Enter
            | KeyCode::Char(' ' | 'n') => Some(Action::Advance),
            KeyCode::Left | KeyCode::PageUp | KeyCode::Backspace | KeyCode::Char('p') => {
                Some(Action::Retreat)
            }
            KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstSlide),
            KeyCode::End | KeyCode::Char('G') => Some(Action::LastSlide),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNextPoint),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPreviousPoint),
            KeyCode::Tab | KeyCode::Char('s') => Some(Action::ToggleSimulation),
            KeyCode::Char('f') => Some(Action::ToggleFullscreen),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char(c) if c.is_ascii_digit() => Some(Action::JumpTo(digit_to_index(c))),
            _ => None,
        }
    }

    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }
}

/// `1`–`9` address slides one through nine; `0` addresses slide ten.
const fn digit_to_index(c: char) -> usize {
    match c {
        '0' => 9,
        _ => (c as usize) - ('1' as usize),
    }
}

/// Returns the full keybinding table, used by the footer hints and the help
/// overlay.
#[must_use]
pub fn default_bindings() -> Vec<Keybind> {
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

    vec![
        Keybind::new(key(KeyCode::Left), Action::Retreat, "prev"),
        Keybind::new(key(KeyCode::Right), Action::Advance, "next"),
        Keybind::new(key(KeyCode::Char(' ')), Action::Advance, "next").hidden(),
        Keybind::new(key(KeyCode::Char('g')), Action::FirstSlide, "first slide").hidden(),
        Keybind::new(key(KeyCode::Char('G')), Action::LastSlide, "last slide").hidden(),
        Keybind::new(key(KeyCode::Char('1')), Action::JumpTo(0), "jump to slide 1-10").hidden(),
        Keybind::new(key(KeyCode::Up), Action::SelectPreviousPoint, "point up").hidden(),
        Keybind::new(key(KeyCode::Down), Action::SelectNextPoint, "point down").hidden(),
        Keybind::new(key(KeyCode::Tab), Action::ToggleSimulation, "toggle scenario").hidden(),
        Keybind::new(key(KeyCode::Char('f')), Action::ToggleFullscreen, "focus"),
        Keybind::new(key(KeyCode::Char('?')), Action::ToggleHelp, "help").hidden(),
        Keybind::new(key(KeyCode::Char('q')), Action::Quit, "quit"),
    ]
}
