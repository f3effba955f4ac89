//! Keybinding definitions: logical actions and their display metadata.

use crossterm::event::KeyEvent;
use std::borrow::Cow;

/// A logical command produced by the input adapter.
///
/// The adapter translates raw key events into these; it holds no navigation
/// state of its own. Navigation actions are applied to the deck controller,
/// the rest to presentation-only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Advance one slide (clamped at the end).
    Advance,
    /// Retreat one slide (clamped at the start).
    Retreat,
    /// Jump to the first slide.
    FirstSlide,
    /// Jump to the last slide.
    LastSlide,
    /// Jump directly to the slide at this index.
    JumpTo(usize),
    /// Move the interactive point selection down.
    SelectNextPoint,
    /// Move the interactive point selection up.
    SelectPreviousPoint,
    /// Toggle the simulation scenario between cycle and ordered modes.
    ToggleSimulation,
    /// Hide or show the header/footer chrome.
    ToggleFullscreen,
    /// Toggle the keybinding help overlay.
    ToggleHelp,
    /// Exit the application.
    Quit,
}

/// A key bound to an action, with a label for the footer hint bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// The bound key.
    pub key: KeyEvent,
    /// The action it triggers.
    pub action: Action,
    /// Short label shown next to the key in the footer.
    pub label: Cow<'static, str>,
    /// Whether the bind appears in the footer hint bar.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Creates a visible keybind.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    /// Hides the bind from the footer hint bar.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}
