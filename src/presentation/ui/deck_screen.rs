//! The presenting screen: chrome layout plus per-slide UI state.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::domain::entities::Slide;
use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, HelpOverlay, HelpOverlayStyle,
    SimulationMode, SlideView,
};

const TRANSITION_MS: u32 = 250;

/// Presentation-only state: point selection, the scenario toggle, chrome
/// visibility (the terminal stand-in for fullscreen), the help popup, and
/// the slide-transition effect. None of it affects navigation.
pub struct DeckScreenState {
    theme: Theme,
    selected_point: Option<usize>,
    sim_mode: SimulationMode,
    chrome_hidden: bool,
    help_visible: bool,
    animations_enabled: bool,
    show_progress: bool,
    transition: Option<Effect>,
    pending_duration: Duration,
}

impl DeckScreenState {
    #[must_use]
    pub fn new(theme: Theme, animations_enabled: bool, show_progress: bool) -> Self {
        Self {
            theme,
            selected_point: None,
            sim_mode: SimulationMode::default(),
            chrome_hidden: false,
            help_visible: false,
            animations_enabled,
            show_progress,
            transition: None,
            pending_duration: Duration::ZERO,
        }
    }

    /// Resets per-slide state after navigation and restarts the transition
    /// effect.
    pub fn on_slide_changed(&mut self) {
        self.selected_point = None;
        self.sim_mode = SimulationMode::default();
        if self.animations_enabled {
            self.transition = Some(fx::coalesce((TRANSITION_MS, Interpolation::QuadOut)));
        }
    }

    /// Moves the interactive point selection down, clamped to the list.
    pub fn select_next_point(&mut self, point_count: usize) {
        if point_count == 0 {
            return;
        }
        self.selected_point = Some(match self.selected_point {
            Some(i) => (i + 1).min(point_count - 1),
            None => 0,
        });
    }

    /// Moves the interactive point selection up, clamped to the list.
    pub fn select_previous_point(&mut self, point_count: usize) {
        if point_count == 0 {
            return;
        }
        self.selected_point = Some(match self.selected_point {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    pub const fn toggle_simulation(&mut self) {
        self.sim_mode = self.sim_mode.toggled();
    }

    pub const fn toggle_chrome(&mut self) {
        self.chrome_hidden = !self.chrome_hidden;
    }

    pub const fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub const fn close_help(&mut self) {
        self.help_visible = false;
    }

    #[must_use]
    pub const fn is_chrome_hidden(&self) -> bool {
        self.chrome_hidden
    }

    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.help_visible
    }

    #[must_use]
    pub const fn selected_point(&self) -> Option<usize> {
        self.selected_point
    }

    #[must_use]
    pub const fn simulation_mode(&self) -> SimulationMode {
        self.sim_mode
    }

    /// Accumulates animation time; returns whether a redraw is needed.
    pub fn tick(&mut self, duration: Duration) -> bool {
        if self.transition.is_none() {
            return false;
        }
        self.pending_duration = self.pending_duration.saturating_add(duration);
        true
    }
}

/// The presenting screen widget, built per frame from the controller's
/// current slide and progress.
pub struct DeckScreen<'a> {
    slide: &'a Slide,
    current: usize,
    count: usize,
    progress: f64,
    deck_title: &'a str,
    keybindings: &'a [Keybind],
}

impl<'a> DeckScreen<'a> {
    #[must_use]
    pub const fn new(
        slide: &'a Slide,
        current: usize,
        count: usize,
        progress: f64,
        deck_title: &'a str,
        keybindings: &'a [Keybind],
    ) -> Self {
        Self {
            slide,
            current,
            count,
            progress,
            deck_title,
            keybindings,
        }
    }
}

impl StatefulWidget for DeckScreen<'_> {
    type State = DeckScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut DeckScreenState) {
        let body = if state.chrome_hidden {
            area
        } else {
            let [header_area, body, footer_area] = Layout::vertical([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

            HeaderBar::new(self.deck_title, self.current, self.count, self.progress)
                .show_gauge(state.show_progress)
                .style(HeaderBarStyle::from_theme(&state.theme))
                .render(header_area, buf);
            FooterBar::new(self.keybindings, self.current, self.count)
                .right_info(Some("? keys"))
                .style(FooterBarStyle::from_theme(&state.theme))
                .render(footer_area, buf);

            body
        };

        SlideView::new(self.slide)
            .selected_point(state.selected_point)
            .simulation_mode(state.sim_mode)
            .theme(state.theme)
            .render(body, buf);

        if let Some(effect) = &mut state.transition {
            let duration = state.pending_duration;
            state.pending_duration = Duration::ZERO;
            let overflow = effect.process(duration.into(), buf, body);
            if overflow.is_some() {
                state.transition = None;
            }
        }

        if state.help_visible {
            HelpOverlay::new(self.keybindings)
                .style(HelpOverlayStyle::from_theme(&state.theme))
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DeckScreenState {
        DeckScreenState::new(Theme::default(), false, true)
    }

    #[test]
    fn test_point_selection_clamps() {
        let mut s = state();
        s.select_previous_point(4);
        assert_eq!(s.selected_point(), Some(0));
        s.select_previous_point(4);
        assert_eq!(s.selected_point(), Some(0));

        for _ in 0..10 {
            s.select_next_point(4);
        }
        assert_eq!(s.selected_point(), Some(3));
    }

    #[test]
    fn test_point_selection_ignores_empty_lists() {
        let mut s = state();
        s.select_next_point(0);
        assert_eq!(s.selected_point(), None);
    }

    #[test]
    fn test_slide_change_resets_per_slide_state() {
        let mut s = state();
        s.select_next_point(4);
        s.toggle_simulation();
        assert_eq!(s.simulation_mode(), SimulationMode::Ordered);

        s.on_slide_changed();
        assert_eq!(s.selected_point(), None);
        assert_eq!(s.simulation_mode(), SimulationMode::Cycle);
    }

    #[test]
    fn test_slide_change_without_animations_starts_no_transition() {
        let mut s = state();
        s.on_slide_changed();
        assert!(!s.tick(Duration::from_millis(33)));
    }

    #[test]
    fn test_chrome_and_help_toggles() {
        let mut s = state();
        assert!(!s.is_chrome_hidden());
        s.toggle_chrome();
        assert!(s.is_chrome_hidden());

        s.toggle_help();
        assert!(s.is_help_visible());
        s.close_help();
        assert!(!s.is_help_visible());
    }

    #[test]
    fn test_render_smoke() {
        let slide = Slide::new("cover", crate::domain::entities::SlideKind::Title, "Deadlock");
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let mut s = state();

        DeckScreen::new(&slide, 0, 3, 1.0 / 3.0, "Deck", &[]).render(area, &mut buf, &mut s);
    }
}
