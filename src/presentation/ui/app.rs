//! Main application orchestrator.
//!
//! Owns the deck controller and the current screen, and maps logical
//! actions onto them. Navigation rejections (`OutOfRange` from `jump_to`)
//! are absorbed here, so the renderer below always receives a valid in-range
//! slide.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::domain::keybinding::{Action, Keybind};
use crate::domain::navigation::DeckController;
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::{EventHandler, default_bindings};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{DeckScreen, DeckScreenState, SplashScreen};
use crate::NAME;

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Splash,
    Presenting,
    Exiting,
}

enum CurrentScreen {
    Splash(SplashScreen),
    Deck(Box<DeckScreenState>),
}

pub struct App {
    state: AppState,
    screen: CurrentScreen,
    controller: DeckController,
    bindings: Vec<Keybind>,
    pending_deck_state: Option<Box<DeckScreenState>>,
}

impl App {
    #[must_use]
    pub fn new(controller: DeckController, config: &AppConfig) -> Self {
        let theme = Theme::new(&config.theme.accent_color);
        let deck_state = Box::new(DeckScreenState::new(
            theme,
            config.ui.enable_animations,
            config.ui.show_progress,
        ));

        let show_splash = config.ui.splash && config.ui.enable_animations;
        let (state, screen, pending) = if show_splash {
            let mut splash = SplashScreen::new();
            // The deck is already loaded; the splash only plays its intro.
            splash.set_ready();
            (
                AppState::Splash,
                CurrentScreen::Splash(splash),
                Some(deck_state),
            )
        } else {
            (AppState::Presenting, CurrentScreen::Deck(deck_state), None)
        };

        Self {
            state,
            screen,
            controller,
            bindings: default_bindings(),
            pending_deck_state: pending,
        }
    }

    /// Returns the navigation state container.
    #[must_use]
    pub const fn controller(&self) -> &DeckController {
        &self.controller
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be drawn to.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                biased;

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event
                        && key.kind == KeyEventKind::Press
                    {
                        self.handle_key(key);
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.tick_animations() {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    /// Advances animations; returns whether a redraw is needed.
    fn tick_animations(&mut self) -> bool {
        match &mut self.screen {
            CurrentScreen::Splash(splash) => {
                splash.tick(ANIMATION_TICK_RATE);
                if splash.state.animation_complete {
                    self.enter_deck();
                }
                true
            }
            CurrentScreen::Deck(state) => state.tick(ANIMATION_TICK_RATE),
        }
    }

    fn enter_deck(&mut self) {
        if let Some(state) = self.pending_deck_state.take() {
            self.state = AppState::Presenting;
            self.screen = CurrentScreen::Deck(state);
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        match &mut self.screen {
            CurrentScreen::Splash(screen) => {
                frame.render_widget(screen, frame.area());
            }
            CurrentScreen::Deck(state) => {
                let screen = DeckScreen::new(
                    self.controller.current_slide(),
                    self.controller.current_index(),
                    self.controller.count(),
                    self.controller.progress(),
                    self.controller.deck().title().unwrap_or(NAME),
                    &self.bindings,
                );
                frame.render_stateful_widget(screen, frame.area(), state);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            CurrentScreen::Splash(_) => {
                // Any key skips the splash; quit keys quit outright.
                if EventHandler::is_quit_event(&key) {
                    self.state = AppState::Exiting;
                } else {
                    self.enter_deck();
                }
            }
            CurrentScreen::Deck(state) => {
                if state.is_help_visible() {
                    // The popup swallows everything; quit keys just close it.
                    if EventHandler::is_quit_event(&key)
                        || EventHandler::translate(&key) == Some(Action::ToggleHelp)
                    {
                        state.close_help();
                    }
                    return;
                }

                if let Some(action) = EventHandler::translate(&key) {
                    self.apply_action(action);
                }
            }
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Advance => {
                if self.controller.next() {
                    self.on_slide_changed();
                }
            }
            Action::Retreat => {
                if self.controller.previous() {
                    self.on_slide_changed();
                }
            }
            Action::FirstSlide => self.jump_to(0),
            Action::LastSlide => self.jump_to(self.controller.count() - 1),
            Action::JumpTo(index) => self.jump_to(index),
            Action::SelectNextPoint => {
                let points = self.controller.current_slide().points().len();
                if let CurrentScreen::Deck(state) = &mut self.screen {
                    state.select_next_point(points);
                }
            }
            Action::SelectPreviousPoint => {
                let points = self.controller.current_slide().points().len();
                if let CurrentScreen::Deck(state) = &mut self.screen {
                    state.select_previous_point(points);
                }
            }
            Action::ToggleSimulation => {
                if let CurrentScreen::Deck(state) = &mut self.screen {
                    state.toggle_simulation();
                }
            }
            Action::ToggleFullscreen => {
                if let CurrentScreen::Deck(state) = &mut self.screen {
                    state.toggle_chrome();
                }
            }
            Action::ToggleHelp => {
                if let CurrentScreen::Deck(state) = &mut self.screen {
                    state.toggle_help();
                }
            }
            Action::Quit => self.state = AppState::Exiting,
        }
    }

    /// Routes a direct jump through the controller, absorbing rejections.
    fn jump_to(&mut self, index: usize) {
        let before = self.controller.current_index();
        match self.controller.jump_to(index) {
            Ok(()) => {
                if self.controller.current_index() != before {
                    self.on_slide_changed();
                }
            }
            Err(e) => debug!(error = %e, "Navigation rejected"),
        }
    }

    fn on_slide_changed(&mut self) {
        debug!(
            slide = %self.controller.current_slide().id(),
            index = self.controller.current_index(),
            "Slide changed"
        );
        if let CurrentScreen::Deck(state) = &mut self.screen {
            state.on_slide_changed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Deck, SlideRecord};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn test_app() -> App {
        let records = ["cover", "intro", "conclusion"]
            .iter()
            .map(|id| SlideRecord {
                id: Some((*id).to_string()),
                kind: Some("content".to_string()),
                title: Some((*id).to_string()),
                ..SlideRecord::default()
            })
            .collect();
        let deck = Deck::load(records).unwrap();

        let config = AppConfig {
            ui: crate::infrastructure::config::UiConfig {
                enable_animations: false,
                show_progress: true,
                splash: false,
            },
            ..AppConfig::default()
        };

        App::new(DeckController::new(deck), &config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_app_skips_splash_when_disabled() {
        let app = test_app();
        assert_eq!(app.state, AppState::Presenting);
    }

    #[test]
    fn test_keys_drive_navigation() {
        let mut app = test_app();

        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller().current_index(), 1);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        // Saturated at the last slide.
        assert_eq!(app.controller().current_index(), 2);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.controller().current_index(), 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.controller().current_index(), 0);
    }

    #[test]
    fn test_digit_jump_out_of_range_is_absorbed() {
        let mut app = test_app();

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.controller().current_index(), 2);

        // Slide 9 does not exist in a three-slide deck; state is preserved.
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.controller().current_index(), 2);
        assert_eq!(app.state, AppState::Presenting);
    }

    #[test]
    fn test_fullscreen_toggle_hides_chrome() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('f'));
        let CurrentScreen::Deck(state) = &app.screen else {
            panic!("expected deck screen");
        };
        assert!(state.is_chrome_hidden());
    }

    #[test]
    fn test_help_overlay_swallows_navigation() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller().current_index(), 0);

        press(&mut app, KeyCode::Esc);
        let CurrentScreen::Deck(state) = &app.screen else {
            panic!("expected deck screen");
        };
        assert!(!state.is_help_visible());

        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller().current_index(), 1);
    }

    #[test]
    fn test_quit_key_exits() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.state, AppState::Exiting);
    }
}
