//! UI screens.

mod app;
mod deck_screen;
mod splash_screen;

pub use app::App;
pub use deck_screen::{DeckScreen, DeckScreenState};
pub use splash_screen::SplashScreen;
