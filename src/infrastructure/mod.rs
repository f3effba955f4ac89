//! Infrastructure layer: configuration and deck file loading.

/// Configuration handling.
pub mod config;
/// Deck file loading.
pub mod deck_loader;

pub use config::{AppConfig, CliArgs, StorageManager};
