//! Gridlock - an interactive terminal slideshow on operating-system deadlock.
//!
//! This crate renders a fixed deck of slides about deadlock theory (Coffman
//! conditions, resource-allocation graphs, prevention/avoidance/recovery)
//! as a keyboard-driven TUI. The navigable core is a validated, immutable
//! slide catalog plus a clamped navigation state container; everything else
//! is presentation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing the slide catalog, navigation state, and errors.
pub mod domain;
/// Infrastructure layer containing configuration and deck file loading.
pub mod infrastructure;
/// Presentation layer containing UI screens, widgets, and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "gridlock";
