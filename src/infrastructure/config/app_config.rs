//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "gridlock";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "gridlock-tui";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Returns the env-filter directive for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Application configuration, merged from the config file and CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path (CLI only).
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Deck file path (CLI only); `None` presents the built-in deck.
    #[serde(skip)]
    pub deck: Option<PathBuf>,

    /// Slide to start on, 1-based (CLI only).
    #[serde(skip)]
    pub start_slide: Option<usize>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable splash and slide-transition animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Show the progress gauge under the header bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Show the splash screen on startup.
    #[serde(default = "default_true")]
    pub splash: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            show_progress: true,
            splash: true,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    "Blue".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration. Flags win over the file.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(deck_path) = args.deck {
            self.deck = Some(deck_path);
        }
        if let Some(start_slide) = args.start_slide {
            self.start_slide = Some(start_slide);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(show_progress) = args.show_progress {
            self.ui.show_progress = show_progress;
        }
        if args.no_splash {
            self.ui.splash = false;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("gridlock.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            deck: None,
            start_slide: None,
            log_path: None,
            log_level: LogLevel::Info,
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_file() {
        let toml_content = r##"
            log_level = "debug"

            [ui]
            enable_animations = false
            splash = false

            [theme]
            accent_color = "#3b82f6"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.ui.enable_animations);
        assert!(!config.ui.splash);
        assert!(config.ui.show_progress); // default_true
        assert_eq!(config.theme.accent_color, "#3b82f6");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.deck, None);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.ui.enable_animations);
        assert_eq!(config.theme.accent_color, "Blue");
    }

    #[test]
    fn test_cli_flags_win_over_file() {
        let mut config: AppConfig = toml::from_str(r#"log_level = "warn""#).unwrap();
        let args = CliArgs {
            config: None,
            deck: Some(PathBuf::from("custom.toml")),
            start_slide: Some(3),
            log_path: None,
            log_level: Some(LogLevel::Trace),
            accent_color: None,
            enable_animations: Some(false),
            show_progress: None,
            no_splash: true,
        };

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.deck, Some(PathBuf::from("custom.toml")));
        assert_eq!(config.start_slide, Some(3));
        assert!(!config.ui.enable_animations);
        assert!(!config.ui.splash);
    }
}
