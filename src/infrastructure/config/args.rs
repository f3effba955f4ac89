use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "gridlock",
    version,
    about = "An interactive terminal slideshow on operating-system deadlock",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Deck file to present instead of the built-in deadlock deck
    /// (TOML or JSON, selected by extension).
    #[arg(short, long, value_name = "PATH")]
    pub deck: Option<PathBuf>,

    /// Slide to start on (1-based).
    #[arg(long, value_name = "N")]
    pub start_slide: Option<usize>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Enable slide-transition and splash animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Show the progress gauge under the header.
    #[arg(long)]
    pub show_progress: Option<bool>,

    /// Skip the splash screen.
    #[arg(long)]
    pub no_splash: bool,
}
