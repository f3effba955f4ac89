use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use gridlock::domain::navigation::DeckController;
use gridlock::infrastructure::config::{AppConfig, CliArgs, StorageManager};
use gridlock::infrastructure::deck_loader;
use gridlock::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = gridlock::VERSION, "Starting gridlock");

    let deck = match config.deck {
        Some(ref path) => deck_loader::load_from_path(path)?,
        None => deck_loader::load_builtin()?,
    };
    info!(slides = deck.count(), "Deck loaded");

    let mut controller = DeckController::new(deck);
    if let Some(start) = config.start_slide {
        if let Err(e) = controller.jump_to(start.saturating_sub(1)) {
            warn!(error = %e, "Ignoring --start-slide");
        }
    }

    Ok(App::new(controller, &config))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
