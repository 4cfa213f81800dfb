// folio - a keyword chatbot that answers questions about a profile
//
// Architecture:
// - Resolver: maps a query to one canned reply (first matching topic wins)
// - Chat: ChatSession owns the message log and queues delayed bot replies
// - TUI (ratatui): transcript, input field with Send button, logs panel
// - Headless: the same session driven line by line from stdin
// - Config: env > ~/.config/folio/config.toml > defaults

mod chat;
mod cli;
mod config;
mod headless;
mod logging;
mod profile;
mod resolver;
mod theme;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Rolling JSON file writer, if enabled and the directory is usable
fn file_writer(logging: &LoggingConfig) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix),
        LogRotation::Daily => tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix),
    };

    // Writes happen on a background thread; the guard flushes on drop
    Some(tracing_appender::non_blocking(appender))
}

/// Initialize tracing
///
/// TUI mode captures events into `log_buffer` so nothing writes over the
/// alternate screen. Headless mode writes to stderr, keeping stdout for the
/// transcript. Either way an optional JSON file layer is added.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_logging(config: &Config, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("folio={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let console = if config.enable_tui {
        TuiLogLayer::new(log_buffer.clone()).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    let (file_layer, guard) = match file_writer(&config.logging) {
        Some((writer, guard)) => (
            Some(fmt::layer().json().with_writer(writer).with_ansi(false)),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (ask, config ...); exit if one ran
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    let log_buffer = LogBuffer::new();
    // Must stay alive until exit so file logs flush
    let _file_guard = init_logging(&config, &log_buffer);

    for warning in &config.warnings {
        tracing::warn!("Config: {}", warning);
    }

    let profile = Arc::new(config.profile.clone());

    tracing::info!(
        "folio {} starting (theme: {}, reply delay: {}ms, missing experience: {})",
        config::VERSION,
        config.theme,
        config.reply_delay.as_millis(),
        config.resolver.missing_experience.as_str()
    );

    if config.enable_tui {
        tui::run_tui(&config, profile, log_buffer).await?;
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        headless::run_headless(&config, profile).await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
