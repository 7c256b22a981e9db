// scandesk - terminal check-in kiosk
//
// A single-screen TUI for event check-in: attendees scan their card (digit
// keystrokes terminated by Enter), the kiosk reacts with a first-time or
// already-checked-in card, and door staff can export the record set as CSV
// or reset it for the next event.
//
// Architecture:
// - TUI (ratatui): kiosk display and the single event loop
// - Roster: the record set, one identifier per line on disk
// - Check-in handler: membership check + insert over the roster
// - Demo feed: optional synthetic scans over an mpsc channel

mod checkin;
mod cli;
mod config;
mod demo;
mod events;
mod export;
mod logging;
mod roster;
mod startup;
mod theme;
mod tui;
mod util;

use anyhow::{Context, Result};
use config::{Config, LogRotation};
use logging::{KioskLogLayer, LogBuffer};
use roster::Roster;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Create log buffer for the in-TUI logs overlay
    let log_buffer = LogBuffer::new();

    // Initialize tracing. Logs go to the ring buffer, never to stdout: the
    // alternate screen owns the terminal once the TUI starts.
    // File logging: optionally write to rotating log files as well.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("scandesk={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up file logging if enabled (non-blocking writer with rotation)
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            // Create log directory if it doesn't exist
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to buffer-only logging
                tracing_subscriber::registry()
                    .with(filter)
                    .with(KioskLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                // Create rolling file appender based on configured rotation
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Wrap in non-blocking writer (writes happen in background thread)
                // File layer uses JSON format for structured log parsing
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(KioskLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            // No file logging - ring buffer only
            tracing_subscriber::registry()
                .with(filter)
                .with(KioskLogLayer::new(log_buffer.clone()))
                .init();

            None
        };

    // Load the record set before the TUI takes the screen, so a broken data
    // directory fails loudly on stderr instead of inside raw mode
    let roster = Roster::load(&config.data_dir, &config.roster_name)
        .context("Failed to load the record set")?;

    startup::print_startup(&config, &roster);
    startup::log_startup(&config, &roster);

    // Channel for scans that do not come from the keyboard (demo feed)
    let (scan_tx, scan_rx) = mpsc::channel(64);

    // Create shutdown channel for the demo task
    // This is a oneshot channel - it can only send one signal
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let demo_handle = if config.demo_mode {
        tracing::info!("Running in DEMO MODE - generating synthetic scans");
        Some(tokio::spawn(async move {
            demo::run_demo(scan_tx, shutdown_rx).await;
        }))
    } else {
        // Keyboard is the only scan source; the channel stays closed
        drop(scan_tx);
        None
    };

    // Run the TUI in the main task
    // This blocks until the user quits (presses 'q')
    if let Err(e) = tui::run_tui(scan_rx, log_buffer, config, roster).await {
        tracing::error!("TUI error: {:?}", e);
    }

    tracing::info!("Shutting down...");

    // Signal the demo task to shut down gracefully
    // If the send fails, the task has already stopped (which is fine)
    let _ = shutdown_tx.send(());
    if let Some(handle) = demo_handle {
        let _ = handle.await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
