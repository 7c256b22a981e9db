// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, demo scans)
// - Rendering the UI
// - Routing keys between the scan path and the action keys

pub mod app;
pub mod components;
pub mod icons;
pub mod modal;
pub mod ui;

use crate::config::Config;
use crate::events::ScanEvent;
use crate::logging::LogBuffer;
use crate::roster::Roster;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. The event loop handles keyboard input, render ticks and
/// synthetic scans from the demo feed.
pub async fn run_tui(
    mut scan_rx: mpsc::Receiver<ScanEvent>,
    log_buffer: LogBuffer,
    config: Config,
    roster: Roster,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create app state with config (initializes theme from config)
    let mut app = App::new(log_buffer, config, roster);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut scan_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard input (scanner digits and action keys)
/// 2. Timer ticks (idle animation, card revert, toast expiry)
/// 3. Demo scans arriving over the channel
///
/// The use of tokio::select! allows us to wait on multiple async operations
/// simultaneously, responding to whichever one completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    scan_rx: &mut mpsc::Receiver<ScanEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        // Draw the UI
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        // Wait for events using tokio::select!
        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for animation and deadline checks
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Synthetic scans from the demo feed
            Some(scan) = scan_rx.recv() => {
                app.handle_scan(&scan);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Action keys → Scan path
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: an open dialog absorbs every key, digits included
    if handle_modal_input(app, &key_event) {
        return;
    }

    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 2: action keys. All letters, so a scanner stream of digits
    // plus Enter can never trigger one by accident.
    if handle_action_keys(app, &key_event) {
        return;
    }

    // Layer 3: the scan path. Deliberately no debounce here: a card
    // scanner legitimately repeats digits faster than any human.
    match key_event.code {
        KeyCode::Char(c) if c.is_ascii_digit() => app.push_digit(c),
        KeyCode::Enter => app.submit_scan(),
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    if key_event.kind != KeyEventKind::Press {
        return true; // Modal absorbs non-press events too
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => {
            app.modal = None;
        }
        ModalAction::ConfirmReset => {
            app.modal = None;
            app.confirm_reset();
        }
    }

    true // Modal absorbed the input
}

/// Handle action keys - returns true if handled
fn handle_action_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            app.modal = Some(modal::Modal::help());
            true
        }
        // Export the record set as CSV
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.export();
            true
        }
        // Reset the record set (behind confirmation)
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.request_reset();
            true
        }
        // Recent logs
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.modal = Some(modal::Modal::logs());
            true
        }
        // Theme cycling
        KeyCode::Char('t') => {
            app.cycle_theme();
            true
        }
        KeyCode::Char('T') => {
            app.cycle_theme_back();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::CardState;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let dir = TempDir::new().expect("create temp dir");
        let mut config = Config::default();
        config.data_dir = dir.path().to_path_buf();
        config.export_dir = dir.path().join("exports");
        let roster = Roster::load(&config.data_dir, &config.roster_name).expect("load roster");
        (dir, App::new(LogBuffer::new(), config, roster))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typed_digits_flow_into_the_scan_buffer() {
        let (_dir, mut app) = test_app();
        for c in "40021".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.scan_buffer, "40021");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.scan_buffer, "");
        assert_eq!(app.card, CardState::FirstTime);
    }

    #[test]
    fn open_dialog_absorbs_digits_and_enter() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.modal.is_some());

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.scan_buffer, "");
        assert_eq!(app.stats.total_scans, 0);

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn reset_flow_cancel_then_confirm() {
        let (_dir, mut app) = test_app();
        for c in "1001".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.roster.len(), 1);

        // Esc cancels, nothing changes
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.roster.len(), 1);

        // Enter confirms, the record set empties
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Enter);
        assert!(app.roster.is_empty());
    }

    #[test]
    fn quit_key_sets_the_flag() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
