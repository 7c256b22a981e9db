// TUI application state
//
// This module manages the state of the kiosk: the scan buffer being
// accumulated from digit keystrokes, the display card with its revert
// deadline, session statistics, and UI chrome (modal, toast, theme).
//
// All mutation happens on the event loop task, one key or tick at a time,
// so none of this needs locking.

use super::components::toast::Toast;
use super::modal::Modal;
use crate::checkin::{check_in, CheckInOutcome};
use crate::config::Config;
use crate::events::{ScanEvent, Stats};
use crate::export::export_csv;
use crate::logging::LogBuffer;
use crate::roster::Roster;
use crate::theme::{Theme, ThemeKind};
use crate::util::{count_label, mask_id};
use std::time::Instant;

/// The three states of the display card.
///
/// `Idle` is the resting scan prompt; the other two are transient reactions
/// that revert to `Idle` once the reaction delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Idle,
    FirstTime,
    AlreadySeen,
}

impl CardState {
    /// Title and subtitle shown on the card for this state.
    pub fn messages(&self) -> (&'static str, &'static str) {
        match self {
            CardState::Idle => ("Welcome to Happy Hour", "Please scan your employee card"),
            CardState::FirstTime => ("Enjoy your ice cream!", "Please choose your favorite flavor"),
            CardState::AlreadySeen => {
                ("You have already checked in", "Please join us for the next happy hour")
            }
        }
    }
}

/// Idle pulse frames, advanced on every render tick
const PULSE_FRAMES: &[&str] = &["●  ·  ·", "·  ●  ·", "·  ·  ●", "·  ●  ·"];

/// Main application state for the TUI
pub struct App {
    /// Effective configuration (defaults < file < env)
    pub config: Config,

    /// The record set of identifiers already checked in
    pub roster: Roster,

    /// Session counters for the status bar
    pub stats: Stats,

    /// Digits typed since the last Enter
    pub scan_buffer: String,

    /// What the display card is currently showing
    pub card: CardState,

    /// When the card falls back to the idle prompt. Replaced on every scan,
    /// so a deadline scheduled by an earlier scan can never cut a newer
    /// reaction short.
    pub revert_at: Option<Instant>,

    /// Active modal overlay, if any
    pub modal: Option<Modal>,

    /// Active toast notification, if any
    pub toast: Option<Toast>,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Log buffer for the logs overlay
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Render tick counter driving the idle animation
    pub animation_frame: usize,
}

impl App {
    pub fn new(log_buffer: LogBuffer, config: Config, roster: Roster) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            config,
            roster,
            stats: Stats::default(),
            scan_buffer: String::new(),
            card: CardState::default(),
            revert_at: None,
            modal: None,
            toast: None,
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            should_quit: false,
            start_time: Instant::now(),
            animation_frame: 0,
        }
    }

    /// Append one digit to the scan buffer. Anything else is ignored so
    /// stray keys can never contaminate a card number.
    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.scan_buffer.push(c);
        }
    }

    /// Enter pressed: dispatch the buffered digits as a scan.
    ///
    /// Enter with an empty buffer is a no-op, so a scanner that sends a
    /// trailing Enter (or a bored attendee leaning on the key) changes
    /// nothing.
    pub fn submit_scan(&mut self) {
        if self.scan_buffer.is_empty() {
            tracing::debug!("Enter with empty scan buffer ignored");
            return;
        }
        let id = std::mem::take(&mut self.scan_buffer);
        self.handle_scan(&ScanEvent::now(id));
    }

    /// Run one scanned identifier through the check-in handler and show
    /// the matching reaction card.
    pub fn handle_scan(&mut self, scan: &ScanEvent) {
        let outcome = match check_in(&mut self.roster, &scan.id) {
            Ok(outcome) => outcome,
            Err(e) => {
                // The in-memory set already holds the id; only the key-list
                // append failed. The session keeps working, the operator
                // gets told.
                tracing::error!("Check-in not persisted: {e:#}");
                self.show_toast("⚠ Check-in not saved to disk");
                CheckInOutcome::FirstTime
            }
        };

        self.card = match outcome {
            CheckInOutcome::FirstTime => CardState::FirstTime,
            CheckInOutcome::AlreadySeen => CardState::AlreadySeen,
        };
        self.revert_at = Some(Instant::now() + self.config.reaction_delay());
        self.stats.record(mask_id(&scan.id), outcome, scan.at);
    }

    /// Periodic tick: advance the idle animation, expire the reaction card
    /// and any toast.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if let Some(deadline) = self.revert_at {
            if Instant::now() >= deadline {
                self.card = CardState::Idle;
                self.revert_at = None;
            }
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Export the record set as CSV.
    ///
    /// An empty record set is the one user-visible flow error: it surfaces
    /// as a blocking notice and no file is created.
    pub fn export(&mut self) {
        if self.roster.is_empty() {
            tracing::info!("Export requested with empty record set");
            self.modal = Some(Modal::notice("There are no check-ins to export yet."));
            return;
        }

        match export_csv(
            self.roster.rows(),
            &self.config.export_dir,
            &self.config.roster_name,
        ) {
            Ok(path) => {
                self.show_toast(format!(
                    "✓ Exported {} to {}",
                    count_label(self.roster.len(), "check-in"),
                    path.display()
                ));
            }
            Err(e) => {
                tracing::error!("Export failed: {e:#}");
                self.show_toast("✗ Export failed, see logs");
            }
        }
    }

    /// Ask before wiping the record set.
    pub fn request_reset(&mut self) {
        self.modal = Some(Modal::confirm_reset());
    }

    /// Confirmed reset: clear the record set, the partial scan buffer and
    /// the session counters, and put the card back to the idle prompt.
    pub fn confirm_reset(&mut self) {
        let dropped = self.roster.len();
        match self.roster.clear() {
            Ok(()) => {
                self.scan_buffer.clear();
                self.card = CardState::Idle;
                self.revert_at = None;
                self.stats = Stats::default();
                tracing::info!("Record set reset, {} dropped", count_label(dropped, "check-in"));
                self.show_toast(format!("✓ Cleared {}", count_label(dropped, "check-in")));
            }
            Err(e) => {
                tracing::error!("Reset failed: {e:#}");
                self.show_toast("✗ Reset failed, see logs");
            }
        }
    }

    /// Switch to the next theme and remember the choice in the config file.
    pub fn cycle_theme(&mut self) {
        self.set_theme(self.theme_kind.next());
    }

    /// Switch to the previous theme.
    pub fn cycle_theme_back(&mut self) {
        self.set_theme(self.theme_kind.prev());
    }

    fn set_theme(&mut self, kind: ThemeKind) {
        self.theme_kind = kind;
        self.theme = kind.theme();
        self.config.theme = kind.name().to_string();
        if let Err(e) = self.config.save() {
            tracing::warn!("Could not persist theme choice: {}", e);
        }
        tracing::debug!("Theme switched to {}", kind.name());
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Uptime as HH:MM:SS for the status bar
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }

    /// Current idle pulse frame
    pub fn pulse(&self) -> &'static str {
        PULSE_FRAMES[self.animation_frame % PULSE_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread::sleep;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Fresh app over a scratch directory with the given reaction delay.
    fn test_app(delay_ms: u64) -> (TempDir, App) {
        let dir = TempDir::new().expect("create temp dir");
        let mut config = Config::default();
        config.data_dir = dir.path().to_path_buf();
        config.export_dir = dir.path().join("exports");
        config.reaction_delay_ms = delay_ms;
        let roster = Roster::load(&config.data_dir, &config.roster_name).expect("load roster");
        let app = App::new(LogBuffer::new(), config, roster);
        (dir, app)
    }

    fn scan(app: &mut App, id: &str) {
        app.handle_scan(&ScanEvent::now(id));
    }

    #[test]
    fn digits_accumulate_and_enter_dispatches() {
        let (_dir, mut app) = test_app(2000);
        for c in ['1', '0', '0', '1'] {
            app.push_digit(c);
        }
        assert_eq!(app.scan_buffer, "1001");

        app.submit_scan();
        assert_eq!(app.scan_buffer, "");
        assert_eq!(app.card, CardState::FirstTime);
        assert!(app.roster.contains("1001"));
        assert_eq!(app.stats.total_scans, 1);
    }

    #[test]
    fn non_digits_never_enter_the_buffer() {
        let (_dir, mut app) = test_app(2000);
        for c in ['a', ' ', '-', '\n', 'é'] {
            app.push_digit(c);
        }
        assert_eq!(app.scan_buffer, "");
    }

    #[test]
    fn enter_with_empty_buffer_is_a_noop() {
        let (_dir, mut app) = test_app(2000);
        app.submit_scan();
        assert_eq!(app.card, CardState::Idle);
        assert_eq!(app.stats.total_scans, 0);
        assert!(app.revert_at.is_none());
    }

    #[test]
    fn rescan_flips_to_already_seen_without_growing_the_roster() {
        let (_dir, mut app) = test_app(2000);
        scan(&mut app, "1001");
        assert_eq!(app.card, CardState::FirstTime);

        scan(&mut app, "1001");
        assert_eq!(app.card, CardState::AlreadySeen);
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.stats.first_time, 1);
        assert_eq!(app.stats.duplicates, 1);
    }

    #[test]
    fn card_reverts_to_idle_after_the_reaction_delay() {
        let (_dir, mut app) = test_app(30);
        scan(&mut app, "1001");

        app.tick();
        assert_eq!(app.card, CardState::FirstTime, "delay has not elapsed yet");

        sleep(Duration::from_millis(50));
        app.tick();
        assert_eq!(app.card, CardState::Idle);
        assert!(app.revert_at.is_none());
    }

    #[test]
    fn duplicate_card_also_reverts_to_idle() {
        let (_dir, mut app) = test_app(30);
        scan(&mut app, "1001");
        scan(&mut app, "1001");
        assert_eq!(app.card, CardState::AlreadySeen);

        sleep(Duration::from_millis(50));
        app.tick();
        assert_eq!(app.card, CardState::Idle);
        assert!(app.revert_at.is_none());
    }

    #[test]
    fn new_scan_replaces_the_revert_deadline() {
        let (_dir, mut app) = test_app(100);
        scan(&mut app, "1001");
        sleep(Duration::from_millis(60));

        // Second scan inside the first reaction window reschedules the revert
        scan(&mut app, "2002");
        sleep(Duration::from_millis(60));
        app.tick();
        assert_eq!(
            app.card,
            CardState::FirstTime,
            "first deadline must not end the second reaction"
        );

        sleep(Duration::from_millis(60));
        app.tick();
        assert_eq!(app.card, CardState::Idle);
    }

    #[test]
    fn export_with_no_records_opens_notice_and_creates_nothing() {
        let (_dir, mut app) = test_app(2000);
        app.export();

        assert!(matches!(app.modal, Some(Modal::Notice(_))));
        let csv = app.config.export_dir.join("checkins.csv");
        assert!(!csv.exists());
        assert!(!app.config.export_dir.exists());
    }

    #[test]
    fn export_writes_rows_in_checkin_order() {
        let (_dir, mut app) = test_app(2000);
        scan(&mut app, "2002");
        scan(&mut app, "1001");
        app.export();

        assert!(app.modal.is_none());
        assert!(app.toast.is_some());
        let csv = app.config.export_dir.join("checkins.csv");
        assert_eq!(fs::read_to_string(csv).unwrap(), "2002\n1001\n");
    }

    #[test]
    fn reset_asks_for_confirmation_first() {
        let (_dir, mut app) = test_app(2000);
        scan(&mut app, "1001");

        app.request_reset();
        assert!(matches!(app.modal, Some(Modal::ConfirmReset)));

        // Cancelling the dialog leaves everything in place
        app.modal = None;
        assert_eq!(app.roster.len(), 1);
        assert!(app.roster.contains("1001"));
    }

    #[test]
    fn confirmed_reset_clears_records_buffer_and_card() {
        let (_dir, mut app) = test_app(2000);
        scan(&mut app, "1001");
        app.push_digit('9');
        app.confirm_reset();

        assert!(app.roster.is_empty());
        assert_eq!(app.scan_buffer, "");
        assert_eq!(app.card, CardState::Idle);
        assert!(app.revert_at.is_none());
        assert_eq!(app.stats.total_scans, 0);
        assert_eq!(fs::read_to_string(app.roster.path()).unwrap(), "");
    }

    #[test]
    fn failed_reset_keeps_records_and_counters() {
        let (_dir, mut app) = test_app(2000);
        scan(&mut app, "1001");

        // Block the key-list path so the truncate fails
        fs::remove_file(app.roster.path()).unwrap();
        fs::create_dir(app.roster.path()).unwrap();

        app.confirm_reset();
        assert!(app.roster.contains("1001"));
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.stats.total_scans, 1);
        assert!(app
            .toast
            .as_ref()
            .is_some_and(|t| t.message.contains("Reset failed")));
    }

    #[test]
    fn cleared_identifier_is_a_first_timer_again() {
        let (_dir, mut app) = test_app(2000);
        scan(&mut app, "1001");
        app.confirm_reset();

        scan(&mut app, "1001");
        assert_eq!(app.card, CardState::FirstTime);
    }
}
