// Startup module - banner printed before the TUI takes the screen
//
// Shows version info, where the config and the record set live, and
// whether demo mode is active.

use crate::config::{Config, VERSION};
use crate::roster::Roster;
use crate::util::count_label;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Print the startup banner
/// This runs before the TUI takes over the screen
pub fn print_startup(config: &Config, roster: &Roster) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}scandesk{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Terminal check-in kiosk{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET}  {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET}  {DIM}(using defaults){RESET}");
        }
    }
    println!(
        "  {DIM}Records:{RESET} {} {DIM}({} loaded){RESET}",
        roster.path().display(),
        roster.len()
    );
    println!("  {DIM}Exports:{RESET} {}", config.export_dir.display());
    if config.demo_mode {
        println!("  {YELLOW}▸ Demo mode active{RESET} {DIM}(synthetic scans){RESET}");
    }
    println!();
}

/// Print startup messages into the TUI log buffer
/// Users see this boot sequence in the logs overlay
pub fn log_startup(config: &Config, roster: &Roster) {
    tracing::info!("scandesk v{} starting", VERSION);
    tracing::info!(
        "Record set: {} ({})",
        roster.path().display(),
        count_label(roster.len(), "check-in")
    );
    tracing::info!("Exports go to {}", config.export_dir.display());
    if config.demo_mode {
        tracing::info!("Demo mode active (synthetic scans)");
    }
    tracing::info!("Ready. Waiting for scans...");
}
