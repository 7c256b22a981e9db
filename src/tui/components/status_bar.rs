// Status bar component
//
// Renders session statistics at the bottom: uptime, scan counts and the
// masked identifier of the most recent scan.

use crate::checkin::CheckInOutcome;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with session statistics
///
/// Adapts to terminal width:
/// - Wide: full format with labels and the last scan
/// - Narrow: compact counters only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let stats = &app.stats;

    let status_text = if area.width < 70 {
        format!(
            " ⏱ {} │ 🎫 {} │ ✅ {} │ 🔁 {}",
            app.uptime(),
            stats.total_scans,
            stats.first_time,
            stats.duplicates,
        )
    } else {
        let last = match &stats.last_scan {
            Some(scan) => {
                let marker = match scan.outcome {
                    CheckInOutcome::FirstTime => "✓",
                    CheckInOutcome::AlreadySeen => "↻",
                };
                format!(
                    " │ last {} {} {}",
                    marker,
                    scan.masked_id,
                    scan.at.with_timezone(&chrono::Local).format("%H:%M:%S"),
                )
            }
            None => String::new(),
        };

        format!(
            " ⏱ {} │ 🎫 {} scans │ ✅ {} checked in │ 🔁 {} repeats ({:.0}%){}",
            app.uptime(),
            stats.total_scans,
            stats.first_time,
            stats.duplicates,
            stats.duplicate_rate(),
            last,
        )
    };

    let status = Paragraph::new(status_text)
        .style(app.theme.status_style())
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(app.theme.border_style()),
        );

    f.render_widget(status, area);
}
