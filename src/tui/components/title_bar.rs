// Title bar component
//
// Renders the app name and the tagline inherited from the event posters.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const TAGLINE_FULL: &str =
    "my friend asked if I wanted to go to happy hour. I said, WINE NOT?";
const TAGLINE_SHORT: &str = "WINE NOT?";

/// Render the title bar at the top of the screen
///
/// Shows the app name plus as much of the tagline as the width allows,
/// and a hint for the help overlay in the top-right corner.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let name = " 🍦 scandesk";

    let tagline = if area.width as usize > name.width() + TAGLINE_FULL.width() + 12 {
        Some(TAGLINE_FULL)
    } else if area.width as usize > name.width() + TAGLINE_SHORT.width() + 12 {
        Some(TAGLINE_SHORT)
    } else {
        None
    };

    let mut spans = vec![Span::styled(name, app.theme.title_style())];
    if let Some(tagline) = tagline {
        spans.push(Span::styled("  ──  ", app.theme.dim_style()));
        spans.push(Span::styled(
            tagline,
            Style::default()
                .fg(app.theme.tagline)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.title))
            .title_top(Line::from(" ? ").right_aligned()),
    );

    f.render_widget(title, area);
}
