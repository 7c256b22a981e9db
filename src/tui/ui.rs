// UI rendering
//
// Top-level layout plus the display card and the modal overlays. The layout
// is a single screen: title bar, full-width card, status bar. Overlays
// (modals, toast) render on top with Clear.

use super::app::{App, CardState};
use super::components;
use super::icons;
use super::modal::Modal;
use crate::logging::LogLevel;
use crate::util::count_label;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the complete UI
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    components::title_bar::render(f, chunks[0], app);
    render_card(f, chunks[1], app);
    components::status_bar::render(f, chunks[2], app);

    if let Some(modal) = app.modal.clone() {
        render_modal(f, &modal, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}

/// The display card: icon art, title, subtitle, and either the scan
/// progress dots or the idle pulse.
fn render_card(f: &mut Frame, area: Rect, app: &App) {
    let (title, subtitle) = app.card.messages();
    let (icon, accent) = match app.card {
        CardState::Idle => (icons::ICE_CREAM, app.theme.idle),
        CardState::FirstTime => (icons::LAUGHING, app.theme.success),
        CardState::AlreadySeen => (icons::SAD_TEAR, app.theme.duplicate),
    };

    let mut lines: Vec<Line> = icon
        .iter()
        .map(|art| Line::styled(*art, Style::default().fg(accent)))
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        title,
        Style::default()
            .fg(app.theme.fg)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        subtitle,
        Style::default().fg(app.theme.subtitle),
    ));
    lines.push(Line::raw(""));

    // Digits in flight show as dots, never as the number itself
    if !app.scan_buffer.is_empty() {
        let dots = "•".repeat(app.scan_buffer.chars().count());
        lines.push(Line::styled(
            format!("reading card {dots}"),
            app.theme.dim_style(),
        ));
    } else if app.card == CardState::Idle {
        lines.push(Line::styled(app.pulse(), app.theme.dim_style()));
    } else {
        lines.push(Line::raw(""));
    }

    // Pad above the content so the card sits vertically centered
    let inner_height = area.height.saturating_sub(2) as usize;
    let pad = inner_height.saturating_sub(lines.len()) / 2;
    let mut padded: Vec<Line> = std::iter::repeat_with(|| Line::raw("")).take(pad).collect();
    padded.extend(lines);

    let card = Paragraph::new(Text::from(padded))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        );

    f.render_widget(card, area);
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render a modal dialog as a centered overlay
fn render_modal(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::ConfirmReset => render_confirm_reset(f, app),
        Modal::Notice(message) => render_notice(f, app, message),
        Modal::Logs => render_logs(f, app),
    }
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    // Styles
    let key_style = Style::default().fg(app.theme.idle);
    let desc_style = app.theme.base_style();
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Scanning", header_style)),
        kb("0-9", "Type a card number"),
        kb("Enter", "Check the number in"),
        Line::raw(""),
        Line::from(Span::styled("  Controls", header_style)),
        kb("p", "Export check-ins as CSV"),
        kb("r", "Reset the record set"),
        kb("t / T", "Next / previous theme"),
        kb("l", "Show recent logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled("  Dialogs", header_style)),
        kb("Enter, y", "Confirm"),
        kb("Esc, n", "Cancel / close"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme_kind.name(), key_style),
            Span::styled("  │  Records: ", desc_style),
            Span::styled(app.roster.len().to_string(), key_style),
        ]),
    ]);

    let width = 46;
    let height = 20;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the reset confirmation overlay
fn render_confirm_reset(f: &mut Frame, app: &App) {
    let question = format!(
        "Clear {}?",
        count_label(app.roster.len(), "recorded check-in")
    );

    let content = Text::from(vec![
        Line::raw(""),
        Line::styled(
            question.clone(),
            Style::default()
                .fg(app.theme.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled("This cannot be undone.", app.theme.dim_style()),
    ]);

    let width = (question.width() as u16 + 8)
        .max(34)
        .min(f.area().width.saturating_sub(4));
    let height = 6;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.duplicate))
                .title(" Reset ")
                .title_bottom(Line::from(" Enter confirm · Esc cancel ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render a blocking notice overlay
fn render_notice(f: &mut Frame, app: &App, message: &str) {
    let width = (message.width() as u16 + 8)
        .max(30)
        .min(f.area().width.saturating_sub(4));
    let height = 5;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let content = Text::from(vec![Line::raw(""), Line::raw(message)]);
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.bg).fg(app.theme.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.duplicate))
                .title(" Notice ")
                .title_bottom(Line::from(" Enter to dismiss ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the logs overlay with the most recent ring-buffer entries
fn render_logs(f: &mut Frame, app: &App) {
    let frame_area = f.area();
    let width = (frame_area.width * 90 / 100).max(60).min(frame_area.width);
    let height = (frame_area.height * 70 / 100).max(12).min(frame_area.height);
    let area = centered_rect(width, height, frame_area);

    f.render_widget(Clear, area);

    let visible = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(visible);

    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::styled("  nothing logged yet", app.theme.dim_style())]
    } else {
        entries
            .iter()
            .map(|entry| {
                let level_color = match entry.level {
                    LogLevel::Error => app.theme.log_error,
                    LogLevel::Warn => app.theme.log_warn,
                    LogLevel::Info => app.theme.log_info,
                    LogLevel::Debug => app.theme.log_debug,
                    LogLevel::Trace => app.theme.log_trace,
                };
                Line::from(vec![
                    Span::styled(
                        format!(
                            " {} ",
                            entry
                                .timestamp
                                .with_timezone(&chrono::Local)
                                .format("%H:%M:%S")
                        ),
                        app.theme.dim_style(),
                    ),
                    Span::styled(
                        format!("{:<5} ", entry.level.as_str()),
                        Style::default().fg(level_color),
                    ),
                    Span::styled(entry.message.clone(), Style::default().fg(app.theme.fg)),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(app.theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(" Logs ")
                .title_bottom(Line::from(" Press l or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
