//! Layout components (main area, status bar)

use crate::app::App;
use crate::state::{Form, CATEGORY_INDEX, DIFFICULTY_INDEX, SUBMIT_INDEX};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const QUIT_HINT: &str = " ^C:quit ";
const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar with key hints for the focused widget
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }

    let status_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width.saturating_sub(QUIT_HINT.len() as u16),
        height: 1,
    };
    let status = Paragraph::new(Line::from(vec![Span::raw(" "), Span::raw(hints(app))]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(QUIT_HINT.len() as u16),
        y: area.y + area.height - 1,
        width: (QUIT_HINT.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(QUIT_HINT).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current focus
fn hints(app: &App) -> String {
    if app.state.has_alerts() {
        return "Enter/Esc:dismiss".to_string();
    }
    match app.state.form.active_field() {
        SUBMIT_INDEX => format!("Tab:next  Enter:submit  {SUBMIT_SHORTCUT}:submit"),
        DIFFICULTY_INDEX => format!("Tab:next  ←/→ or 1-5:choose  {SUBMIT_SHORTCUT}:submit"),
        CATEGORY_INDEX => format!("Tab:next  ←/→:choose  {SUBMIT_SHORTCUT}:submit"),
        _ => format!("Tab:next  Shift+Tab:prev  Enter/{SUBMIT_SHORTCUT}:submit"),
    }
}
