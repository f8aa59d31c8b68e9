//! Field rendering utilities for forms

use crate::state::{FormField, SelectOption};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active))
}

/// The last `width` characters of `text`
fn visible_tail(text: &str, width: usize) -> &str {
    let skip = text.chars().count().saturating_sub(width);
    text.char_indices().nth(skip).map_or("", |(i, _)| &text[i..])
}

/// Draw a single-line text input, scrolled so the end of the text stays visible
pub fn draw_text_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let value = field.as_text();
    let line = if value.is_empty() && !is_active {
        Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        // Inside the borders, one cell kept for the cursor
        let width = area.width.saturating_sub(2) as usize;
        let room = if is_active { width.saturating_sub(1) } else { width };
        let mut spans = vec![Span::raw(visible_tail(value, room).to_string())];
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(line).block(field_block(&field.label, is_active)),
        area,
    );
}

/// Draw a selector showing every option, the selected one highlighted
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    options: &[SelectOption],
    is_active: bool,
) {
    let line = if options.is_empty() {
        Line::from(Span::styled(
            "(no options)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let selected = field.selected_index();
        let mut spans = Vec::with_capacity(options.len() * 2);
        for (idx, option) in options.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            let style = match (idx == selected, is_active) {
                (true, true) => Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                (true, false) => Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                (false, _) => Style::default().fg(Color::Gray),
            };
            spans.push(Span::styled(format!(" {} ", option.label), style));
        }
        Line::from(spans)
    };

    let label = if is_active {
        format!("{} ←/→", field.label)
    } else {
        field.label.clone()
    };

    frame.render_widget(
        Paragraph::new(line).block(field_block(&label, is_active)),
        area,
    );
}
