//! Add-question form rendering

use super::field_renderer::{draw_select_field, draw_text_field};
use crate::state::{AppState, Form, SUBMIT_INDEX};
use crate::ui::components::{render_action_button, wrap_text, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HEADING: &str = "Add a New Trivia Question";

/// Draw banners, the form fields and the submit button
pub fn draw_question_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Trivia ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form_state = &state.form_state;
    // Banners wrap inside the horizontal margin and take as many rows as they need
    let text_width = inner.width.saturating_sub(2).max(1) as usize;
    let banners: Vec<(Vec<String>, Color)> = [
        (form_state.ajax_errors.as_deref(), Color::Red),
        (form_state.create_success.as_deref(), Color::Green),
    ]
    .into_iter()
    .filter_map(|(text, color)| text.filter(|t| !t.is_empty()).map(|t| (t, color)))
    .map(|(text, color)| (wrap_text(text, text_width), color))
    .collect();

    let mut constraints: Vec<Constraint> = banners
        .iter()
        .map(|(lines, _)| Constraint::Length(lines.len() as u16))
        .collect();
    constraints.extend([
        Constraint::Length(2), // Heading + gap
        Constraint::Length(3), // Question
        Constraint::Length(3), // Answer
        Constraint::Length(3), // Difficulty
        Constraint::Length(3), // Category
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (idx, (lines, color)) in banners.iter().enumerate() {
        let banner = Paragraph::new(
            lines
                .iter()
                .map(|l| Line::from(l.as_str()))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().fg(*color).add_modifier(Modifier::BOLD));
        frame.render_widget(banner, chunks[idx]);
    }

    let offset = banners.len();
    let heading = Paragraph::new(Line::from(HEADING)).style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(heading, chunks[offset]);

    let form = &state.form;
    let active = form.active_field();
    for index in 0..SUBMIT_INDEX {
        let Some(field) = form.get_field(index) else {
            continue;
        };
        let field_area = chunks[offset + 1 + index];
        if field.is_select() {
            let options = form.options_for(index, &form_state.categories);
            draw_select_field(frame, field_area, field, &options, active == index);
        } else {
            draw_text_field(frame, field_area, field, active == index);
        }
    }

    let button_area = Rect {
        width: chunks[offset + 1 + SUBMIT_INDEX].width.min(12),
        ..chunks[offset + 1 + SUBMIT_INDEX]
    };
    render_action_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_active(),
        Color::Green,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{success_message, CategoryMap};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_question_form(frame, frame.area(), state))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_heading_and_labels() {
        let text = render(&AppState::default());
        assert!(text.contains("Add a New Trivia Question"));
        assert!(text.contains("Question"));
        assert!(text.contains("Answer"));
        assert!(text.contains("Difficulty"));
        assert!(text.contains("Category"));
        assert!(text.contains("Submit"));
    }

    #[test]
    fn test_no_banners_by_default() {
        let text = render(&AppState::default());
        assert!(!text.contains("successfully added"));
        assert!(!text.contains("Unable to"));
    }

    #[test]
    fn test_renders_success_banner() {
        let mut state = AppState::default();
        state.form_state.create_success =
            Some("Question \"What is 2+2?\" successfully added!".to_string());
        let text = render(&state);
        assert!(text.contains("Question \"What is 2+2?\" successfully added!"));
    }

    #[test]
    fn test_long_success_banner_wraps_in_full() {
        let mut state = AppState::default();
        state.form_state.create_success = Some(success_message(
            "Which author wrote the novel that begins with the line Call me Ishmael?",
        ));
        let text = render(&state);

        assert!(text.contains("Question \"Which author wrote the novel"));
        assert!(text.contains("Ishmael?\" successfully added!"));
        assert!(text.contains("Submit"));
    }

    #[test]
    fn test_renders_error_banner() {
        let mut state = AppState::default();
        state.form_state.ajax_errors =
            Some("Unable to add question. Please try your request again".to_string());
        let text = render(&state);
        assert!(text.contains("Unable to add question. Please try your request again"));
    }

    #[test]
    fn test_renders_one_option_per_category() {
        let mut categories = CategoryMap::new();
        categories.insert(1, "Science".to_string());
        categories.insert(2, "Art".to_string());
        categories.insert(6, "Sports".to_string());

        let mut state = AppState::default();
        state.form_state.categories = categories;
        let text = render(&state);

        for name in ["Science", "Art", "Sports"] {
            assert_eq!(text.matches(name).count(), 1, "{name}");
        }
    }

    #[test]
    fn test_empty_categories_placeholder() {
        let text = render(&AppState::default());
        assert!(text.contains("(no options)"));
    }

    #[test]
    fn test_long_input_scrolls_to_keep_the_end_visible() {
        let mut state = AppState::default();
        let long = format!("{}THE END", "x".repeat(100));
        for c in long.chars() {
            state.form.question.push_char(c);
        }
        let text = render(&state);
        assert!(text.contains("THE END▌"));
    }

    #[test]
    fn test_renders_typed_text() {
        let mut state = AppState::default();
        for c in "Capital of Peru?".chars() {
            state.form.question.push_char(c);
        }
        let text = render(&state);
        assert!(text.contains("Capital of Peru?"));
    }
}
