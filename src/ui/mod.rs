//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    forms::draw_question_form(frame, main_area, &app.state);

    layout::draw_status_bar(frame, app);

    // Alerts overlay everything else
    if let Some(message) = app.state.current_alert() {
        components::render_alert_dialog(frame, message);
    }
}
