//! Application state and core logic

use crate::api::ApiClientTrait;
use crate::state::{Action, AppState, Effect, ErrorDisplay, Form, DIFFICULTY_INDEX};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// API client shared with in-flight requests
    api: Arc<dyn ApiClientTrait>,
    /// Sender handed to request tasks so their results come back as actions
    actions_tx: UnboundedSender<Action>,
    /// Results of finished requests
    actions_rx: UnboundedReceiver<Action>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn ApiClientTrait>, error_display: ErrorDisplay) -> Self {
        let (actions_tx, actions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(error_display),
            api,
            actions_tx,
            actions_rx,
            quit: false,
        }
    }

    /// Put the form on screen and start loading categories
    pub fn mount(&mut self) {
        self.dispatch(Action::Mounted);
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Feed an action to the form and carry out the resulting effect
    pub fn dispatch(&mut self, action: Action) {
        let display = self.state.error_display;
        if let Some(effect) = self.state.form_state.update(action, display) {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchCategories => {
                let api = Arc::clone(&self.api);
                let tx = self.actions_tx.clone();
                tokio::spawn(async move {
                    let result = api.fetch_categories().await;
                    if tx.send(Action::CategoriesLoaded(result)).is_err() {
                        tracing::debug!("Category result dropped, app is gone");
                    }
                });
            }
            Effect::SubmitQuestion(submission) => {
                tracing::info!(
                    category = submission.category,
                    difficulty = submission.difficulty,
                    "Submitting question"
                );
                let api = Arc::clone(&self.api);
                let tx = self.actions_tx.clone();
                tokio::spawn(async move {
                    let result = api.create_question(&submission).await;
                    if tx
                        .send(Action::SubmitFinished { submission, result })
                        .is_err()
                    {
                        tracing::debug!("Submit result dropped, app is gone");
                    }
                });
            }
            Effect::ResetForm => self.state.form.reset(),
            Effect::Alert(message) => self.state.push_alert(message),
        }
    }

    /// Apply every request result that has arrived, without waiting
    pub fn drain_actions(&mut self) {
        while let Ok(action) = self.actions_rx.try_recv() {
            self.dispatch(action);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Alerts are modal
        if self.state.has_alerts() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return;
        }

        let on_submit = self.state.form.is_submit_active();
        let on_text = self.state.form.is_text_active();
        let on_select = !on_submit && !on_text;

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch(Action::SubmitRequested);
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Enter in a text input submits, as in a browser form
            KeyCode::Enter if on_submit || on_text => self.dispatch(Action::SubmitRequested),
            KeyCode::Left if on_select => {
                let count = self.active_option_count();
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.select_prev(count);
                }
                self.emit_change();
            }
            KeyCode::Right if on_select => {
                let count = self.active_option_count();
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.select_next(count);
                }
                self.emit_change();
            }
            // Digits jump straight to a difficulty
            KeyCode::Char(c @ '1'..='5')
                if on_select && self.state.form.active_field() == DIFFICULTY_INDEX =>
            {
                let count = self.active_option_count();
                let index = c.to_digit(10).unwrap_or(1) as usize - 1;
                self.state.form.difficulty.select_index(index, count);
                self.emit_change();
            }
            // Other shortcuts never reach a text input
            KeyCode::Char(c) if on_text && !has_command_modifier(key) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
                self.emit_change();
            }
            KeyCode::Backspace if on_text => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
                self.emit_change();
            }
            _ => {}
        }
    }

    fn active_option_count(&self) -> usize {
        self.state
            .form
            .options_for(
                self.state.form.active_field(),
                &self.state.form_state.categories,
            )
            .len()
    }

    /// Send the active widget's value to the form state
    fn emit_change(&mut self) {
        if let Some((name, value)) = self
            .state
            .form
            .active_change(&self.state.form_state.categories)
        {
            self.dispatch(Action::FieldChanged { name, value });
        }
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}
