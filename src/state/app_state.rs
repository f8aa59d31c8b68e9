//! Application state definitions

use super::{ErrorDisplay, FormState, QuestionForm};
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Values the question form submits, plus banners and categories
    pub form_state: FormState,
    /// Input widgets of the question form
    pub form: QuestionForm,
    /// How request failures are reported
    pub error_display: ErrorDisplay,
    /// Alerts waiting to be dismissed, oldest first
    pub alerts: VecDeque<String>,
}

impl AppState {
    pub fn new(error_display: ErrorDisplay) -> Self {
        Self {
            error_display,
            ..Default::default()
        }
    }

    /// Queue an alert for display
    pub fn push_alert(&mut self, message: String) {
        self.alerts.push_back(message);
    }

    /// Check whether an alert is blocking input
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// The alert currently shown
    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    /// Dismiss the alert currently shown
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_alerts() {
        let state = AppState::new(ErrorDisplay::Inline);
        assert!(!state.has_alerts());
        assert!(state.current_alert().is_none());
        assert_eq!(state.error_display, ErrorDisplay::Inline);
    }

    #[test]
    fn test_alerts_shown_in_order() {
        let mut state = AppState::default();
        state.push_alert("first".to_string());
        state.push_alert("second".to_string());

        assert_eq!(state.current_alert(), Some("first"));
        state.dismiss_alert();
        assert_eq!(state.current_alert(), Some("second"));
        state.dismiss_alert();
        assert!(!state.has_alerts());
    }

    #[test]
    fn test_dismiss_without_alerts_is_noop() {
        let mut state = AppState::default();
        state.dismiss_alert();
        assert!(!state.has_alerts());
    }
}
