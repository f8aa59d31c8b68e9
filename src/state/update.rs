//! Event handling for the question form
//!
//! `FormState::update` is the only place the form state changes. It never
//! performs I/O: anything that has to happen outside the state (a request,
//! resetting the widgets, an alert) comes back as an [`Effect`] for the app
//! to carry out.

use crate::api::ApiError;
use crate::state::{CategoryMap, CreatedQuestion, FormState, QuestionSubmission};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How request failures are shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisplay {
    /// Blocking dialog that has to be dismissed
    #[default]
    Alert,
    /// Red banner above the form
    Inline,
}

/// Failures surfaced to the user, each with a fixed message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unable to load categories. Please try your request again")]
    CategoryLoad(#[source] ApiError),

    #[error("Unable to add question. Please try your request again")]
    QuestionSubmit(#[source] ApiError),
}

/// Something that happened to the form
#[derive(Debug)]
pub enum Action {
    /// The view is on screen for the first time
    Mounted,
    CategoriesLoaded(Result<CategoryMap, ApiError>),
    /// An input widget changed; `name` is the widget's field name
    FieldChanged { name: String, value: String },
    SubmitRequested,
    SubmitFinished {
        submission: QuestionSubmission,
        result: Result<Option<CreatedQuestion>, ApiError>,
    },
}

/// Work the app has to do on behalf of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCategories,
    SubmitQuestion(QuestionSubmission),
    /// Clear the input widgets. The form state keeps its values.
    ResetForm,
    Alert(String),
}

/// Banner text after a question was added
pub fn success_message(question: &str) -> String {
    format!("Question \"{question}\" successfully added!")
}

impl FormState {
    /// Apply an action and return the side effect it requires, if any
    pub fn update(&mut self, action: Action, display: ErrorDisplay) -> Option<Effect> {
        match action {
            Action::Mounted => Some(Effect::FetchCategories),
            Action::CategoriesLoaded(Ok(categories)) => {
                tracing::info!("Loaded {} categories", categories.len());
                self.categories = categories;
                None
            }
            Action::CategoriesLoaded(Err(e)) => self.report(FormError::CategoryLoad(e), display),
            Action::FieldChanged { name, value } => {
                if let Err(e) = self.set_field(&name, &value) {
                    tracing::warn!("Ignoring field change: {e}");
                }
                None
            }
            Action::SubmitRequested => {
                self.clear_banners();
                Some(Effect::SubmitQuestion(self.submission()))
            }
            Action::SubmitFinished {
                submission,
                result: Ok(created),
            } => {
                match created {
                    Some(q) => tracing::info!(
                        id = q.id,
                        category = q.category,
                        difficulty = q.difficulty,
                        "Question created: {}",
                        q.question
                    ),
                    None => tracing::info!("Question created"),
                }
                self.create_success = Some(success_message(&submission.question));
                self.ajax_errors = None;
                Some(Effect::ResetForm)
            }
            Action::SubmitFinished { result: Err(e), .. } => {
                self.report(FormError::QuestionSubmit(e), display)
            }
        }
    }

    fn report(&mut self, error: FormError, display: ErrorDisplay) -> Option<Effect> {
        let cause = match &error {
            FormError::CategoryLoad(e) | FormError::QuestionSubmit(e) => e,
        };
        tracing::warn!("{error} ({cause})");

        match display {
            ErrorDisplay::Alert => Some(Effect::Alert(error.to_string())),
            ErrorDisplay::Inline => {
                self.ajax_errors = Some(error.to_string());
                None
            }
        }
    }
}
