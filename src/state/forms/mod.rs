//! Form domain layer
//!
//! `FormState` holds the values that get submitted; `QuestionForm` holds the
//! input widgets the user types into. Widget edits reach the state only as
//! change events.

mod field;
mod form_state;
mod question_form;

pub use field::{FormField, SelectOption};
pub use form_state::FormState;
pub use question_form::{Form, QuestionForm, CATEGORY_INDEX, DIFFICULTY_INDEX, SUBMIT_INDEX};
