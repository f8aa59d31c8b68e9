//! Input widgets of the add-question form

use super::field::{category_options, difficulty_options, FormField, SelectOption};
use super::form_state::FieldName;
use crate::state::CategoryMap;

/// Focus order of the form
pub const QUESTION_INDEX: usize = 0;
pub const ANSWER_INDEX: usize = 1;
pub const DIFFICULTY_INDEX: usize = 2;
pub const CATEGORY_INDEX: usize = 3;
pub const SUBMIT_INDEX: usize = 4;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The add-question form: question, answer, difficulty, category, submit
#[derive(Debug, Clone)]
pub struct QuestionForm {
    pub question: FormField,
    pub answer: FormField,
    pub difficulty: FormField,
    pub category: FormField,
    pub active_field_index: usize,
}

impl QuestionForm {
    pub fn new() -> Self {
        Self {
            question: FormField::text(FieldName::Question.as_str(), "Question"),
            answer: FormField::text(FieldName::Answer.as_str(), "Answer"),
            difficulty: FormField::select(FieldName::Difficulty.as_str(), "Difficulty"),
            category: FormField::select(FieldName::Category.as_str(), "Category"),
            active_field_index: QUESTION_INDEX,
        }
    }

    /// Returns true if the submit button has focus
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_INDEX
    }

    /// Returns true if a text input has focus
    pub fn is_text_active(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| !f.is_select())
    }

    /// Options shown by the field at `index` (empty for text inputs)
    pub fn options_for(&self, index: usize, categories: &CategoryMap) -> Vec<SelectOption> {
        match index {
            DIFFICULTY_INDEX => difficulty_options(),
            CATEGORY_INDEX => category_options(categories),
            _ => Vec::new(),
        }
    }

    /// Name and value for a change event from the active field.
    /// None on the submit button or a select without options.
    pub fn active_change(&self, categories: &CategoryMap) -> Option<(String, String)> {
        let field = self.get_field(self.active_field_index)?;
        let options = self.options_for(self.active_field_index, categories);
        let value = field.change_value(&options)?;
        Some((field.name.clone(), value))
    }

    /// Clear every widget and return focus to the first field
    pub fn reset(&mut self) {
        self.question.reset();
        self.answer.reset();
        self.difficulty.reset();
        self.category.reset();
        self.active_field_index = QUESTION_INDEX;
    }
}

impl Default for QuestionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for QuestionForm {
    fn field_count(&self) -> usize {
        SUBMIT_INDEX + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            QUESTION_INDEX => Some(&mut self.question),
            ANSWER_INDEX => Some(&mut self.answer),
            DIFFICULTY_INDEX => Some(&mut self.difficulty),
            CATEGORY_INDEX => Some(&mut self.category),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            QUESTION_INDEX => Some(&self.question),
            ANSWER_INDEX => Some(&self.answer),
            DIFFICULTY_INDEX => Some(&self.difficulty),
            CATEGORY_INDEX => Some(&self.category),
            // The submit button has no FormField
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> CategoryMap {
        let mut map = CategoryMap::new();
        map.insert(1, "Science".to_string());
        map.insert(4, "History".to_string());
        map
    }

    #[test]
    fn test_new_has_correct_defaults() {
        let form = QuestionForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.question.name, "question");
        assert_eq!(form.answer.name, "answer");
        assert_eq!(form.difficulty.name, "difficulty");
        assert_eq!(form.category.name, "category");
        assert!(form.is_text_active());
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = QuestionForm::new();
        for _ in 0..form.field_count() {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_submit() {
        let mut form = QuestionForm::new();
        form.prev_field();
        assert!(form.is_submit_active());
        assert!(form.get_active_field_mut().is_none());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = QuestionForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, SUBMIT_INDEX);
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = QuestionForm::new();
        assert_eq!(form.get_field(QUESTION_INDEX).unwrap().name, "question");
        assert_eq!(form.get_field(ANSWER_INDEX).unwrap().name, "answer");
        assert_eq!(form.get_field(DIFFICULTY_INDEX).unwrap().name, "difficulty");
        assert_eq!(form.get_field(CATEGORY_INDEX).unwrap().name, "category");
        assert!(form.get_field(SUBMIT_INDEX).is_none());
    }

    #[test]
    fn test_active_change_for_text() {
        let mut form = QuestionForm::new();
        form.question.push_char('Q');
        assert_eq!(
            form.active_change(&categories()),
            Some(("question".to_string(), "Q".to_string()))
        );
    }

    #[test]
    fn test_active_change_for_category_uses_id() {
        let mut form = QuestionForm::new();
        form.set_active_field(CATEGORY_INDEX);
        form.category.select_next(2);
        assert_eq!(
            form.active_change(&categories()),
            Some(("category".to_string(), "4".to_string()))
        );
    }

    #[test]
    fn test_active_change_none_without_categories() {
        let mut form = QuestionForm::new();
        form.set_active_field(CATEGORY_INDEX);
        assert!(form.active_change(&CategoryMap::new()).is_none());
    }

    #[test]
    fn test_active_change_none_on_submit() {
        let mut form = QuestionForm::new();
        form.set_active_field(SUBMIT_INDEX);
        assert!(form.active_change(&categories()).is_none());
    }

    #[test]
    fn test_reset_clears_widgets_and_focus() {
        let mut form = QuestionForm::new();
        form.question.push_char('a');
        form.answer.push_char('b');
        form.difficulty.select_index(4, 5);
        form.category.select_index(1, 2);
        form.set_active_field(SUBMIT_INDEX);

        form.reset();

        assert_eq!(form.question.as_text(), "");
        assert_eq!(form.answer.as_text(), "");
        assert_eq!(form.difficulty.selected_index(), 0);
        assert_eq!(form.category.selected_index(), 0);
        assert_eq!(form.active_field_index, 0);
    }
}
