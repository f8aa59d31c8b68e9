//! Question form state and the generic field change handler

use crate::state::{CategoryMap, QuestionSubmission};
use std::str::FromStr;
use thiserror::Error;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Names of the fields a change event can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Question,
    Answer,
    Difficulty,
    Category,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
            Self::Difficulty => "difficulty",
            Self::Category => "category",
        }
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(Self::Question),
            "answer" => Ok(Self::Answer),
            "difficulty" => Ok(Self::Difficulty),
            "category" => Ok(Self::Category),
            other => Err(FieldError::UnknownField(other.to_string())),
        }
    }
}

/// Rejected field change
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("invalid value for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("difficulty must be between 1 and 5, got {0}")]
    DifficultyOutOfRange(u8),
}

/// Everything the question view keeps between events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: u32,
    pub categories: CategoryMap,
    pub create_success: Option<String>,
    pub ajax_errors: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            difficulty: MIN_DIFFICULTY,
            category: 1,
            categories: CategoryMap::new(),
            create_success: None,
            ajax_errors: None,
        }
    }
}

impl FormState {
    /// Set the field called `name` from its raw input value.
    ///
    /// Only the named field changes. On error the state is left untouched.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<FieldName, FieldError> {
        let field: FieldName = name.parse()?;
        match field {
            FieldName::Question => self.question = value.to_string(),
            FieldName::Answer => self.answer = value.to_string(),
            FieldName::Difficulty => {
                let difficulty = parse_number::<u8>(field, value)?;
                if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
                    return Err(FieldError::DifficultyOutOfRange(difficulty));
                }
                self.difficulty = difficulty;
            }
            FieldName::Category => self.category = parse_number::<u32>(field, value)?,
        }
        Ok(field)
    }

    /// Build the request payload from the current values
    pub fn submission(&self) -> QuestionSubmission {
        QuestionSubmission {
            question: self.question.clone(),
            answer: self.answer.clone(),
            difficulty: self.difficulty,
            category: self.category,
        }
    }

    pub fn clear_banners(&mut self) {
        self.create_success = None;
        self.ajax_errors = None;
    }
}

fn parse_number<T: FromStr>(field: FieldName, value: &str) -> Result<T, FieldError> {
    value.trim().parse().map_err(|_| FieldError::InvalidNumber {
        field: field.as_str(),
        value: value.to_string(),
    })
}
