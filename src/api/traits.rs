//! Trait abstraction for the API client to enable mocking in tests

use super::ApiError;
use crate::state::{CategoryMap, CreatedQuestion, QuestionSubmission};
use async_trait::async_trait;

/// Trait for trivia API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// Fetch all categories as an id to name map
    async fn fetch_categories(&self) -> Result<CategoryMap, ApiError>;

    /// Create a new question.
    /// Returns the created question when the response body describes one.
    async fn create_question(
        &self,
        submission: &QuestionSubmission,
    ) -> Result<Option<CreatedQuestion>, ApiError>;
}
