//! HTTP client for the trivia backend
//!
//! Talks JSON over plain HTTP to the two endpoints the question form needs:
//! the category listing and question creation.

use super::traits::ApiClientTrait;
use super::{wrap_api_url, ApiError};
use crate::state::{CategoriesResponse, CategoryMap, CreatedQuestion, QuestionSubmission};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Client for communicating with the trivia backend
#[derive(Clone)]
pub struct ApiClient {
    /// The underlying HTTP client, with a cookie store for credentials
    client: Client,
    /// Base URL every endpoint path is appended to
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// Requests have no timeout unless one is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn fetch_categories(&self) -> Result<CategoryMap, ApiError> {
        let url = wrap_api_url(&self.base_url, "/categories");
        tracing::debug!(%url, "Fetching categories");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body: CategoriesResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(body.categories)
    }

    async fn create_question(
        &self,
        submission: &QuestionSubmission,
    ) -> Result<Option<CreatedQuestion>, ApiError> {
        let url = wrap_api_url(&self.base_url, "/questions");
        tracing::debug!(%url, "Creating question");

        let response = self.client.post(&url).json(submission).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        // Only the status matters; the echoed question is informational
        let created = match response.bytes().await {
            Ok(body) => serde_json::from_slice::<CreatedQuestion>(&body).ok(),
            Err(e) => {
                tracing::debug!("Failed to read create response body: {e}");
                None
            }
        };

        Ok(created)
    }
}
