//! Trivia API data types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category id to display name, ordered by id
pub type CategoryMap = BTreeMap<u32, String>;

/// A single trivia category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Iterate a category map as `Category` values in id order
pub fn categories_of(map: &CategoryMap) -> impl Iterator<Item = Category> + '_ {
    map.iter().map(|(id, name)| Category {
        id: *id,
        name: name.clone(),
    })
}

/// Response body of `GET /categories`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

/// Request body of `POST /questions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSubmission {
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: u32,
}

/// Question as echoed back by the backend after creation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedQuestion {
    pub id: u32,
    pub question: String,
    pub category: u32,
    pub difficulty: u8,
}
