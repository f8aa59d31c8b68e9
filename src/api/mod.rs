//! HTTP client module for the trivia backend

mod client;
mod error;
mod traits;
mod urls;

pub use client::ApiClient;
pub use error::ApiError;
pub use traits::ApiClientTrait;
pub use urls::wrap_api_url;

#[cfg(test)]
pub use traits::MockApiClientTrait;
