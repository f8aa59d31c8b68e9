//! API URL resolution

/// Join the configured API base URL with an endpoint path
pub fn wrap_api_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
