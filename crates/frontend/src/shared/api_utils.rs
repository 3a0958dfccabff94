//! API utilities for the console
//!
//! The society API listens on port 8080 of the host that served the page,
//! under the `/api` prefix.

use contracts::domain::a001_society::SocietyId;
use contracts::shared::api_paths;

/// Society this console administers.
pub const CURRENT_SOCIETY_ID: SocietyId = SocietyId(1);

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:8080/api"
/// - "/api" if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "/api".to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:8080/api", protocol, hostname)
}

/// Build a full API URL from a path in [`api_paths`]
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&api_paths::society(CURRENT_SOCIETY_ID));
/// ```
pub fn api_url(path: &str) -> String {
    api_paths::join(&api_base(), path)
}
