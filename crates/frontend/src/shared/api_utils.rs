//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use super::config::config;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

/// Errors of the fetch collaborator. List pages show the message and empty
/// the list; nothing here panics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Failed to fetch: {0}")]
    Network(String),
    #[error("Server error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The backend answered but reported a failure in the body
    #[error("{0}")]
    Backend(String),
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format_base(&protocol, &hostname, config().backend_port)
}

fn format_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/hr/leave-requests");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON document, sending the session cookie.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(&text)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_leave_request::LeaveRequestListResponse;

    #[test]
    fn test_format_base() {
        assert_eq!(format_base("http:", "localhost", 5000), "http://localhost:5000");
        assert_eq!(format_base("https:", "hr.example.com", 8443), "https://hr.example.com:8443");
    }

    #[test]
    fn test_decode_errors_are_typed() {
        let ok: Result<LeaveRequestListResponse, _> = decode(r#"{"success":true,"leave_requests":[]}"#);
        assert!(ok.unwrap().success);

        let err = decode::<LeaveRequestListResponse>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to parse response"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "Server error: 500");
        assert_eq!(
            ApiError::Backend("Authentication required".into()).to_string(),
            "Authentication required"
        );
    }
}
