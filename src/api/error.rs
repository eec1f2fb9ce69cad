//! Error handling for the analytics API module

use crate::models::ValidationErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to decode a JSON payload from the server
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => Self::message_from_body(status, &body),
            Err(_) => "Failed to read response text".to_string(),
        };

        ApiError::Http { status, message }
    }

    /// Validation failures are reduced to their field messages; other bodies are kept as is.
    fn message_from_body(status: u16, body: &str) -> String {
        if status == 422 {
            if let Ok(response) = serde_json::from_str::<ValidationErrorResponse>(body) {
                return response.summary();
            }
        }
        body.to_string()
    }

    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_server_replies() {
        let http = ApiError::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(http.status(), Some(503));

        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        assert_eq!(ApiError::Decode(decode).status(), None);
    }

    #[test]
    fn test_validation_body_becomes_field_messages() {
        let body = r#"{"detail":[{"loc":["body","session_end"],"msg":"field required","type":"value_error.missing"}]}"#;
        assert_eq!(
            ApiError::message_from_body(422, body),
            "session_end: field required"
        );
        assert_eq!(ApiError::message_from_body(500, "boom"), "boom");
        assert_eq!(ApiError::message_from_body(422, "not json"), "not json");
    }
}
