use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a call to the shop backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure, no HTTP status.
    #[error("Network error: {0}")]
    Network(String),
    /// 401: the session cookie is missing or expired.
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    /// Other 4xx, typically a rejected form.
    #[error("{message}")]
    Validation { status: u16, message: String },
    #[error("{message}")]
    Server { status: u16, message: String },
    /// 2xx whose body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Error envelope the backend uses: `{ "message": .. }` or `{ "error": .. }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl ApiError {
    /// Classifies a non-2xx response. The body message wins over `fallback`.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.text().map(str::to_string))
            .unwrap_or_else(|| fallback.to_string());

        match status {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            400..=499 => ApiError::Validation { status, message },
            _ => ApiError::Server { status, message },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Validation { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// The session is gone and the user has to log in again.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_wins() {
        let err = ApiError::from_response(400, r#"{"message":"Name is required"}"#, "Failed");
        assert_eq!(
            err,
            ApiError::Validation {
                status: 400,
                message: "Name is required".into()
            }
        );
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn error_field_is_second_choice() {
        let err = ApiError::from_response(500, r#"{"error":"db down"}"#, "Failed");
        assert_eq!(err.to_string(), "db down");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn fallback_when_body_is_not_json() {
        let err = ApiError::from_response(404, "<html>", "Failed to fetch order");
        assert_eq!(err, ApiError::NotFound("Failed to fetch order".into()));
    }

    #[test]
    fn unauthorized_is_detected() {
        let err = ApiError::from_response(401, r#"{"message":""}"#, "Not authorized");
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Not authorized");
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
