//! Client error types

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Error payload returned by the API, e.g. `{"error": "Invalid credentials"}`
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ClientError {
    /// Create error from HTTP status code and the raw response body
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.is_empty() => status.to_string(),
            Err(_) => body,
        };

        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status carried by this error, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::BadRequest(_) => Some(StatusCode::BAD_REQUEST),
            Self::AuthenticationFailed(_) => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::ServerError { status, .. } => StatusCode::from_u16(*status).ok(),
            Self::Request(err) => err.status(),
            Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Whether the server rejected the session token (HTTP 401)
    pub fn is_auth_expired(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_known_codes() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::FORBIDDEN, String::new()),
            ClientError::Forbidden(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, String::new()),
            ClientError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn test_from_status_extracts_error_field() {
        let err = ClientError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"error": "Invalid credentials"}"#.to_string(),
        );
        assert_eq!(err.to_string(), "Authentication failed: Invalid credentials");
    }

    #[test]
    fn test_from_status_keeps_plain_body() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, "no such thing".to_string());
        assert_eq!(err.to_string(), "Resource not found: no such thing");
    }

    #[test]
    fn test_is_auth_expired_only_for_401() {
        assert!(ClientError::AuthenticationFailed("x".into()).is_auth_expired());
        assert!(!ClientError::Forbidden("x".into()).is_auth_expired());
        assert!(
            !ClientError::ServerError {
                status: 500,
                message: "x".into()
            }
            .is_auth_expired()
        );
        assert!(!ClientError::Configuration("x".into()).is_auth_expired());
    }
}
