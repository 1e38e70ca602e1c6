//! Request decoration and the unauthorized-response policy
//!
//! Both halves are plain functions over values so the client loop stays a
//! thin driver:
//!
//! ```text
//! SENT ─┬─ 2xx/3xx ─────────────────────────────────────── DONE
//!       ├─ 401, not yet retried ── REFRESHING ─┬─ ok ──── RETRIED ── DONE
//!       │                                      └─ error ─ FAILED (session cleared)
//!       ├─ 401, already retried ───────────────────────── DONE (error)
//!       └─ other error ─────────────────────────────────── DONE (error)
//! ```

use super::request::{ApiRequest, ApiResponse, PendingRequest};
use super::ClientError;
use crate::session::TokenStore;

/// What the client does after a request settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Hand the outcome to the caller as-is
    Complete,
    /// Refresh the session token and send the request once more
    Refresh,
}

/// Attach the stored session token to an outgoing request.
///
/// Without a stored token the request passes through untouched.
pub fn decorate(mut request: ApiRequest, store: &dyn TokenStore) -> ApiRequest {
    if let Some(token) = store.token() {
        request.set_bearer(&token);
    }
    request
}

/// Decide whether a settled request earns its single refresh attempt.
pub fn next_step(outcome: &Result<ApiResponse, ClientError>, pending: &PendingRequest) -> Step {
    match outcome {
        Err(err) if err.is_auth_expired() && !pending.attempted_refresh => Step::Refresh,
        _ => Step::Complete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;
    use bytes::Bytes;
    use reqwest::StatusCode;
    use reqwest::header::HeaderMap;

    fn ok_response() -> Result<ApiResponse, ClientError> {
        Ok(ApiResponse::new(StatusCode::OK, HeaderMap::new(), Bytes::new()))
    }

    fn unauthorized() -> Result<ApiResponse, ClientError> {
        Err(ClientError::from_status(StatusCode::UNAUTHORIZED, String::new()))
    }

    #[test]
    fn test_decorate_with_token() {
        let store = MemoryTokenStore::with_token("abc123");
        let request = decorate(ApiRequest::get("/api/image-library"), &store);
        assert_eq!(request.authorization(), Some("Bearer abc123"));
    }

    #[test]
    fn test_decorate_without_token_leaves_request_alone() {
        let store = MemoryTokenStore::new();
        let request = decorate(ApiRequest::get("/api/image-library"), &store);
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_decorate_ignores_empty_token() {
        let store = MemoryTokenStore::with_token("");
        let request = decorate(ApiRequest::get("/api/image-library"), &store);
        assert_eq!(request.authorization(), None);
    }

    #[test]
    fn test_decorate_replaces_stale_header() {
        let store = MemoryTokenStore::with_token("fresh");
        let mut request = ApiRequest::get("/api/image-library");
        request.set_bearer("stale");

        let request = decorate(request, &store);
        assert_eq!(request.authorization(), Some("Bearer fresh"));
    }

    #[test]
    fn test_success_completes() {
        let pending = PendingRequest::new(ApiRequest::get("/"));
        assert_eq!(next_step(&ok_response(), &pending), Step::Complete);
    }

    #[test]
    fn test_first_unauthorized_refreshes() {
        let pending = PendingRequest::new(ApiRequest::get("/"));
        assert_eq!(next_step(&unauthorized(), &pending), Step::Refresh);
    }

    #[test]
    fn test_retried_unauthorized_completes() {
        let mut pending = PendingRequest::new(ApiRequest::get("/"));
        pending.attempted_refresh = true;
        assert_eq!(next_step(&unauthorized(), &pending), Step::Complete);
    }

    #[test]
    fn test_other_errors_complete() {
        let pending = PendingRequest::new(ApiRequest::get("/"));
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let outcome = Err(ClientError::from_status(status, String::new()));
            assert_eq!(next_step(&outcome, &pending), Step::Complete);
        }

        let outcome = Err(ClientError::Configuration("broken".into()));
        assert_eq!(next_step(&outcome, &pending), Step::Complete);
    }
}
