//! Replayable request and response values

use super::ClientError;
use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// An outgoing API call, kept as plain data so it can be re-issued after a
/// token refresh.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Value>,
}

impl ApiRequest {
    /// Create a request for a path relative to the client's base URL
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add an extra header
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Current `Authorization` header, if it is valid text
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
    }

    /// Write `Authorization: Bearer <token>`, replacing any previous value.
    ///
    /// Returns `false` and leaves the request untouched when the token cannot
    /// be carried in a header.
    pub fn set_bearer(&mut self, token: &str) -> bool {
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                self.headers.insert(header::AUTHORIZATION, value);
                true
            }
            Err(_) => {
                warn!("Session token is not a valid header value, sending request without it");
                false
            }
        }
    }
}

/// A request travelling through the refresh-retry flow.
///
/// The retry flag lives here rather than on the request so a replay can never
/// loop: once `attempted_refresh` is set, a second 401 is final.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub request: ApiRequest,
    pub attempted_refresh: bool,
}

impl PendingRequest {
    pub fn new(request: ApiRequest) -> Self {
        Self {
            request,
            attempted_refresh: false,
        }
    }
}

/// A successful (status below 400) response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ApiResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as text, lossily decoded
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_bearer_overwrites() {
        let mut request = ApiRequest::get("/api/things");
        assert_eq!(request.authorization(), None);

        assert!(request.set_bearer("old"));
        assert!(request.set_bearer("new"));
        assert_eq!(request.authorization(), Some("Bearer new"));
        assert_eq!(request.headers().get_all(header::AUTHORIZATION).iter().count(), 1);
    }

    #[test]
    fn test_set_bearer_rejects_control_characters() {
        let mut request = ApiRequest::get("/api/things");
        assert!(!request.set_bearer("bad\ntoken"));
        assert_eq!(request.authorization(), None);
    }

    #[test]
    fn test_json_body() {
        let request = ApiRequest::post("/api/save-proposal")
            .json(&json!({"title": "Bid"}))
            .unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body(), Some(&json!({"title": "Bid"})));
    }

    #[test]
    fn test_pending_request_starts_unflagged() {
        let pending = PendingRequest::new(ApiRequest::get("/"));
        assert!(!pending.attempted_refresh);
    }

    #[test]
    fn test_response_decoding() {
        let response = ApiResponse::new(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(br#"{"token":"t"}"#),
        );
        let value: Value = response.json().unwrap();
        assert_eq!(value["token"], "t");
        assert_eq!(response.text(), r#"{"token":"t"}"#);
    }
}
