//! Client configuration

use super::ClientError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default API origin
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Endpoint exchanging the session cookie for a fresh token
pub const DEFAULT_REFRESH_PATH: &str = "/api/refresh";

/// Endpoint exchanging credentials for a token
pub const DEFAULT_LOGIN_PATH: &str = "/api/login";

const DEFAULT_USER_AGENT: &str = "quill-client/0.1.0";

/// Settings fixed when the client is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API origin, without trailing slash
    pub base_url: String,
    pub refresh_path: String,
    pub login_path: String,
    /// Send cookies with cross-origin requests
    pub with_credentials: bool,
    /// Request timeout in seconds (ignored on wasm)
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            with_credentials: true,
            timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another origin
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Check the configuration and normalize the base URL
    pub fn validated(mut self) -> Result<Self, ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is required".into()));
        }

        Url::parse(&self.base_url).map_err(|e| {
            ClientError::Configuration(format!("invalid base_url {:?}: {e}", self.base_url))
        })?;

        for (name, path) in [
            ("refresh_path", &self.refresh_path),
            ("login_path", &self.login_path),
        ] {
            if !path.starts_with('/') {
                return Err(ClientError::Configuration(format!(
                    "{name} must start with '/', got {path:?}"
                )));
            }
        }

        self.base_url = self.base_url.trim_end_matches('/').to_string();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.refresh_path, "/api/refresh");
        assert!(config.with_credentials);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::with_base_url("http://example.com/")
            .validated()
            .unwrap();
        assert_eq!(config.base_url, "http://example.com");
    }

    #[test]
    fn test_rejects_empty_and_relative_urls() {
        assert!(matches!(
            ClientConfig::with_base_url("").validated(),
            Err(ClientError::Configuration(_))
        ));
        assert!(matches!(
            ClientConfig::with_base_url("/api").validated(),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_relative_endpoint_paths() {
        let config = ClientConfig {
            refresh_path: "api/refresh".into(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            config.validated(),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "https://api.example.com"}"#).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.login_path, "/api/login");
        assert_eq!(config.timeout_secs, None);
    }
}
