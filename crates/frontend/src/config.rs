//! Frontend configuration

use quill_http::ClientConfig;

/// Application-wide settings fixed at build time
pub struct AppConfig;

impl AppConfig {
    /// Origin of the Quill API
    pub const API_BASE_URL: &'static str = "http://localhost:5000";

    /// localStorage key holding the session token
    pub const TOKEN_KEY: &'static str = "token";

    /// Client settings derived from the constants above
    pub fn client_config() -> ClientConfig {
        ClientConfig::with_base_url(Self::API_BASE_URL)
    }
}
