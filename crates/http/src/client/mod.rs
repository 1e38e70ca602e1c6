//! Quill API client

pub mod config;
pub mod error;
pub mod interceptor;
pub mod request;

pub use config::ClientConfig;
pub use error::ClientError;
pub use request::{ApiRequest, ApiResponse, PendingRequest};

use crate::session::{MemoryTokenStore, TokenStore};
use interceptor::Step;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Callback run after a failed refresh has cleared the session
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Body of `POST /api/login`
#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Body returned by the login and refresh endpoints
#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

/// API client shared by every view.
///
/// Built once at startup and handed out by clone; all clones share the same
/// connection pool, configuration and token store.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: Client,
    config: ClientConfig,
    store: Arc<dyn TokenStore>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ApiClient {
    /// Create a client with default settings against the given origin
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The token store this client reads and writes
    pub fn store(&self) -> &dyn TokenStore {
        self.inner.store.as_ref()
    }

    /// Whether a session token is currently stored
    pub fn is_authenticated(&self) -> bool {
        self.store().is_authenticated()
    }

    /// Send a request with the stored token attached.
    ///
    /// A 401 triggers one token refresh followed by one replay of the
    /// request; the replay's outcome is returned. If the refresh fails the
    /// session is cleared, the session-expired hook runs and the refresh
    /// error is returned instead of the original 401.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let mut pending = PendingRequest::new(request);

        loop {
            let outgoing = interceptor::decorate(pending.request.clone(), self.store());
            let outcome = self.transmit(&outgoing).await;

            match interceptor::next_step(&outcome, &pending) {
                Step::Complete => {
                    if pending.attempted_refresh {
                        debug!(
                            method = %pending.request.method(),
                            path = pending.request.path(),
                            ok = outcome.is_ok(),
                            "Replayed request settled"
                        );
                    }
                    return outcome;
                }
                Step::Refresh => {
                    debug!(
                        method = %pending.request.method(),
                        path = pending.request.path(),
                        "Unauthorized, refreshing session token"
                    );
                    pending.attempted_refresh = true;
                    let token = self.refresh_session().await?;
                    pending.request.set_bearer(&token);
                }
            }
        }
    }

    /// Send a request and decode the JSON response
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ClientError> {
        self.send(request).await?.json()
    }

    /// Exchange the session cookie for a new token and store it.
    ///
    /// This call never goes through the refresh-retry flow itself.
    pub async fn refresh_token(&self) -> Result<String, ClientError> {
        let request = interceptor::decorate(
            ApiRequest::post(self.inner.config.refresh_path.clone()),
            self.store(),
        );
        let response = self.transmit(&request).await?;
        let TokenResponse { token } = response.json()?;
        self.store().save(&token);
        debug!("Session token refreshed");
        Ok(token)
    }

    /// Log in with username and password, storing the returned token.
    ///
    /// A 401 here means bad credentials and is returned as-is, never
    /// refreshed.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        let request = interceptor::decorate(
            ApiRequest::post(self.inner.config.login_path.clone())
                .json(&LoginRequest { username, password })?,
            self.store(),
        );
        let response = self.transmit(&request).await?;
        let TokenResponse { token } = response.json()?;
        self.store().save(&token);
        info!(username, "Logged in");
        Ok(token)
    }

    /// Forget the stored session token
    pub fn logout(&self) {
        self.store().remove();
        info!("Logged out");
    }

    async fn refresh_session(&self) -> Result<String, ClientError> {
        match self.refresh_token().await {
            Ok(token) => Ok(token),
            Err(err) => {
                warn!(error = %err, "Token refresh failed, ending session");
                self.store().remove();
                if let Some(hook) = &self.inner.on_session_expired {
                    hook();
                }
                Err(err)
            }
        }
    }

    /// Put a request on the wire and map error statuses to `ClientError`
    async fn transmit(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}", self.inner.config.base_url, request.path());
        let mut builder = self
            .inner
            .http
            .request(request.method().clone(), url)
            .headers(request.headers().clone());

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        #[cfg(target_arch = "wasm32")]
        if self.inner.config.with_credentials {
            builder = builder.fetch_credentials_include();
        }

        let response = builder.send().await?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status, body));
        }

        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(ApiResponse::new(status, headers, body))
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    config: ClientConfig,
    store: Option<Arc<dyn TokenStore>>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl ApiClientBuilder {
    /// Replace the whole configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set where the session token is kept (in-memory by default)
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Run `hook` whenever a failed refresh ends the session
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let config = self.config.validated()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
        let mut client_builder = ClientBuilder::new()
            .default_headers(default_headers)
            .user_agent(config.user_agent.clone());

        #[cfg(not(target_arch = "wasm32"))]
        {
            if config.with_credentials {
                client_builder = client_builder.cookie_store(true);
            }
            if let Some(secs) = config.timeout_secs {
                client_builder = client_builder.timeout(Duration::from_secs(secs));
            }
        }

        let http = client_builder.build()?;
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryTokenStore::new()));

        Ok(ApiClient {
            inner: Arc::new(Inner {
                http,
                config,
                store,
                on_session_expired: self.on_session_expired,
            }),
        })
    }
}
