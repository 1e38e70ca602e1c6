//! Quill HTTP client
//!
//! Wraps `reqwest` with session-token injection and a single-shot
//! refresh-and-retry flow for unauthorized responses. The token itself lives
//! behind the [`session::TokenStore`] capability so the same client runs
//! natively (in-memory store) and in the browser (`localStorage`).

#[macro_use]
extern crate tracing;

pub mod client;
pub mod session;

pub use client::{
    ApiClient, ApiClientBuilder, ApiRequest, ApiResponse, ClientConfig, ClientError,
    PendingRequest,
};
pub use session::{MemoryTokenStore, TokenStore};
