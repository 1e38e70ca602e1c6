//! Quill browser front end
//!
//! Routes with authentication metadata, a navigation guard and the views,
//! all sharing one [`quill_http::ApiClient`] built at startup.

#[macro_use]
extern crate tracing;

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod logging;
pub mod routes;
pub mod storage;
pub mod views;

pub use app::{App, AppProps, build_client};
pub use config::AppConfig;
pub use routes::Route;
