//! Shared UI pieces

mod header;
mod spinner;

pub use header::AppHeader;
pub use spinner::LoadingSpinner;
