//! Route table

use yew_router::prelude::*;

/// Application routes.
///
/// `/` has no view of its own and redirects to the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/upload")]
    Upload,
    #[at("/editor")]
    Editor,
}

impl Route {
    /// Whether the route needs a stored session token
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Upload | Self::Editor)
    }

    /// Stable route name
    pub fn name(self) -> &'static str {
        match self {
            Self::Root | Self::Login => "login",
            Self::Upload => "upload",
            Self::Editor => "editor",
        }
    }
}
