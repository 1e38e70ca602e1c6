//! Navigation guard

use crate::routes::Route;
use quill_http::TokenStore;

/// Outcome of a route transition check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested route
    Proceed,
    /// Go somewhere else instead
    Redirect(Route),
}

/// Check a transition to `route` against the stored session token.
///
/// Protected routes without a token redirect to the login page; everything
/// else proceeds.
pub fn check(route: Route, store: &dyn TokenStore) -> GuardDecision {
    if route.requires_auth() && !store.is_authenticated() {
        GuardDecision::Redirect(Route::Login)
    } else {
        GuardDecision::Proceed
    }
}
