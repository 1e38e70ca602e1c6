//! Application root and startup wiring

use crate::config::AppConfig;
use crate::guard::{self, GuardDecision};
use crate::routes::Route;
use crate::storage::LocalTokenStore;
use crate::views::{EditorView, LoginView, UploadView};
use quill_http::{ApiClient, ClientError};
use std::sync::Arc;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yew_router::prelude::*;

/// Build the one API client the app shares.
///
/// The token lives in `localStorage`; when a refresh fails the browser is
/// sent to the login page.
pub fn build_client() -> Result<ApiClient, ClientError> {
    ApiClient::builder()
        .config(AppConfig::client_config())
        .token_store(Arc::new(LocalTokenStore::new()))
        .on_session_expired(|| {
            BrowserHistory::new().push(Route::Login.to_path());
        })
        .build()
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub client: ApiClient,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let render = {
        let client = props.client.clone();
        Callback::from(move |route: Route| switch(route, &client))
    };

    html! {
        <ContextProvider<ApiClient> context={props.client.clone()}>
            <BrowserRouter>
                <Switch<Route> render={render} />
            </BrowserRouter>
        </ContextProvider<ApiClient>>
    }
}

/// Run the guard for `route`, then render its view
fn switch(route: Route, client: &ApiClient) -> Html {
    match guard::check(route, client.store()) {
        GuardDecision::Redirect(target) => {
            debug!(
                from = route.name(),
                to = target.name(),
                "Not authenticated, redirecting"
            );
            html! { <Redirect<Route> to={target} /> }
        }
        GuardDecision::Proceed => match route {
            Route::Root => html! { <Redirect<Route> to={Route::Login} /> },
            Route::Login => html! { <LoginView /> },
            Route::Upload => html! { <UploadView /> },
            Route::Editor => html! { <EditorView /> },
        },
    }
}
