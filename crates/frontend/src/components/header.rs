//! Top bar shown on protected pages

use crate::routes::Route;
use quill_http::ApiClient;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppHeaderProps {
    /// Route of the page rendering the header, highlighted in the nav
    pub current: Route,
}

#[function_component(AppHeader)]
pub fn app_header(props: &AppHeaderProps) -> Html {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_| {
        if let Some(client) = &client {
            client.logout();
        }
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let tab = |route: Route, label: &'static str| {
        let class = if props.current == route {
            "px-4 py-2 text-sm font-medium text-blue-600 dark:text-blue-400 border-b-2 border-blue-600 dark:border-blue-400"
        } else {
            "px-4 py-2 text-sm font-medium text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100"
        };
        html! {
            <Link<Route> to={route} classes={classes!(class)}>{label}</Link<Route>>
        }
    };

    html! {
        <div class="bg-gray-50 dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="p-4 flex justify-between items-center">
                <div class="flex items-center gap-6">
                    <h1 class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {"Quill"}
                    </h1>
                    <nav class="flex">
                        { tab(Route::Upload, "Upload") }
                        { tab(Route::Editor, "Editor") }
                    </nav>
                </div>
                <button
                    onclick={on_logout}
                    class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 rounded-lg transition-colors"
                >
                    {"Logout"}
                </button>
            </div>
        </div>
    }
}
