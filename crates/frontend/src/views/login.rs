//! Login page

use crate::components::LoadingSpinner;
use crate::routes::Route;
use quill_http::ApiClient;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let client = use_context::<ApiClient>();
    let navigator = use_navigator();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(client) = client.clone() else {
                error.set(Some("API client is not available".to_string()));
                return;
            };

            let username = (*username).clone();
            let password = (*password).clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            error.set(None);
            submitting.set(true);
            spawn_local(async move {
                match client.login(&username, &password).await {
                    Ok(_) => {
                        submitting.set(false);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Upload);
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "Login failed");
                        submitting.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let can_submit = !username.is_empty() && !password.is_empty() && !*submitting;

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {"Quill"}
                    </h1>
                    <p class="text-gray-600 dark:text-gray-400 mt-2">{"Sign in to write your proposal"}</p>
                </div>
                <form
                    class="bg-white dark:bg-gray-800 rounded-2xl shadow-xl p-8 space-y-4"
                    onsubmit={on_submit}
                >
                    if let Some(message) = &*error {
                        <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg p-3">
                            <p class="text-red-700 dark:text-red-300 text-sm">{message}</p>
                        </div>
                    }
                    <input
                        type="text"
                        autocomplete="username"
                        class="w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 focus:outline-none focus:border-blue-500"
                        placeholder="Username"
                        value={(*username).clone()}
                        oninput={on_username_input}
                    />
                    <input
                        type="password"
                        autocomplete="current-password"
                        class="w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 focus:outline-none focus:border-blue-500"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                    if *submitting {
                        <LoadingSpinner text={Some("Signing in...".to_string())} />
                    } else {
                        <button
                            type="submit"
                            class="w-full px-4 py-3 bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white rounded-lg font-medium transition-all disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled={!can_submit}
                        >
                            {"Sign in"}
                        </button>
                    }
                </form>
            </div>
        </div>
    }
}
