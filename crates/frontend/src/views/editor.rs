use crate::components::AppHeader;
use crate::routes::Route;
use yew::prelude::*;

#[function_component(EditorView)]
pub fn editor_view() -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-gray-900">
            <AppHeader current={Route::Editor} />
            <main class="flex-1 p-8 max-w-5xl mx-auto w-full">
                <h2 class="text-2xl font-semibold text-gray-900 dark:text-gray-100 mb-2">
                    {"Proposal editor"}
                </h2>
                <p class="text-gray-600 dark:text-gray-400">
                    {"Generated sections appear here for review and editing."}
                </p>
            </main>
        </div>
    }
}
