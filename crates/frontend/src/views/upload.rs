//! Tender upload page

use crate::components::AppHeader;
use crate::routes::Route;
use yew::prelude::*;

#[function_component(UploadView)]
pub fn upload_view() -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-gray-900">
            <AppHeader current={Route::Upload} />
            <main class="flex-1 p-8 max-w-3xl mx-auto w-full">
                <h2 class="text-2xl font-semibold text-gray-900 dark:text-gray-100 mb-2">
                    {"Upload tender document"}
                </h2>
                <p class="text-gray-600 dark:text-gray-400">
                    {"PDF or Word documents up to 16 MB are parsed into a proposal outline."}
                </p>
            </main>
        </div>
    }
}
