use quill_frontend::{App, AppProps, build_client, logging};

fn main() {
    logging::init();

    match build_client() {
        Ok(client) => {
            yew::Renderer::<App>::with_props(AppProps { client }).render();
        }
        Err(err) => tracing::error!(error = %err, "Failed to build API client"),
    }
}
