use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

fn main() {
    dotenvy::dotenv().ok();
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ui::load_config();
        info!(
            url = %config.api.base_url,
            namespace = %config.storage.namespace,
            "Starting desktop client"
        );
        config
    });

    rsx! {
        document::Title { "StickyNotes" }
        document::Link { rel: "stylesheet", href: ui::NOTES_CSS }
        ui::ShellProvider {
            config,
            ui::views::NotesView {}
        }
    }
}
