#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod context;
mod dialog;
mod forms;
mod hooks;

use components::ProjectSettings;
use context::DialogContext;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting confirmkit");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let dialog = use_context_provider(DialogContext::init);

    // Forms exist once the first render is mounted
    use_effect(move || dialog.bind_forms());

    rsx! {
        ProjectSettings {}
    }
}
