pub mod app;
pub mod layout;
pub mod sections;
pub mod shared;
pub mod usecases;

use contracts::shared::notification::Severity;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Behaviours query the static markup, so wait for it to be parsed.
    match shared::dom::document() {
        Some(doc) if doc.ready_state() == "loading" => {
            shared::dom::listen(&doc, "DOMContentLoaded", |_| {
                leptos::mount::mount_to_body(app::App)
            });
        }
        _ => leptos::mount::mount_to_body(app::App),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Page-script entry to raise a notification. Unknown severities fall back
/// to `info`.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: Option<String>) {
    let severity = severity
        .as_deref()
        .map(Severity::from_str)
        .unwrap_or_default();
    app::notifications().notify(message, severity);
}
