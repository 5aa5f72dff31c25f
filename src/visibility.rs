//! Page-visibility logging.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

#[must_use]
pub fn visibility_message(hidden: bool) -> &'static str {
    if hidden { "Page hidden" } else { "Page visible" }
}

/// Log every visibility transition of the tab.
pub fn attach(document: &Document) {
    let on_change = {
        let document = document.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            log::info!("{}", visibility_message(document.hidden()));
        })
    };
    let _ = document
        .add_event_listener_with_callback("visibilitychange", on_change.as_ref().unchecked_ref());
    on_change.forget();
}
