//! Analytics placeholder.
//!
//! Events land on the console through the logging facade; a real tracker
//! can hook in here later without touching call sites.

use wasm_bindgen::prelude::*;

/// Record a UI event. Kept under its historical name for the templates.
#[wasm_bindgen(js_name = trackEvent)]
pub fn track_event(category: &str, action: &str, label: Option<String>) {
    log::info!(
        "Event: {category} {action} {}",
        label.unwrap_or_default()
    );
}
