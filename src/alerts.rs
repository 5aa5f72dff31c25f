//! Auto-dismissal of alert banners.
//!
//! Alerts present at load fade out after a fixed delay and are removed.
//! Banners inserted later are not covered.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::dom;

pub const DISMISS_DELAY_MS: i32 = 5000;
pub const FADE_MS: i32 = 500;

/// Schedule every `.alert` on the page for fade-out and removal.
pub fn attach(document: &Document, window: &Window) {
    let Ok(alerts) = document.query_selector_all(".alert") else {
        return;
    };
    for idx in 0..alerts.length() {
        let Some(alert) = alerts
            .get(idx)
            .and_then(|n| n.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        schedule_dismiss(window, alert);
    }
}

fn schedule_dismiss(window: &Window, alert: HtmlElement) {
    let fade_window = window.clone();
    dom::set_timeout_ms(
        window,
        move || {
            let style = alert.style();
            let _ = style.set_property("transition", "opacity 0.5s ease");
            let _ = style.set_property("opacity", "0");
            dom::set_timeout_ms(&fade_window, move || alert.remove(), FADE_MS);
        },
        DISMISS_DELAY_MS,
    );
}
