//! Smooth scrolling for in-page anchors.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Intercept clicks on every `a[href^="#"]` and animate the scroll instead
/// of jumping. A href that matches nothing suppresses the click silently.
pub fn attach(document: &Document) {
    let Ok(anchors) = document.query_selector_all("a[href^='#']") else {
        return;
    };
    for idx in 0..anchors.length() {
        let Some(anchor) = anchors.get(idx).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let on_click = {
            let document = document.clone();
            let anchor = anchor.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                match resolve_target(&document, &anchor) {
                    Some(target) => scroll_to(&target),
                    None => log::debug!("scroll target not found"),
                }
            })
        };
        let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

/// Resolve an anchor's target element. The href is read here, at click
/// time, so hrefs rewritten after load point at their current target.
#[must_use]
pub fn resolve_target(document: &Document, anchor: &Element) -> Option<Element> {
    let href = anchor.get_attribute("href")?;
    document.query_selector(&href).ok().flatten()
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
