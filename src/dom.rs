use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Storage, Window};

/// Retrieve the global `window` object, if the script runs in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or
/// `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Schedule a one-shot callback after `delay_ms` milliseconds.
pub fn set_timeout_ms(window: &Window, f: impl FnOnce() + 'static, delay_ms: i32) {
    let cb = Closure::once(f);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay_ms,
    );
    cb.forget();
}

/// Read the value of a text-bearing form field.
///
/// Returns `None` when the element is neither an `<input>` nor a
/// `<textarea>`.
#[must_use]
pub fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        Some(input.value())
    } else {
        el.dyn_ref::<web_sys::HtmlTextAreaElement>()
            .map(web_sys::HtmlTextAreaElement::value)
    }
}

/// Overwrite the value of a text-bearing form field.
///
/// Returns `false` when the element carries no value property.
pub fn set_field_value(el: &Element, value: &str) -> bool {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
        true
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
        true
    } else {
        false
    }
}

/// Dispatch a bubbling synthetic event of the given type from `el`.
pub fn dispatch_bubbling(el: &Element, event_type: &str) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    if let Ok(event) = web_sys::Event::new_with_event_init_dict(event_type, &init) {
        let _ = el.dispatch_event(&event);
    }
}
