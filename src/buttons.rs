//! Button loading states.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub const LOADING_LABEL: &str = "<i class=\"fas fa-spinner fa-spin me-2\"></i>Loading...";

const ORIGINAL_TEXT_KEY: &str = "originalText";

/// Swap a button into or out of its loading state.
///
/// Entering stashes the current label in the element's dataset; leaving
/// restores whatever was stashed. Leaving without a prior enter restores an
/// empty label, matching the historical behavior.
pub fn set_loading(button: &HtmlElement, loading: bool) {
    let disabled_target = button.dyn_ref::<web_sys::HtmlButtonElement>();
    if loading {
        if let Some(btn) = disabled_target {
            btn.set_disabled(true);
        }
        let _ = button.dataset().set(ORIGINAL_TEXT_KEY, &button.inner_html());
        button.set_inner_html(LOADING_LABEL);
    } else {
        if let Some(btn) = disabled_target {
            btn.set_disabled(false);
        }
        let original = button.dataset().get(ORIGINAL_TEXT_KEY).unwrap_or_default();
        button.set_inner_html(&original);
    }
}

/// Template-facing entry point, kept under its historical name. `loading`
/// defaults to entering the loading state.
#[wasm_bindgen(js_name = setButtonLoading)]
pub fn set_button_loading(button: &HtmlElement, loading: Option<bool>) {
    set_loading(button, loading.unwrap_or(true));
}
