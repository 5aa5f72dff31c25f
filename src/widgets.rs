//! Bindings to the Bootstrap widgets the server pages already load.
//!
//! `Toast` and `Modal` are treated as opaque collaborators; only the
//! lifecycle calls this crate needs are imported.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// Bootstrap toast widget bound to a toast container element.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    pub fn new(element: &Element) -> Toast;

    #[wasm_bindgen(method)]
    pub fn show(this: &Toast);

    /// Bootstrap modal dialog widget.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Modal;

    /// Look up the widget instance already attached to a modal element.
    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getInstance)]
    pub fn get_instance(element: &Element) -> Option<Modal>;

    #[wasm_bindgen(method)]
    pub fn hide(this: &Modal);
}
