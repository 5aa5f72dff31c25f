//! Minimal emoji picker for message fields.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom;

/// The fixed set offered by the picker.
pub const EMOJIS: [&str; 10] = ["😊", "😂", "❤️", "👍", "🔥", "✨", "🎉", "💯", "🙌", "👏"];

pub const PICKER_CLASS: &str = "emoji-picker d-flex gap-2 mb-2";

/// Insert a row of emoji buttons immediately before the field with the
/// given id. A missing field makes this a no-op.
pub fn add_picker(document: &Document, field_id: &str) {
    let Some(field) = document.get_element_by_id(field_id) else {
        log::debug!("emoji picker target {field_id} not found");
        return;
    };
    let Ok(container) = document.create_element("div") else {
        return;
    };
    container.set_class_name(PICKER_CLASS);

    for emoji in EMOJIS {
        if let Some(button) = build_button(document, &field, emoji) {
            let _ = container.append_child(&button);
        }
    }

    if let Some(parent) = field.parent_node() {
        let _ = parent.insert_before(&container, Some(&field));
    }
}

fn build_button(document: &Document, field: &Element, emoji: &'static str) -> Option<Element> {
    let button = document.create_element("button").ok()?;
    let _ = button.set_attribute("type", "button");
    button.set_class_name("btn btn-sm btn-outline-secondary");
    button.set_text_content(Some(emoji));

    let on_click = {
        let field = field.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            let current = dom::field_value(&field).unwrap_or_default();
            if dom::set_field_value(&field, &format!("{current}{emoji}")) {
                if let Some(html) = field.dyn_ref::<web_sys::HtmlElement>() {
                    let _ = html.focus();
                }
                // Character counters elsewhere listen for input events.
                dom::dispatch_bubbling(&field, "input");
            }
        })
    };
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
    Some(button)
}

/// Template-facing entry point, kept under its historical name.
#[wasm_bindgen(js_name = addEmojiPicker)]
pub fn add_emoji_picker(field_id: &str) {
    if let Some(document) = dom::document() {
        add_picker(&document, field_id);
    }
}
