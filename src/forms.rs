//! Inline validation marks for form fields.
//!
//! Every `input`/`textarea` inside the forms present at load gets blur and
//! input listeners. The marking is purely visual and never blocks
//! submission; fields never blurred stay unmarked.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

use crate::dom;

pub const INVALID_CLASS: &str = "is-invalid";
pub const VALID_CLASS: &str = "is-valid";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMark {
    Invalid,
    Valid,
}

/// Marking decision when focus leaves a field.
#[must_use]
pub fn mark_on_blur(required: bool, value: &str) -> FieldMark {
    if required && value.trim().is_empty() {
        FieldMark::Invalid
    } else {
        FieldMark::Valid
    }
}

/// Marking decision while typing. Only an invalid field that regained a
/// non-whitespace value flips; everything else is left alone.
#[must_use]
pub fn mark_on_input(currently_invalid: bool, value: &str) -> Option<FieldMark> {
    (currently_invalid && !value.trim().is_empty()).then_some(FieldMark::Valid)
}

fn apply_mark(el: &Element, mark: FieldMark) {
    let classes = el.class_list();
    match mark {
        FieldMark::Invalid => {
            let _ = classes.add_1(INVALID_CLASS);
        }
        FieldMark::Valid => {
            let _ = classes.remove_1(INVALID_CLASS);
            let _ = classes.add_1(VALID_CLASS);
        }
    }
}

fn wire_field(field: Element) {
    let on_blur = {
        let field = field.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            let value = dom::field_value(&field).unwrap_or_default();
            let mark = mark_on_blur(field.has_attribute("required"), &value);
            apply_mark(&field, mark);
        })
    };
    let _ = field.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
    on_blur.forget();

    let on_input = {
        let field = field.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            let value = dom::field_value(&field).unwrap_or_default();
            let invalid = field.class_list().contains(INVALID_CLASS);
            if let Some(mark) = mark_on_input(invalid, &value) {
                apply_mark(&field, mark);
            }
        })
    };
    let _ = field.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
    on_input.forget();
}

/// Attach validation listeners to every field of every form on the page.
pub fn attach(document: &Document) {
    let Ok(forms) = document.query_selector_all("form") else {
        return;
    };
    for form_idx in 0..forms.length() {
        let Some(form) = forms.get(form_idx).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Ok(fields) = form.query_selector_all("input, textarea") else {
            continue;
        };
        for field_idx in 0..fields.length() {
            if let Some(field) = fields
                .get(field_idx)
                .and_then(|n| n.dyn_into::<Element>().ok())
            {
                wire_field(field);
            }
        }
    }
}
