//! Global keyboard shortcuts.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::widgets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+K: focus the search field.
    FocusSearch,
    /// Escape: close every open modal.
    CloseModals,
}

/// Map a key event to a shortcut, if any.
#[must_use]
pub fn classify(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    if (ctrl || meta) && key == "k" {
        Some(Shortcut::FocusSearch)
    } else if key == "Escape" {
        Some(Shortcut::CloseModals)
    } else {
        None
    }
}

/// Register the document-level keydown listener.
pub fn attach(document: &Document) {
    let on_keydown = {
        let document = document.clone();
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            match classify(&event.key(), event.ctrl_key(), event.meta_key()) {
                Some(Shortcut::FocusSearch) => {
                    event.prevent_default();
                    focus_search(&document);
                }
                Some(Shortcut::CloseModals) => close_open_modals(&document),
                None => {}
            }
        })
    };
    let _ = document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

fn focus_search(document: &Document) {
    if let Ok(Some(search)) = document.query_selector("input[type='search']")
        && let Some(search) = search.dyn_ref::<HtmlElement>()
    {
        let _ = search.focus();
    }
}

fn close_open_modals(document: &Document) {
    let Ok(modals) = document.query_selector_all(".modal.show") else {
        return;
    };
    for idx in 0..modals.length() {
        if let Some(modal) = modals.get(idx).and_then(|n| n.dyn_into::<Element>().ok())
            && let Some(instance) = widgets::Modal::get_instance(&modal)
        {
            instance.hide();
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn ctrl_or_cmd_k_focuses_search() {
        assert_eq!(classify("k", true, false), Some(Shortcut::FocusSearch));
        assert_eq!(classify("k", false, true), Some(Shortcut::FocusSearch));
        assert_eq!(classify("k", false, false), None);
    }

    #[test]
    fn escape_closes_modals_without_modifiers() {
        assert_eq!(classify("Escape", false, false), Some(Shortcut::CloseModals));
        assert_eq!(classify("Escape", true, false), Some(Shortcut::CloseModals));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(classify("j", true, false), None);
        assert_eq!(classify("Enter", false, false), None);
    }
}
