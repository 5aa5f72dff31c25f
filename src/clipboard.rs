//! Clipboard copy with a legacy fallback.
//!
//! The async clipboard API is preferred; rejection or absence routes through
//! the hidden-textarea `execCommand("copy")` path. Either way the user gets
//! exactly one toast.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, Document, HtmlTextAreaElement};

use crate::dom;
use crate::toast::{self, Severity};

const COPIED_MESSAGE: &str = "Copied to clipboard!";
const FAILED_MESSAGE: &str = "Failed to copy";

#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("document body unavailable")]
    NoBody,
    #[error("copy command rejected")]
    CommandRejected,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

fn clipboard_api(document: &Document) -> Option<Clipboard> {
    let navigator = document.default_view()?.navigator();
    let clipboard = navigator.clipboard();
    if clipboard.is_undefined() {
        None
    } else {
        Some(clipboard)
    }
}

/// Copy `text` through the platform clipboard, falling back to the manual
/// method, and toast the outcome.
pub fn copy_text(text: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    match clipboard_api(&document) {
        Some(clipboard) => {
            let text = text.to_string();
            wasm_bindgen_futures::spawn_local(async move {
                match JsFuture::from(clipboard.write_text(&text)).await {
                    Ok(_) => toast::present(COPIED_MESSAGE, Severity::Success),
                    Err(err) => {
                        log::debug!(
                            "clipboard write rejected: {}",
                            dom::js_error_message(&err)
                        );
                        copy_via_fallback(&document, &text);
                    }
                }
            });
        }
        None => copy_via_fallback(&document, text),
    }
}

fn copy_via_fallback(document: &Document, text: &str) {
    match fallback_copy(document, text) {
        Ok(()) => toast::present(COPIED_MESSAGE, Severity::Success),
        Err(err) => {
            log::debug!("fallback copy failed: {err}");
            toast::present(FAILED_MESSAGE, Severity::Error);
        }
    }
}

/// Manual copy: off-screen textarea, select, `execCommand("copy")`.
///
/// The temporary field is removed regardless of the command outcome.
///
/// # Errors
/// Returns an error when the copy command is rejected or the temporary
/// field cannot be created.
pub fn fallback_copy(document: &Document, text: &str) -> Result<(), CopyError> {
    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|e| CopyError::Dom(dom::js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| CopyError::Dom("textarea cast failed".to_string()))?;
    textarea.set_value(text);
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-999999px");

    let body = document.body().ok_or(CopyError::NoBody)?;
    body.append_child(&textarea)
        .map_err(|e| CopyError::Dom(dom::js_error_message(&e)))?;
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);

    textarea.remove();
    if copied {
        Ok(())
    } else {
        Err(CopyError::CommandRejected)
    }
}

/// Template-facing entry point, kept under its historical name.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: &str) {
    copy_text(text);
}
