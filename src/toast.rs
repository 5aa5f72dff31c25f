//! Transient toast notifications.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::{dom, widgets};

/// Severity of a toast, keyed to the icon shown in its header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// Parse a severity tag. Unknown tags yield `None`, which shows the
    /// toast without any header icon.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Font Awesome class string for the header icon.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle text-success me-2",
            Self::Error => "fas fa-exclamation-circle text-danger me-2",
            Self::Info => "fas fa-info-circle text-info me-2",
        }
    }
}

/// One-time binding of the shared `#liveToast` element and its parts.
#[derive(Clone)]
pub struct ToastView {
    root: Element,
    body: Element,
    icon: Element,
}

impl ToastView {
    /// Bind against the toast markup the server rendered, if present.
    #[must_use]
    pub fn bind(document: &Document) -> Option<Self> {
        let root = document.get_element_by_id("liveToast")?;
        let body = root.query_selector(".toast-body").ok().flatten()?;
        let icon = root.query_selector(".toast-header i").ok().flatten()?;
        Some(Self { root, body, icon })
    }

    /// Write the message text and icon class without triggering the widget.
    pub fn set_message(&self, message: &str, severity: Option<Severity>) {
        self.body.set_text_content(Some(message));
        self.icon
            .set_class_name(severity.map_or("", Severity::icon_class));
    }

    /// Update the toast contents and run the Bootstrap show animation.
    pub fn show(&self, message: &str, severity: Option<Severity>) {
        self.set_message(message, severity);
        widgets::Toast::new(&self.root).show();
    }
}

/// Present a toast if the page carries the toast markup.
pub fn present(message: &str, severity: Severity) {
    if let Some(document) = dom::document()
        && let Some(view) = ToastView::bind(&document)
    {
        view.show(message, Some(severity));
    }
}

/// Template-facing entry point, kept under its historical name.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, severity: Option<String>) {
    let severity = match severity {
        None => Some(Severity::Success),
        Some(tag) => Severity::parse(&tag),
    };
    if let Some(document) = dom::document()
        && let Some(view) = ToastView::bind(&document)
    {
        view.show(message, severity);
    }
}
