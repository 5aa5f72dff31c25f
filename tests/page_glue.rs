//! Browser-side behavior tests for the page glue.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

use anonmsg_web::storage::PrefStore;
use anonmsg_web::theme::ThemePref;
use anonmsg_web::{buttons, clipboard, dom, emoji, forms, page, scroll, toast};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::document().expect("browser document")
}

fn body() -> HtmlElement {
    document().body().expect("document body")
}

/// Mount fixture markup inside a fresh container and return it.
fn mount(id: &str, html: &str) -> Element {
    let doc = document();
    if let Some(stale) = doc.get_element_by_id(id) {
        stale.remove();
    }
    let container = doc.create_element("div").expect("create container");
    container.set_id(id);
    container.set_inner_html(html);
    body().append_child(&container).expect("append container");
    container
}

#[wasm_bindgen_test]
fn toast_view_binds_and_writes_message() {
    mount(
        "toast-fixture",
        "<div id=\"liveToast\"><div class=\"toast-header\"><i></i></div>\
         <div class=\"toast-body\"></div></div>",
    );
    let doc = document();
    let view = toast::ToastView::bind(&doc).expect("toast markup binds");
    view.set_message("Copied!", Some(toast::Severity::Error));

    let body_el = doc.query_selector(".toast-body").unwrap().unwrap();
    assert_eq!(body_el.text_content().unwrap_or_default(), "Copied!");
    let icon = doc.query_selector(".toast-header i").unwrap().unwrap();
    assert!(icon.class_name().contains("fa-exclamation-circle"));

    // Unknown severity clears the icon class entirely.
    view.set_message("plain", None);
    assert_eq!(icon.class_name(), "");
    doc.get_element_by_id("toast-fixture").unwrap().remove();
}

#[wasm_bindgen_test]
fn required_field_marks_on_blur_and_recovers_on_input() {
    mount(
        "form-fixture",
        "<form><input id=\"nick\" type=\"text\" required></form>",
    );
    let doc = document();
    forms::attach(&doc);

    let field = doc.get_element_by_id("nick").expect("fixture field");
    field
        .dispatch_event(&web_sys::Event::new("blur").unwrap())
        .unwrap();
    assert!(field.class_list().contains("is-invalid"));

    assert!(dom::set_field_value(&field, "ada"));
    field
        .dispatch_event(&web_sys::Event::new("input").unwrap())
        .unwrap();
    assert!(!field.class_list().contains("is-invalid"));
    assert!(field.class_list().contains("is-valid"));
    doc.get_element_by_id("form-fixture").unwrap().remove();
}

#[wasm_bindgen_test]
fn emoji_picker_inserts_row_and_appends_on_click() {
    mount(
        "emoji-fixture",
        "<div><textarea id=\"message\">hi</textarea></div>",
    );
    let doc = document();
    emoji::add_picker(&doc, "message");

    let picker = doc
        .query_selector("#emoji-fixture .emoji-picker")
        .unwrap()
        .expect("picker row inserted before the field");
    assert_eq!(picker.query_selector_all("button").unwrap().length(), 10);

    let first = picker
        .query_selector("button")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    first.click();

    let field = doc.get_element_by_id("message").unwrap();
    let value = dom::field_value(&field).unwrap_or_default();
    assert!(value.starts_with("hi"));
    assert!(value.len() > 2, "emoji appended to the value");
    doc.get_element_by_id("emoji-fixture").unwrap().remove();
}

#[wasm_bindgen_test]
fn emoji_picker_is_noop_without_target() {
    let doc = document();
    emoji::add_picker(&doc, "no-such-field");
    assert!(doc.query_selector(".emoji-picker").unwrap().is_none());
}

#[wasm_bindgen_test]
fn loading_toggle_restores_original_label() {
    mount(
        "button-fixture",
        "<button id=\"send\"><i class=\"fas fa-paper-plane\"></i>Send</button>",
    );
    let doc = document();
    let button = doc
        .get_element_by_id("send")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    let original = button.inner_html();

    buttons::set_loading(&button, true);
    assert!(button.inner_html().contains("Loading..."));
    let as_button = button
        .dyn_ref::<web_sys::HtmlButtonElement>()
        .expect("fixture is a button");
    assert!(as_button.disabled());

    buttons::set_loading(&button, false);
    assert_eq!(button.inner_html(), original);
    assert!(!as_button.disabled());
    doc.get_element_by_id("button-fixture").unwrap().remove();
}

#[wasm_bindgen_test]
fn fallback_copy_leaves_no_temporary_field_behind() {
    let doc = document();
    let before = doc.query_selector_all("textarea").unwrap().length();
    // Headless browsers may accept or reject execCommand; either way the
    // temporary textarea must be gone.
    let _ = clipboard::fallback_copy(&doc, "copy me");
    let after = doc.query_selector_all("textarea").unwrap().length();
    assert_eq!(before, after);
}

#[wasm_bindgen_test]
fn theme_application_tracks_preference() {
    mount(
        "theme-fixture",
        "<button id=\"darkModeToggle\"><i class=\"fas fa-moon\"></i></button>",
    );
    let doc = document();
    let bindings = page::ViewBindings::bind(&doc);
    assert!(bindings.has_dark_toggle());

    page::apply_theme(&bindings, ThemePref::Dark);
    assert!(body().class_list().contains("dark-mode"));
    let toggle = doc.get_element_by_id("darkModeToggle").unwrap();
    assert!(toggle.inner_html().contains("fa-sun"));

    page::apply_theme(&bindings, ThemePref::Light);
    assert!(!body().class_list().contains("dark-mode"));
    assert!(toggle.inner_html().contains("fa-moon"));
    doc.get_element_by_id("theme-fixture").unwrap().remove();
}

#[wasm_bindgen_test]
fn anchor_target_resolves_at_click_time() {
    mount(
        "scroll-fixture",
        "<a id=\"jump\" href=\"#landing-first\"></a>\
         <div id=\"landing-first\"></div><div id=\"landing-second\"></div>",
    );
    let doc = document();
    let anchor = doc.get_element_by_id("jump").unwrap();

    let target = scroll::resolve_target(&doc, &anchor).expect("initial target");
    assert_eq!(target.id(), "landing-first");

    // A href rewritten after load must point at its current target.
    anchor.set_attribute("href", "#landing-second").unwrap();
    let target = scroll::resolve_target(&doc, &anchor).expect("rewritten target");
    assert_eq!(target.id(), "landing-second");

    anchor.set_attribute("href", "#landing-missing").unwrap();
    assert!(scroll::resolve_target(&doc, &anchor).is_none());
    doc.get_element_by_id("scroll-fixture").unwrap().remove();
}

#[wasm_bindgen_test]
fn dark_toggle_click_persists_and_repaints() {
    mount(
        "controller-fixture",
        "<button id=\"darkModeToggle\"><i class=\"fas fa-moon\"></i></button>",
    );
    let store = anonmsg_web::storage::LocalPrefStore;
    store.set("darkMode", "disabled");

    let window = dom::window().expect("browser window");
    let doc = document();
    let _controller = page::PageController::attach(&window, &doc);

    let toggle = doc
        .get_element_by_id("darkModeToggle")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    toggle.click();
    assert!(body().class_list().contains("dark-mode"));
    assert_eq!(store.get("darkMode"), Some("enabled".to_string()));
    assert!(toggle.inner_html().contains("fa-sun"));

    toggle.click();
    assert!(!body().class_list().contains("dark-mode"));
    assert_eq!(store.get("darkMode"), Some("disabled".to_string()));
    assert!(toggle.inner_html().contains("fa-moon"));
    doc.get_element_by_id("controller-fixture").unwrap().remove();
}

#[wasm_bindgen_test]
fn local_store_round_trips_through_local_storage() {
    let store = anonmsg_web::storage::LocalPrefStore;
    store.set("darkMode", "enabled");
    assert_eq!(store.get("darkMode"), Some("enabled".to_string()));
    store.set("darkMode", "disabled");
    assert_eq!(store.get("darkMode"), Some("disabled".to_string()));
}
