#![forbid(unsafe_code)]

//! Client-side enhancements for the server-rendered AnonMsg pages.
//!
//! Each module is an independent DOM-event handler; the page controller
//! binds elements once at load and wires everything against the document
//! the server produced.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod alerts;
pub mod analytics;
pub mod buttons;
pub mod clipboard;
pub mod dom;
pub mod emoji;
pub mod forms;
pub mod gestures;
pub mod page;
pub mod scroll;
pub mod shortcuts;
pub mod storage;
pub mod theme;
pub mod toast;
pub mod visibility;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    if let Some(window) = dom::window()
        && let Some(document) = window.document()
    {
        let _controller = page::PageController::attach(&window, &document);
        log::info!("AnonMsg platform loaded");
    }
}
