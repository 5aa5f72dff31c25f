//! Page controller: one-time element binding and handler wiring.
//!
//! All element lookups happen here at attach time; optional page features
//! surface as explicit capability checks instead of scattered null checks.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, Window};

use crate::gestures::SwipeTracker;
use crate::storage::LocalPrefStore;
use crate::theme::{self, DarkMode, ThemePref};
use crate::toast::ToastView;
use crate::{alerts, forms, gestures, scroll, shortcuts, visibility};

/// References to the optional page elements, resolved once at load.
pub struct ViewBindings {
    pub body: Option<HtmlElement>,
    pub toast: Option<ToastView>,
    pub dark_toggle: Option<HtmlElement>,
}

impl ViewBindings {
    #[must_use]
    pub fn bind(document: &Document) -> Self {
        Self {
            body: document.body(),
            toast: ToastView::bind(document),
            dark_toggle: document
                .get_element_by_id("darkModeToggle")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        }
    }

    #[must_use]
    pub fn has_toast(&self) -> bool {
        self.toast.is_some()
    }

    #[must_use]
    pub fn has_dark_toggle(&self) -> bool {
        self.dark_toggle.is_some()
    }
}

/// Apply a theme preference to the bound elements.
pub fn apply_theme(bindings: &ViewBindings, pref: ThemePref) {
    if let Some(body) = &bindings.body {
        let classes = body.class_list();
        let _ = match pref {
            ThemePref::Dark => classes.add_1(theme::BODY_CLASS),
            ThemePref::Light => classes.remove_1(theme::BODY_CLASS),
        };
    }
    if let Some(toggle) = &bindings.dark_toggle {
        toggle.set_inner_html(pref.icon_html());
    }
}

/// Owns the cross-callback state and wires every handler once per load.
pub struct PageController {
    bindings: Rc<ViewBindings>,
    dark_mode: Rc<RefCell<DarkMode<LocalPrefStore>>>,
    swipe: Rc<RefCell<SwipeTracker>>,
}

impl PageController {
    /// Bind the page and attach all handlers.
    pub fn attach(window: &Window, document: &Document) -> Self {
        let bindings = Rc::new(ViewBindings::bind(document));
        let dark_mode = Rc::new(RefCell::new(DarkMode::load(LocalPrefStore)));
        let swipe = Rc::new(RefCell::new(SwipeTracker::default()));

        let controller = Self {
            bindings,
            dark_mode,
            swipe,
        };

        // Saved preference takes effect before any interaction; the light
        // default leaves the server-rendered page untouched.
        if controller.dark_mode.borrow().pref() == ThemePref::Dark {
            apply_theme(&controller.bindings, ThemePref::Dark);
        }
        controller.wire_dark_toggle();

        forms::attach(document);
        scroll::attach(document);
        alerts::attach(document, window);
        shortcuts::attach(document);
        visibility::attach(document);
        gestures::attach(document, window, Rc::clone(&controller.swipe));

        controller
    }

    #[must_use]
    pub fn bindings(&self) -> &ViewBindings {
        &self.bindings
    }

    fn wire_dark_toggle(&self) {
        let Some(toggle) = &self.bindings.dark_toggle else {
            return;
        };
        let on_click = {
            let bindings = Rc::clone(&self.bindings);
            let dark_mode = Rc::clone(&self.dark_mode);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
                let pref = dark_mode.borrow_mut().toggle();
                apply_theme(&bindings, pref);
            })
        };
        let _ = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}
