//! Pull-to-refresh touch gesture.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, TouchEvent, Window};

/// Minimum downward travel before a swipe forces a reload.
pub const PULL_THRESHOLD_PX: f64 = 100.0;

/// Start/end vertical coordinates of the current touch cycle, overwritten
/// on every cycle.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_y: f64,
    end_y: f64,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, y: f64) {
        self.start_y = y;
    }

    pub fn touch_end(&mut self, y: f64) {
        self.end_y = y;
    }

    /// A reload is due when the page sits at the very top and the finger
    /// travelled down past the threshold.
    #[must_use]
    pub fn should_reload(&self, scroll_y: f64) -> bool {
        self.end_y - self.start_y > PULL_THRESHOLD_PX && scroll_y == 0.0
    }
}

fn first_touch_y(event: &TouchEvent, ended: bool) -> Option<f64> {
    let touches = if ended {
        event.changed_touches()
    } else {
        event.touches()
    };
    touches.get(0).map(|touch| f64::from(touch.client_y()))
}

/// Wire the passive touch listeners. The tracker is shared between the two
/// closures and owned by the page controller.
pub fn attach(document: &Document, window: &Window, tracker: Rc<RefCell<SwipeTracker>>) {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    let on_start = {
        let tracker = Rc::clone(&tracker);
        Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(y) = first_touch_y(&event, false) {
                tracker.borrow_mut().touch_start(y);
            }
        })
    };
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        on_start.as_ref().unchecked_ref(),
        &options,
    );
    on_start.forget();

    let on_end = {
        let window = window.clone();
        Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(y) = first_touch_y(&event, true) {
                let mut tracker = tracker.borrow_mut();
                tracker.touch_end(y);
                let scroll_y = window.scroll_y().unwrap_or_default();
                if tracker.should_reload(scroll_y) {
                    let _ = window.location().reload();
                }
            }
        })
    };
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        on_end.as_ref().unchecked_ref(),
        &options,
    );
    on_end.forget();
}
