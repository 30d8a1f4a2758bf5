//! Navbar shadow once the page is scrolled.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset (px) past which the navbar is considered scrolled.
pub const SCROLLED_AFTER_PX: f64 = 8.0;

pub const SCROLLED_CLASS: &str = "scrolled";

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

/// Toggle `scrolled` on the navbar, at most once per animation frame.
#[cfg(feature = "csr")]
pub fn install() {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::dom;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(navbar) = dom::query(".navbar, .navbar-paper") else {
        return;
    };

    let apply = {
        let window = window.clone();
        let navbar = navbar.clone();
        move || {
            let y = window.scroll_y().unwrap_or(0.0);
            dom::toggle_class(&navbar, SCROLLED_CLASS, is_scrolled(y));
        }
    };
    apply();

    let ticking = Rc::new(Cell::new(false));
    let frame = {
        let ticking = Rc::clone(&ticking);
        Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            apply();
            ticking.set(false);
        })
    };

    let target = window.clone();
    dom::listen(&target, "scroll", move |_| {
        if ticking.get() {
            return;
        }
        if window.request_animation_frame(frame.as_ref().unchecked_ref()).is_ok() {
            ticking.set(true);
        }
    });
}
