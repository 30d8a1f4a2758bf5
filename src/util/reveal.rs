//! Reveal-on-scroll for `[data-animate]` elements.
//!
//! Each element gets the `animate` class the first time it intersects the
//! viewport and is then unobserved, so the animation plays once. Browsers
//! without `IntersectionObserver` reveal everything immediately.

pub const REVEAL_SELECTOR: &str = "[data-animate]";
pub const REVEAL_CLASS: &str = "animate";
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

#[cfg(feature = "csr")]
pub fn install() {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::dom;

    let targets = dom::query_all(REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }
    let reveal_all = |targets: &[web_sys::Element]| {
        for el in targets {
            dom::toggle_class(el, REVEAL_CLASS, true);
        }
    };

    let supported = web_sys::window()
        .is_some_and(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false));
    if !supported {
        reveal_all(&targets);
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::toggle_class(&target, REVEAL_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            callback.forget();
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {e:?}");
            reveal_all(&targets);
        }
    }
}
