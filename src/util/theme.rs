//! Theme initialization and toggle.
//!
//! Reads the saved preference from `localStorage` (falling back to the
//! system color scheme) and applies the `theme-dark` class to `<html>`.
//! The `#themeToggle` button flips and persists the choice. Requires a
//! browser environment; native builds no-op.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage failures (private mode, quotas) are
//! logged and the theme still applies for the current page view.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{self as model, ThemeMode};
#[cfg(feature = "csr")]
use crate::state::theme::{DARK_CLASS, STORAGE_KEY};

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Read the saved preference, if any.
pub fn read_saved() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Whether the system currently prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Effective theme at page load.
pub fn initial() -> ThemeMode {
    model::resolve(read_saved().as_deref(), system_prefers_dark())
}

/// Apply `mode` to `<html>` and the toggle button decorations.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "csr")]
    {
        use super::dom;

        if let Some(root) = dom::document().and_then(|d| d.document_element()) {
            dom::toggle_class(&root, DARK_CLASS, mode.is_dark());
        }
        if let Some(btn) = dom::by_id("themeToggle") {
            let pressed = if mode.is_dark() { "true" } else { "false" };
            if let Err(e) = btn
                .set_attribute("aria-pressed", pressed)
                .and_then(|()| btn.set_attribute("aria-label", mode.toggle_label()))
            {
                log::debug!("theme toggle attributes not updated: {e:?}");
            }
            if let Ok(Some(icon)) = btn.query_selector("i") {
                icon.set_class_name(mode.icon_class());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}

/// Persist `mode` under the `theme` key.
pub fn persist(mode: ThemeMode) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; theme not persisted");
            return;
        };
        if let Err(e) = storage.set_item(STORAGE_KEY, mode.as_str()) {
            log::warn!("theme not persisted: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}

/// Flip `current`, apply and persist it. Returns the new mode.
pub fn toggle(current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}

/// Apply the initial theme and wire the toggle button and system listener.
pub fn install() {
    let mode = initial();
    apply(mode);

    #[cfg(feature = "csr")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;

        use super::dom;

        let current = Rc::new(Cell::new(mode));

        if let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) {
            let current = Rc::clone(&current);
            dom::listen(&mq, "change", move |ev| {
                if !model::follows_system(read_saved().as_deref()) {
                    return;
                }
                let dark = ev
                    .dyn_ref::<web_sys::MediaQueryListEvent>()
                    .map_or_else(system_prefers_dark, web_sys::MediaQueryListEvent::matches);
                let next = if dark { ThemeMode::Dark } else { ThemeMode::Light };
                current.set(next);
                apply(next);
            });
        }

        if let Some(btn) = dom::by_id("themeToggle") {
            dom::listen(&btn, "click", move |_| {
                current.set(toggle(current.get()));
            });
        }
    }
}
