//! Copy-e-mail button.
//!
//! Tries the async Clipboard API first and falls back to a hidden textarea
//! with `execCommand("copy")` for browsers that refuse it (insecure origins,
//! older engines). The button label confirms success briefly.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[cfg(feature = "csr")]
use std::time::Duration;

pub const IDLE_LABEL: &str = " Copiar e-mail";
pub const COPIED_LABEL: &str = " Copiado!";

/// Label shown right after a copy attempt.
#[must_use]
pub fn label_after_copy(copied: bool) -> &'static str {
    if copied { COPIED_LABEL } else { IDLE_LABEL }
}

/// Copy `text`, returning whether any strategy succeeded.
#[cfg(feature = "csr")]
pub async fn copy_text(text: &str) -> bool {
    match async_clipboard_write(text) {
        Some(promise) => match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => return true,
            Err(e) => log::debug!("clipboard API refused, using fallback: {e:?}"),
        },
        None => log::debug!("clipboard API missing, using fallback"),
    }
    copy_with_textarea(text)
}

/// `navigator.clipboard.writeText(text)`, looked up dynamically since the
/// API is absent on insecure origins.
#[cfg(feature = "csr")]
fn async_clipboard_write(text: &str) -> Option<js_sys::Promise> {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let navigator = web_sys::window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    write
        .call1(&clipboard, &JsValue::from_str(text))
        .ok()?
        .dyn_into::<Promise>()
        .ok()
}

#[cfg(feature = "csr")]
fn copy_with_textarea(text: &str) -> bool {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlDocument, HtmlTextAreaElement};

    let Some(doc) = super::dom::document() else {
        return false;
    };
    let Some(body) = doc.body() else {
        return false;
    };
    let Some(area) = doc
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    else {
        return false;
    };

    area.set_value(text);
    let style = area.style();
    if style.set_property("position", "fixed").and_then(|()| style.set_property("opacity", "0")).is_err() {
        log::debug!("fallback textarea could not be hidden");
    }
    if body.append_child(&area).is_err() {
        return false;
    }
    area.select();
    let copied = doc
        .dyn_ref::<HtmlDocument>()
        .and_then(|html| html.exec_command("copy").ok())
        .unwrap_or(false);
    if let Err(e) = body.remove_child(&area) {
        log::debug!("fallback textarea not removed: {e:?}");
    }
    copied
}

/// Wire `#copyMail` to copy `email`, reverting its label after `revert_after`.
#[cfg(feature = "csr")]
pub fn install(email: String, revert_after: Duration) {
    use super::dom;

    let Some(button) = dom::by_id("copyMail") else {
        return;
    };
    let label = button.query_selector("span").ok().flatten();

    dom::listen(&button, "click", move |_| {
        let email = email.clone();
        let label = label.clone();
        leptos::task::spawn_local(async move {
            let copied = copy_text(&email).await;
            log::debug!("copy e-mail: copied={copied}");
            let Some(label) = label else {
                return;
            };
            label.set_text_content(Some(label_after_copy(copied)));
            gloo_timers::future::sleep(revert_after).await;
            label.set_text_content(Some(IDLE_LABEL));
        });
    });
}
