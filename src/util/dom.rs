//! Thin `web-sys` helpers for querying the page and binding listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into::<HtmlElement>().ok()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements matching `selector` in the document.
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.document_element())
        .map(|root| query_all_in(&root, selector))
        .unwrap_or_default()
}

/// `content` of `<meta name="{name}">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    query(&format!("meta[name=\"{name}\"]"))?.get_attribute("content")
}

/// Bind `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("failed to bind {event} listener: {e:?}");
        return;
    }
    cb.forget();
}

/// Add or remove `class` on `el`.
pub fn toggle_class(el: &Element, class: &str, on: bool) {
    let result = if on { el.class_list().add_1(class) } else { el.class_list().remove_1(class) };
    if let Err(e) = result {
        log::debug!("class toggle {class} failed: {e:?}");
    }
}
