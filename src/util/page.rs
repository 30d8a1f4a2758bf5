//! Small one-shot page touches: footer year, design links, menu collapse.

use wasm_bindgen::JsCast;

use super::dom;

/// Write the current year into `#year`.
pub fn stamp_footer_year() {
    if let Some(el) = dom::by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

/// Open `.open-figma[data-figma]` links in a new tab without an opener.
pub fn wire_design_links() {
    for link in dom::query_all(".open-figma[data-figma]") {
        let target = link.clone();
        dom::listen(&link, "click", move |ev| {
            ev.prevent_default();
            let Some(url) = target.get_attribute("data-figma").filter(|u| !u.is_empty()) else {
                return;
            };
            let opened = web_sys::window()
                .map(|w| w.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer"));
            if let Some(Err(e)) = opened {
                log::warn!("could not open design link: {e:?}");
            }
        });
    }
}

/// Close the expanded mobile menu when one of its links is followed.
pub fn wire_menu_collapse() {
    for link in dom::query_all(".navbar-collapse .nav-link") {
        dom::listen(&link, "click", move |ev| {
            let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            if let Ok(Some(menu)) = el.closest(".navbar-collapse.show") {
                dom::toggle_class(&menu, "show", false);
            }
        });
    }
}
