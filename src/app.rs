//! WASM entry point.
//!
//! Loaded as an ES module, so the document is parsed by the time `start`
//! runs. Each feature installs independently and silently skips itself when
//! its markup is absent. The contact form is the exception to "enhance what
//! is there": it is rendered into an empty `#contact-form-root` (see
//! [`crate::components::contact_form`]).

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::components::contact_form::ContactFormPanel;
use crate::config::{META_PREFIX, SiteConfig};
use crate::util::{carousel_dom, clipboard, dom, page, reveal, scroll, theme, typing};

const CONTACT_FORM_ROOT: &str = "contact-form-root";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("logger already initialized");
    }

    let config = SiteConfig::from_lookup_or_default(|key| dom::meta_content(&format!("{META_PREFIX}{key}")));
    log::debug!("site config: {config:?}");

    theme::install();
    reveal::install();
    scroll::install();
    typing::install(config.typing_interval);
    clipboard::install(config.contact_email.clone(), config.durations.copied);
    page::wire_design_links();
    page::wire_menu_collapse();
    page::stamp_footer_year();
    carousel_dom::install(config.narrow_breakpoint_px);
    mount_contact_form(config);
}

fn mount_contact_form(config: SiteConfig) {
    let Some(root) = dom::by_id(CONTACT_FORM_ROOT).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) else {
        log::debug!("no #{CONTACT_FORM_ROOT} on this page");
        return;
    };
    if root.child_element_count() > 0 {
        log::warn!("#{CONTACT_FORM_ROOT} already has markup; the rendered form is added after it");
    }
    leptos::mount::mount_to(root, move || view! { <ContactFormPanel config=config/> }).forget();
}
