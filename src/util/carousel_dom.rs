//! Browser bindings for the carousel reflow engine.
//!
//! Expected markup (Bootstrap 5):
//!
//! ```html
//! <div id="projectsCarousel" class="carousel slide">
//!   <div class="carousel-inner">
//!     <div class="carousel-item active">
//!       <div class="row g-4"> <div class="col-md-4">card</div> ... </div>
//!     </div>
//!     ...
//!   </div>
//!   <button class="carousel-control-prev" ...></button>
//!   <button class="carousel-control-next" ...></button>
//! </div>
//! ```
//!
//! Cards are the direct children of each slide's `.row`. The live card
//! elements are captured once and every render moves them (`append_child`
//! relocates, never copies) into fresh slide wrappers. Listeners and observer
//! registrations bound to a card by other features survive any number of
//! reflows.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use super::dom;
use crate::engine::reflow::{CarouselConfig, CarouselWidget, ReflowEngine, SlideHost, WidgetError};
use crate::state::deck::SlideGroup;
use crate::state::viewport::{classify, window_width};

pub const CAROUSEL_SELECTOR: &str = "#projectsCarousel";
const INNER_SELECTOR: &str = ".carousel-inner";
const CONTROL_SELECTOR: &str = ".carousel-control-prev, .carousel-control-next, .carousel-indicators";
const DEFAULT_ROW_CLASS: &str = "row";

/// The `.carousel-inner` slide holder.
pub struct DomSlideHost {
    container: Element,
    inner: Element,
    row_class: String,
}

impl DomSlideHost {
    /// Bind to `container`, or `None` when its slide holder is missing.
    pub fn find(container: &Element) -> Option<Self> {
        let inner = container.query_selector(INNER_SELECTOR).ok().flatten()?;
        let row_class = inner
            .query_selector(".carousel-item > .row")
            .ok()
            .flatten()
            .map_or_else(|| DEFAULT_ROW_CLASS.to_owned(), |row| row.class_name());
        Some(Self {
            container: container.clone(),
            inner,
            row_class,
        })
    }

    fn build_slide(&self, group: &SlideGroup<Element>) -> Result<Element, JsValue> {
        let doc = dom::document().ok_or_else(|| JsValue::from_str("no document"))?;
        let slide = doc.create_element("div")?;
        slide.set_class_name(if group.active { "carousel-item active" } else { "carousel-item" });
        let row = doc.create_element("div")?;
        row.set_class_name(&self.row_class);
        for card in &group.cards {
            row.append_child(card)?;
        }
        slide.append_child(&row)?;
        Ok(slide)
    }
}

impl SlideHost for DomSlideHost {
    type Card = Element;

    fn capture(&self) -> Vec<Vec<Element>> {
        dom::query_all_in(&self.inner, ":scope > .carousel-item")
            .iter()
            .map(|slide| {
                let cards = dom::query_all_in(slide, ":scope > .row > *");
                if cards.is_empty() { dom::query_all_in(slide, ":scope > *") } else { cards }
            })
            .collect()
    }

    fn render(&mut self, groups: &[SlideGroup<Element>]) {
        // Old wrappers are emptied as their cards move into the new ones.
        let stale = dom::query_all_in(&self.inner, ":scope > .carousel-item");
        let fresh: Vec<Element> = groups
            .iter()
            .filter_map(|group| match self.build_slide(group) {
                Ok(slide) => Some(slide),
                Err(e) => {
                    log::warn!("carousel slide not built: {e:?}");
                    None
                }
            })
            .collect();
        for slide in &stale {
            slide.remove();
        }
        for slide in &fresh {
            if let Err(e) = self.inner.append_child(slide) {
                log::warn!("carousel slide not attached: {e:?}");
            }
        }
        let single = groups.len() < 2;
        for control in dom::query_all_in(&self.container, CONTROL_SELECTOR) {
            dom::toggle_class(&control, "d-none", single);
        }
    }
}

/// Bootstrap's `Carousel`, reached through the global `bootstrap` object.
pub struct BootstrapCarousel {
    element: Element,
}

impl BootstrapCarousel {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

fn carousel_class() -> Result<JsValue, WidgetError> {
    let window = web_sys::window().ok_or(WidgetError::Unavailable)?;
    let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap")).map_err(|_| WidgetError::Unavailable)?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return Err(WidgetError::Unavailable);
    }
    let class = Reflect::get(&bootstrap, &JsValue::from_str("Carousel")).map_err(|_| WidgetError::Unavailable)?;
    if class.is_undefined() {
        return Err(WidgetError::Unavailable);
    }
    Ok(class)
}

fn method(target: &JsValue, name: &'static str) -> Result<Function, WidgetError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(|e| call_error(name, &e))?
        .dyn_into::<Function>()
        .map_err(|e| call_error(name, &e))
}

fn call_error(call: &'static str, e: &JsValue) -> WidgetError {
    WidgetError::Call { call, detail: format!("{e:?}") }
}

fn config_object(config: &CarouselConfig) -> Result<Object, WidgetError> {
    let obj = Object::new();
    let interval = if config.auto_advance { JsValue::from_f64(5000.0) } else { JsValue::FALSE };
    for (key, value) in [
        ("interval", interval),
        ("ride", JsValue::from_bool(config.auto_advance)),
        ("wrap", JsValue::from_bool(config.wrap)),
        ("touch", JsValue::from_bool(config.touch)),
    ] {
        Reflect::set(&obj, &JsValue::from_str(key), &value).map_err(|e| call_error("config", &e))?;
    }
    Ok(obj)
}

impl CarouselWidget for BootstrapCarousel {
    fn dispose(&mut self) -> Result<(), WidgetError> {
        let class = carousel_class()?;
        let instance = method(&class, "getInstance")?
            .call1(&class, &self.element)
            .map_err(|e| call_error("getInstance", &e))?;
        if instance.is_null() || instance.is_undefined() {
            return Ok(());
        }
        method(&instance, "dispose")?
            .call0(&instance)
            .map_err(|e| call_error("dispose", &e))?;
        Ok(())
    }

    fn create(&mut self, config: &CarouselConfig) -> Result<(), WidgetError> {
        let class = carousel_class()?;
        let options = config_object(config)?;
        method(&class, "getOrCreateInstance")?
            .call2(&class, &self.element, &options)
            .map_err(|e| call_error("getOrCreateInstance", &e))?;
        Ok(())
    }
}

/// Bind the reflow engine to the page carousel and keep it in sync with
/// window resizes.
pub fn install(breakpoint_px: u32) {
    let Some(container) = dom::query(CAROUSEL_SELECTOR) else {
        log::debug!("no carousel on this page");
        return;
    };
    let host = DomSlideHost::find(&container);
    let widget = BootstrapCarousel::new(container);
    let engine = Rc::new(RefCell::new(ReflowEngine::new(host, widget)));
    if engine.borrow().is_inert() {
        log::debug!("carousel has no slide holder; leaving it alone");
        return;
    }

    let sync = {
        let engine = Rc::clone(&engine);
        move || {
            if let Some(width) = window_width() {
                engine.borrow_mut().reflow(classify(width, breakpoint_px));
            }
        }
    };
    sync();

    if let Some(window) = web_sys::window() {
        dom::listen(&window, "resize", move |_| sync());
    }
}
