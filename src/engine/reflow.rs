//! Responsive carousel reflow.
//!
//! ARCHITECTURE
//! ============
//! [`ReflowEngine`] owns the captured [`SlideDeck`] and the last applied
//! [`ViewportState`]. On a size-class change it disposes the carousel widget,
//! asks the [`SlideHost`] to render the new grouping, and re-creates the
//! widget. Same-class calls are no-ops, so it is safe to call on every
//! resize event.
//!
//! ERROR HANDLING
//! ==============
//! A missing container leaves the engine inert. Widget failures are logged
//! and never stop the DOM rebuild; the carousel is decorative.

#[cfg(test)]
#[path = "reflow_test.rs"]
mod reflow_test;

use crate::state::deck::{SlideDeck, SlideGroup};
use crate::state::viewport::ViewportState;

/// Options passed when (re)creating the carousel widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    pub auto_advance: bool,
    pub wrap: bool,
    pub touch: bool,
}

impl CarouselConfig {
    /// Manual navigation, wrap-around, swipe enabled.
    pub const RESPONSIVE: Self = Self { auto_advance: false, wrap: true, touch: true };
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::RESPONSIVE
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("carousel widget is not loaded")]
    Unavailable,
    #[error("carousel widget call `{call}` failed: {detail}")]
    Call { call: &'static str, detail: String },
}

/// The third-party carousel bound to the container.
pub trait CarouselWidget {
    /// Release the current instance and its event bindings, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the widget library is missing or the call throws.
    fn dispose(&mut self) -> Result<(), WidgetError>;

    /// Create (or fetch) the instance with `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the widget library is missing or the call throws.
    fn create(&mut self, config: &CarouselConfig) -> Result<(), WidgetError>;
}

/// The container holding the slide groups.
pub trait SlideHost {
    type Card: Clone;

    /// Read the authored grouping. Called once, before any render.
    fn capture(&self) -> Vec<Vec<Self::Card>>;

    /// Replace the container's groups with `groups`.
    fn render(&mut self, groups: &[SlideGroup<Self::Card>]);
}

/// What a [`ReflowEngine::reflow`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReflowOutcome {
    /// No container on this page.
    Inert,
    /// Size class unchanged; nothing touched.
    Unchanged,
    Rebuilt,
}

struct Attached<H: SlideHost, W> {
    host: H,
    widget: W,
    deck: SlideDeck<H::Card>,
}

pub struct ReflowEngine<H: SlideHost, W: CarouselWidget> {
    attached: Option<Attached<H, W>>,
    current: Option<ViewportState>,
    config: CarouselConfig,
    rebuilds: usize,
}

impl<H: SlideHost, W: CarouselWidget> ReflowEngine<H, W> {
    /// Bind to a container. `None` yields an inert engine.
    pub fn new(host: Option<H>, widget: W) -> Self {
        let attached = host.map(|host| {
            let deck = SlideDeck::capture(host.capture());
            log::debug!("carousel captured {} cards", deck.card_count());
            Attached { host, widget, deck }
        });
        Self {
            attached,
            current: None,
            config: CarouselConfig::RESPONSIVE,
            rebuilds: 0,
        }
    }

    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.attached.is_none()
    }

    /// Size class of the last rebuild, `None` before the first.
    #[must_use]
    pub fn current(&self) -> Option<ViewportState> {
        self.current
    }

    #[must_use]
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Canonical card order captured at bind time.
    pub fn cards(&self) -> impl Iterator<Item = &H::Card> {
        self.attached.iter().flat_map(|a| a.deck.cards())
    }

    /// Apply `next` if it differs from the last applied size class.
    pub fn reflow(&mut self, next: ViewportState) -> ReflowOutcome {
        let Some(attached) = self.attached.as_mut() else {
            return ReflowOutcome::Inert;
        };
        if self.current == Some(next) {
            return ReflowOutcome::Unchanged;
        }

        if let Err(e) = attached.widget.dispose() {
            log::warn!("carousel dispose failed: {e}");
        }
        let groups = attached.deck.layout(next);
        attached.host.render(&groups);
        if let Err(e) = attached.widget.create(&self.config) {
            log::warn!("carousel create failed: {e}");
        }

        log::debug!("carousel rebuilt for {next:?} with {} groups", groups.len());
        self.current = Some(next);
        self.rebuilds += 1;
        ReflowOutcome::Rebuilt
    }
}
