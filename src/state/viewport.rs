//! Viewport size classification.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Layout size class used to pick the carousel grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportState {
    Narrow,
    Wide,
}

/// Classify a viewport width against a breakpoint: strictly below is narrow.
#[must_use]
pub fn classify(width_px: f64, breakpoint_px: u32) -> ViewportState {
    if width_px < f64::from(breakpoint_px) {
        ViewportState::Narrow
    } else {
        ViewportState::Wide
    }
}

/// Read the current window width. Returns `None` outside the browser.
pub fn window_width() -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
