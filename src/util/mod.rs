//! Utility helpers shared across the page features.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each peripheral feature keeps its pure rules (thresholds, labels, frame
//! sequences) next to the browser glue that applies them. The glue is gated
//! behind `csr` and silently does nothing when its element is not on the
//! page, so one missing feature never breaks another.

pub mod clipboard;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod typing;

#[cfg(feature = "csr")]
pub mod carousel_dom;
#[cfg(feature = "csr")]
pub mod dom;
#[cfg(feature = "csr")]
pub mod page;
