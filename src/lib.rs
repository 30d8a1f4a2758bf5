//! # portfolio
//!
//! Leptos + WASM behavior layer for a single hand-authored portfolio page.
//!
//! The page markup is static HTML (Bootstrap). This crate enhances it: a
//! responsive carousel that regroups its cards on narrow screens, a contact
//! form that posts to a third-party mail relay, and a handful of small UI
//! touches (theme toggle, reveal-on-scroll, typing title, copy e-mail).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Plain state models: viewport, slide deck, contact form, status line, theme |
//! | [`engine`] | Carousel reflow engine and form submission pipeline, generic over capabilities |
//! | [`net`] | Mail relay transport trait, payload encoding and response interpretation |
//! | [`config`] | Typed site configuration with page-level overrides |
//! | [`util`] | Small pure helpers (typing frames, scroll shadow, copy label) plus browser glue |
//! | `components` | Leptos islands mounted into the page (`csr` only) |
//! | `app` | WASM entry point (`csr` only) |
//!
//! Everything outside `components`, `app` and the `*_dom` helpers compiles
//! and tests natively; browser glue is gated behind the `csr` feature.

pub mod config;
pub mod engine;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components;
