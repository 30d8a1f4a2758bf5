//! Leptos islands mounted into the static page.

pub mod contact_form;
