//! Typing effect for the contact section title.
//!
//! The title's text is cleared and retyped one character per tick. The
//! caret is pure CSS (`::after`), so only the text content changes here.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

#[cfg(feature = "csr")]
use std::time::Duration;

/// Text to type: `data-fulltext` when present and non-blank, else the
/// element's current text, trimmed.
#[must_use]
pub fn title_source(fulltext: Option<&str>, current: Option<&str>) -> String {
    fulltext
        .filter(|s| !s.trim().is_empty())
        .or(current)
        .unwrap_or_default()
        .trim()
        .to_owned()
}

/// Every prefix of `full` by character, from empty to complete.
#[must_use]
pub fn typing_frames(full: &str) -> Vec<String> {
    let mut frames = Vec::with_capacity(full.chars().count() + 1);
    frames.push(String::new());
    let mut prefix = String::with_capacity(full.len());
    for ch in full.chars() {
        prefix.push(ch);
        frames.push(prefix.clone());
    }
    frames
}

/// Start typing into `#contact-title`, one frame per `interval`.
#[cfg(feature = "csr")]
pub fn install(interval: Duration) {
    let Some(title) = super::dom::by_id("contact-title") else {
        return;
    };
    let fulltext = title.get_attribute("data-fulltext");
    let frames = typing_frames(&title_source(fulltext.as_deref(), title.text_content().as_deref()));
    title.set_text_content(Some(""));

    leptos::task::spawn_local(async move {
        for frame in frames {
            title.set_text_content(Some(&frame));
            gloo_timers::future::sleep(interval).await;
        }
    });
}
