//! Transient status line shared by the contact form.
//!
//! Each [`StatusLine::show`] hands back a ticket; the caller sleeps for the
//! ticket's duration and then calls [`StatusLine::expire`]. A ticket only
//! clears the text it put there: once a newer message has been shown, older
//! tickets expire as no-ops, so a short-lived message can never wipe a newer
//! one that is still within its own display window.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
    generation: u64,
}

/// Handle for clearing one shown message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct StatusTicket {
    generation: u64,
    pub clear_after: Duration,
}

impl StatusLine {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn show(&mut self, text: impl Into<String>, clear_after: Duration) -> StatusTicket {
        self.generation += 1;
        self.text = text.into();
        StatusTicket { generation: self.generation, clear_after }
    }

    /// Clear the text if `ticket` is still the latest message. Returns
    /// whether anything was cleared.
    pub fn expire(&mut self, ticket: StatusTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.text.clear();
        true
    }
}
