//! Contact form submission pipeline.
//!
//! Validation runs synchronously and gates the network call. A valid form
//! moves to `Pending` with the submit control disabled, the relay is called
//! once, and the control is re-enabled whatever the outcome. The split
//! [`prepare`] / [`complete`] halves let the browser layer hold its signals
//! only around the synchronous parts; [`submit`] chains them for callers
//! that own the form outright.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::config::StatusDurations;
use crate::net::relay::{MailRelay, RelayError, deliver};
use crate::state::contact::{ContactForm, ContactMessage, Notice, ValidationFailure};
use crate::state::status::{StatusLine, StatusTicket};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(ValidationFailure),
    Delivered,
    Failed(RelayError),
}

impl SubmitOutcome {
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Invalid(_) => Notice::IncompleteForm,
            SubmitOutcome::Delivered => Notice::Sent,
            SubmitOutcome::Failed(_) => Notice::SendFailed,
        }
    }

    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered)
    }
}

/// Validate and enter `Pending`.
///
/// # Errors
///
/// Returns [`SubmitOutcome::Invalid`] when any field fails validation; the
/// form's invalid flags are updated and no request must be made.
pub fn prepare(form: &mut ContactForm) -> Result<ContactMessage, SubmitOutcome> {
    form.begin_submit().map_err(|failure| {
        log::debug!("contact form rejected: {:?}", failure.invalid);
        SubmitOutcome::Invalid(failure)
    })
}

/// Record the relay result and restore the submit control.
pub fn complete(form: &mut ContactForm, result: Result<(), RelayError>) -> SubmitOutcome {
    form.finish_submit(result.is_ok());
    match result {
        Ok(()) => {
            log::info!("contact form delivered");
            SubmitOutcome::Delivered
        }
        Err(e) => {
            log::error!("contact form delivery failed: {e}");
            SubmitOutcome::Failed(e)
        }
    }
}

/// Run the whole pipeline against `relay`.
pub async fn submit<R: MailRelay>(form: &mut ContactForm, relay: &R) -> SubmitOutcome {
    let message = match prepare(form) {
        Ok(message) => message,
        Err(outcome) => return outcome,
    };
    let result = deliver(relay, &message).await;
    complete(form, result)
}

/// Show the outcome's notice on `status`, returning the ticket that clears it.
pub fn announce(status: &mut StatusLine, outcome: &SubmitOutcome, durations: &StatusDurations) -> StatusTicket {
    let notice = outcome.notice();
    status.show(notice.text(), notice.duration(durations))
}
