//! Contact form model: field values, validation flags and submission state.
//!
//! The browser layer mirrors this model into the form controls; all rules
//! (required fields, e-mail shape, default subject, submit affordance) live
//! here so they can be tested without a document.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::config::StatusDurations;

pub const DEFAULT_SUBJECT: &str = "Contato via Portfólio";

/// Same shape browsers accept for `<input type="email">`.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("email pattern failed to compile: {e}");
        None
    }
});

/// Whether `value` looks like an e-mail address.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(value))
}

/// The four required form fields, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [FieldName::Name, FieldName::Email, FieldName::Subject, FieldName::Message];

    /// The `name` attribute of the matching form control.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub invalid: bool,
}

/// Lifecycle of one submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Success,
    Failed,
}

/// Transient status shown under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    IncompleteForm,
    Sent,
    SendFailed,
}

impl Notice {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Notice::IncompleteForm => "Preencha todos os campos.",
            Notice::Sent => "Enviado com sucesso",
            Notice::SendFailed => "Erro ao enviar. Tente novamente.",
        }
    }

    #[must_use]
    pub fn duration(self, durations: &StatusDurations) -> Duration {
        match self {
            Notice::IncompleteForm => durations.invalid,
            Notice::Sent => durations.success,
            Notice::SendFailed => durations.failure,
        }
    }
}

/// Fields rejected by validation, in form order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationFailure {
    pub invalid: Vec<FieldName>,
}

/// A validated message ready for the relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Field pairs in form order, as the relay expects them.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            (FieldName::Name.as_str(), &self.name),
            (FieldName::Email.as_str(), &self.email),
            (FieldName::Subject.as_str(), &self.subject),
            (FieldName::Message.as_str(), &self.message),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: FieldState,
    pub email: FieldState,
    pub subject: FieldState,
    pub message: FieldState,
    pub submission: SubmissionState,
    pub submit_disabled: bool,
    pub submit_busy: bool,
}

impl ContactForm {
    #[must_use]
    pub fn field(&self, name: FieldName) -> &FieldState {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FieldState {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        }
    }

    /// Record user input. A field that becomes non-blank loses its invalid flag.
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        let field = self.field_mut(name);
        field.value = value.into();
        if !field.value.trim().is_empty() {
            field.invalid = false;
        }
    }

    /// Check every field, updating invalid flags.
    ///
    /// Valid values are written back trimmed. The e-mail field is also
    /// rejected when non-blank but not e-mail shaped.
    ///
    /// # Errors
    ///
    /// Returns the invalid fields when any check fails.
    pub fn validate(&mut self) -> Result<(), ValidationFailure> {
        let mut invalid = Vec::new();
        for name in FieldName::ALL {
            let field = self.field_mut(name);
            let trimmed = field.value.trim().to_owned();
            let bad = trimmed.is_empty() || (name == FieldName::Email && !is_email_shaped(&trimmed));
            if !trimmed.is_empty() {
                field.value = trimmed;
            }
            field.invalid = bad;
            if bad {
                invalid.push(name);
            }
        }
        if invalid.is_empty() { Ok(()) } else { Err(ValidationFailure { invalid }) }
    }

    /// Validate and, on success, enter `Pending` with the submit control
    /// disabled and busy.
    ///
    /// # Errors
    ///
    /// Returns the invalid fields; state stays `Idle` and the control untouched.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ValidationFailure> {
        self.validate()?;
        self.submission = SubmissionState::Pending;
        self.submit_disabled = true;
        self.submit_busy = true;
        Ok(self.message())
    }

    /// Snapshot the current values as a relay message, trimmed, with a blank
    /// subject replaced by [`DEFAULT_SUBJECT`]. Does not validate.
    #[must_use]
    pub fn message(&self) -> ContactMessage {
        let subject = self.subject.value.trim();
        ContactMessage {
            name: self.name.value.trim().to_owned(),
            email: self.email.value.trim().to_owned(),
            subject: if subject.is_empty() { DEFAULT_SUBJECT.to_owned() } else { subject.to_owned() },
            message: self.message.value.trim().to_owned(),
        }
    }

    /// Record the relay outcome. Always re-enables the submit control; on
    /// success every field is cleared.
    pub fn finish_submit(&mut self, delivered: bool) -> Notice {
        self.submit_disabled = false;
        self.submit_busy = false;
        if delivered {
            self.reset_fields();
            self.submission = SubmissionState::Success;
            Notice::Sent
        } else {
            self.submission = SubmissionState::Failed;
            Notice::SendFailed
        }
    }

    /// Return to `Idle` once the outcome notice has been cleared.
    pub fn settle(&mut self) {
        if matches!(self.submission, SubmissionState::Success | SubmissionState::Failed) {
            self.submission = SubmissionState::Idle;
        }
    }

    fn reset_fields(&mut self) {
        for name in FieldName::ALL {
            *self.field_mut(name) = FieldState::default();
        }
    }
}
