use super::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.set_value(FieldName::Name, "  Ana  ");
    form.set_value(FieldName::Email, "ana@example.com ");
    form.set_value(FieldName::Subject, "Freela");
    form.set_value(FieldName::Message, "\tOlá!\n");
    form
}

// =============================================================
// E-mail shape
// =============================================================

#[test]
fn email_shape_accepts_common_addresses() {
    assert!(is_email_shaped("ana@example.com"));
    assert!(is_email_shaped("first.last+tag@sub.example.co"));
    assert!(is_email_shaped("a@b"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in ["bad", "@example.com", "ana@", "ana@@example.com", "ana @example.com", "ana@-example.com", ""] {
        assert!(!is_email_shaped(bad), "{bad:?} should be rejected");
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_accepts_complete_form_and_trims_values() {
    let mut form = filled();
    assert_eq!(form.validate(), Ok(()));
    assert_eq!(form.name.value, "Ana");
    assert_eq!(form.email.value, "ana@example.com");
    assert_eq!(form.message.value, "Olá!");
    assert!(FieldName::ALL.iter().all(|f| !form.field(*f).invalid));
}

#[test]
fn validate_flags_blank_fields() {
    let mut form = filled();
    form.set_value(FieldName::Name, "   ");
    form.set_value(FieldName::Message, "");
    let err = form.validate().unwrap_err();
    assert_eq!(err.invalid, vec![FieldName::Name, FieldName::Message]);
    assert!(form.name.invalid);
    assert!(form.message.invalid);
    assert!(!form.email.invalid);
}

#[test]
fn validate_flags_malformed_email_alongside_blank_fields() {
    let mut form = ContactForm::default();
    form.set_value(FieldName::Name, "A");
    form.set_value(FieldName::Email, "bad");
    form.set_value(FieldName::Subject, "");
    form.set_value(FieldName::Message, "hi");
    let err = form.validate().unwrap_err();
    assert_eq!(err.invalid, vec![FieldName::Email, FieldName::Subject]);
    assert!(form.email.invalid);
    assert!(form.subject.invalid);
    assert!(!form.name.invalid);
}

#[test]
fn validate_is_invalid_iff_some_field_blank_or_email_malformed() {
    let values = ["", "  ", "x", "ana@example.com"];
    for name in values {
        for email in values {
            for subject in values {
                for message in values {
                    let mut form = ContactForm::default();
                    form.set_value(FieldName::Name, name);
                    form.set_value(FieldName::Email, email);
                    form.set_value(FieldName::Subject, subject);
                    form.set_value(FieldName::Message, message);
                    let expected_ok = !name.trim().is_empty()
                        && !subject.trim().is_empty()
                        && !message.trim().is_empty()
                        && is_email_shaped(email.trim());
                    assert_eq!(form.validate().is_ok(), expected_ok, "{name:?} {email:?} {subject:?} {message:?}");
                }
            }
        }
    }
}

#[test]
fn typing_into_invalid_field_clears_flag() {
    let mut form = ContactForm::default();
    assert!(form.validate().is_err());
    assert!(form.name.invalid);
    form.set_value(FieldName::Name, " ");
    assert!(form.name.invalid);
    form.set_value(FieldName::Name, "A");
    assert!(!form.name.invalid);
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn begin_submit_on_invalid_form_leaves_state_idle() {
    let mut form = ContactForm::default();
    assert!(form.begin_submit().is_err());
    assert_eq!(form.submission, SubmissionState::Idle);
    assert!(!form.submit_disabled);
    assert!(!form.submit_busy);
}

#[test]
fn begin_submit_enters_pending_and_disables_control() {
    let mut form = filled();
    let message = form.begin_submit().unwrap();
    assert_eq!(form.submission, SubmissionState::Pending);
    assert!(form.submit_disabled);
    assert!(form.submit_busy);
    assert_eq!(message.name, "Ana");
    assert_eq!(message.subject, "Freela");
}

#[test]
fn finish_submit_success_clears_fields() {
    let mut form = filled();
    form.begin_submit().unwrap();
    assert_eq!(form.finish_submit(true), Notice::Sent);
    assert_eq!(form.submission, SubmissionState::Success);
    assert!(!form.submit_disabled);
    assert!(!form.submit_busy);
    for name in FieldName::ALL {
        assert_eq!(form.field(name), &FieldState::default());
    }
}

#[test]
fn finish_submit_failure_keeps_fields_and_restores_control() {
    let mut form = filled();
    form.begin_submit().unwrap();
    assert_eq!(form.finish_submit(false), Notice::SendFailed);
    assert_eq!(form.submission, SubmissionState::Failed);
    assert!(!form.submit_disabled);
    assert!(!form.submit_busy);
    assert_eq!(form.name.value, "Ana");
}

#[test]
fn settle_returns_outcome_states_to_idle_only() {
    let mut form = filled();
    form.begin_submit().unwrap();
    form.settle();
    assert_eq!(form.submission, SubmissionState::Pending);
    form.finish_submit(true);
    form.settle();
    assert_eq!(form.submission, SubmissionState::Idle);
}

#[test]
fn message_substitutes_default_subject_when_blank() {
    let mut form = filled();
    form.set_value(FieldName::Subject, "   ");
    let msg = form.message();
    assert_eq!(msg.subject, DEFAULT_SUBJECT);
    assert_eq!(msg.name, "Ana");
    assert_eq!(msg.message, "Olá!");
}

#[test]
fn message_keeps_given_subject_trimmed() {
    let mut form = filled();
    form.set_value(FieldName::Subject, " Freela ");
    assert_eq!(form.message().subject, "Freela");
}

#[test]
fn message_pairs_follow_form_order() {
    let msg = ContactMessage {
        name: "A".into(),
        email: "a@b.c".into(),
        subject: DEFAULT_SUBJECT.into(),
        message: "m".into(),
    };
    let keys = msg.pairs().map(|(k, _)| k);
    assert_eq!(keys, ["name", "email", "subject", "message"]);
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notice_texts_and_durations() {
    let d = StatusDurations::default();
    assert_eq!(Notice::IncompleteForm.text(), "Preencha todos os campos.");
    assert_eq!(Notice::IncompleteForm.duration(&d), Duration::from_millis(3000));
    assert_eq!(Notice::Sent.duration(&d), Duration::from_millis(4000));
    assert_eq!(Notice::SendFailed.duration(&d), Duration::from_millis(3500));
}
