//! Contact form island: fields, submit button and the transient status line.
//!
//! Mounted into `#contact-form-root`. The form model and status line live in
//! signals; submission runs through [`crate::engine::submit`], holding the
//! signals only around the synchronous halves so input stays responsive
//! while the relay request is in flight.
//!
//! # Expected markup
//!
//! The page provides only an empty placeholder where the form belongs:
//!
//! ```html
//! <div id="contact-form-root"></div>
//! ```
//!
//! The island renders its own `<form id="contactForm">` and
//! `<div id="formStatus">` inside it. The page must not ship a static form
//! there as well; the island appends next to existing children, so a static
//! form would show up twice and would post without validation.

use leptos::prelude::*;

use crate::config::{SiteConfig, StatusDurations};
use crate::engine::submit::{self, SubmitOutcome};
use crate::net::relay::{HttpRelay, deliver};
use crate::state::contact::{ContactForm, FieldName};
use crate::state::status::StatusLine;

/// Show `outcome`'s notice, then clear it (and settle the form) once its
/// display time has passed.
fn flash(status: RwSignal<StatusLine>, form: RwSignal<ContactForm>, outcome: &SubmitOutcome, durations: StatusDurations) {
    let Some(ticket) = status.try_update(|s| submit::announce(s, outcome, &durations)) else {
        return;
    };
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(ticket.clear_after).await;
        if status.try_update(|s| s.expire(ticket)).unwrap_or(false) {
            form.update(ContactForm::settle);
        }
    });
}

#[component]
pub fn ContactFormPanel(config: SiteConfig) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(StatusLine::default());
    let relay = HttpRelay::new(config.relay_endpoint.clone());
    let durations = config.durations;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // The disabled button is the double-submit guard; keyboard submits
        // bypass it, so check the model too.
        if form.with_untracked(|f| f.submit_disabled) {
            return;
        }
        match form.try_update(submit::prepare) {
            None => {}
            Some(Err(outcome)) => flash(status, form, &outcome, durations),
            Some(Ok(message)) => {
                let relay = relay.clone();
                leptos::task::spawn_local(async move {
                    let result = deliver(&relay, &message).await;
                    if let Some(outcome) = form.try_update(|f| submit::complete(f, result)) {
                        flash(status, form, &outcome, durations);
                    }
                });
            }
        }
    };

    let field_class = move |name: FieldName| {
        move || {
            if form.with(|f| f.field(name).invalid) {
                "form-control is-invalid"
            } else {
                "form-control"
            }
        }
    };
    let field_value = move |name: FieldName| move || form.with(|f| f.field(name).value.clone());
    let on_input = move |name: FieldName| {
        move |ev: leptos::ev::Event| form.update(|f| f.set_value(name, event_target_value(&ev)))
    };

    view! {
        <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
            <div class="mb-3">
                <label class="form-label" for="contact-name">"Nome"</label>
                <input
                    id="contact-name"
                    name="name"
                    type="text"
                    autocomplete="name"
                    required=true
                    class=field_class(FieldName::Name)
                    prop:value=field_value(FieldName::Name)
                    on:input=on_input(FieldName::Name)
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="contact-email">"E-mail"</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    autocomplete="email"
                    required=true
                    class=field_class(FieldName::Email)
                    prop:value=field_value(FieldName::Email)
                    on:input=on_input(FieldName::Email)
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="contact-subject">"Assunto"</label>
                <input
                    id="contact-subject"
                    name="subject"
                    type="text"
                    required=true
                    class=field_class(FieldName::Subject)
                    prop:value=field_value(FieldName::Subject)
                    on:input=on_input(FieldName::Subject)
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="contact-message">"Mensagem"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    required=true
                    class=field_class(FieldName::Message)
                    prop:value=field_value(FieldName::Message)
                    on:input=on_input(FieldName::Message)
                ></textarea>
            </div>
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || form.with(|f| f.submit_disabled)
                aria-busy=move || form.with(|f| f.submit_busy).then_some("true")
            >
                "Enviar"
            </button>
            <p id="formStatus" class="form-status mt-3" role="status" aria-live="polite">
                {move || status.with(|s| s.text().to_owned())}
            </p>
        </form>
    }
}
