//! Contact section: three validated fields and a simulated submission.
//!
//! Validation lives in `atelier_core::form`; this component wires field
//! signals, blur clearing, the submit gate, and the success banner that
//! hides itself after five seconds. A submission counter keeps a stale
//! hide-timer from clobbering the banner of a newer submission.

use dioxus::prelude::*;

use atelier_core::form::{self, clear_on_blur, SubmissionCounter};
use atelier_core::{ContactForm, FieldErrors, FormField};

#[component]
pub fn ContactSection() -> Element {
    let mut fields = use_signal(ContactForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut success = use_signal(|| false);
    let mut submissions = use_signal(SubmissionCounter::default);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let validation = fields.read().validate();
        match validation {
            Ok(()) => {
                errors.set(FieldErrors::default());
                fields.write().clear();
                success.set(true);
                let generation = submissions.write().advance();
                tracing::info!("contact form submitted");
                spawn(async move {
                    tokio::time::sleep(form::SUCCESS_VISIBLE).await;
                    if submissions.read().should_hide(generation) {
                        success.set(false);
                    }
                });
            }
            Err(failed) => errors.set(failed),
        }
    };

    rsx! {
        form { class: "contact-form", novalidate: true, onsubmit: on_submit,
            div { class: "form-field",
                label { r#for: "name", "Name" }
                input {
                    id: "name",
                    name: "name",
                    r#type: "text",
                    class: if errors.read().name.is_some() { "input input--error" } else { "input" },
                    placeholder: "Your name",
                    value: "{fields.read().name}",
                    oninput: move |e| fields.write().name = e.value(),
                    onblur: move |_| {
                        let value = fields.read().name.clone();
                        clear_on_blur(&mut errors.write(), FormField::Name, &value);
                    },
                }
                span { class: "field-error", id: "nameError",
                    {errors.read().name.clone().unwrap_or_default()}
                }
            }

            div { class: "form-field",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    class: if errors.read().email.is_some() { "input input--error" } else { "input" },
                    placeholder: "you@example.com",
                    value: "{fields.read().email}",
                    oninput: move |e| fields.write().email = e.value(),
                    onblur: move |_| {
                        let value = fields.read().email.clone();
                        clear_on_blur(&mut errors.write(), FormField::Email, &value);
                    },
                }
                span { class: "field-error", id: "emailError",
                    {errors.read().email.clone().unwrap_or_default()}
                }
            }

            div { class: "form-field",
                label { r#for: "message", "Message" }
                textarea {
                    id: "message",
                    name: "message",
                    rows: 6,
                    class: if errors.read().message.is_some() { "input input--error" } else { "input" },
                    placeholder: "What would you like to make?",
                    value: "{fields.read().message}",
                    oninput: move |e| fields.write().message = e.value(),
                    onblur: move |_| {
                        let value = fields.read().message.clone();
                        clear_on_blur(&mut errors.write(), FormField::Message, &value);
                    },
                }
                span { class: "field-error", id: "messageError",
                    {errors.read().message.clone().unwrap_or_default()}
                }
            }

            button { r#type: "submit", class: "btn-submit", "Send message" }

            div {
                class: if success() { "form-success form-success--show" } else { "form-success" },
                role: "status",
                "Thanks for reaching out — I will reply within two working days."
            }
        }
    }
}
