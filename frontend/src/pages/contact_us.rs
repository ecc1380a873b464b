use yew::prelude::*;
use yew_hooks::use_title;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, HtmlInputElement, HtmlTextAreaElement, SubmitEvent};

use crate::config;
use crate::contact::{
    Acknowledgement, ContactForm, ContactFormState, Field, FieldErrors, FieldValue,
    SubmissionSink, SubmitOutcome,
};

/// Stand-in for a real transport: logs the snapshot and blocks on an alert.
pub struct ConsoleAlertSink;

impl SubmissionSink for ConsoleAlertSink {
    fn accept(&self, snapshot: &ContactForm) -> Acknowledgement {
        match serde_wasm_bindgen::to_value(snapshot) {
            Ok(value) => gloo_console::log!("Form Data Submitted:", value),
            Err(e) => {
                log::warn!("Could not convert form snapshot: {}", e);
                gloo_console::log!("Form Data Submitted:", format!("{:?}", snapshot));
            }
        }

        let message = "Form submitted!".to_string();
        if let Some(window) = window() {
            if let Err(e) = window.alert_with_message(&message) {
                log::warn!("Alert failed: {:?}", e);
            }
        }
        Acknowledgement { message }
    }
}

/// Reads `(name, value)` from an input or textarea event target.
fn read_edit(e: &Event) -> Option<(String, FieldValue)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        let value = if input.type_() == "checkbox" {
            FieldValue::Checked(input.checked())
        } else {
            FieldValue::Text(input.value())
        };
        return Some((input.name(), value));
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| (area.name(), FieldValue::Text(area.value())))
}

fn field_error(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component]
pub fn ContactUs() -> Html {
    use_title(config::CONTACT_PAGE_TITLE.to_string());
    let form = use_state(ContactFormState::default);

    let onedit = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let Some((name, value)) = read_edit(&e) else {
                log::warn!("Edit event without a form field target");
                return;
            };
            let mut next = (*form).clone();
            match next.set_named(&name, value) {
                Ok(()) => form.set(next),
                Err(e) => log::warn!("Ignoring edit: {}", e),
            }
        })
    };
    let oninput = {
        let onedit = onedit.clone();
        Callback::from(move |e: InputEvent| onedit.emit(e.into()))
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit(&ConsoleAlertSink) {
                SubmitOutcome::Accepted(ack) => log::info!("Contact form accepted: {}", ack.message),
                SubmitOutcome::Rejected => log::info!("Contact form has {} invalid field(s)", next.errors.len()),
            }
            form.set(next);
        })
    };

    let fields = &form.fields;
    let errors = &form.errors;
    let text_input = |field: Field, label: &'static str, input_type: &'static str, placeholder: &'static str| {
        html! {
            <div class={classes!("form-row", errors.contains(field).then(|| "has-error"))}>
                <label class="form-label" for={field.as_str()}>{label}</label>
                <input
                    id={field.as_str()}
                    name={field.as_str()}
                    type={input_type}
                    value={fields.text(field).unwrap_or_default().to_string()}
                    oninput={oninput.clone()}
                    class="form-input"
                    placeholder={placeholder}
                />
                { field_error(errors, field) }
            </div>
        }
    };

    html! {
        <div class="contact-page">
            <div class="contact-card">
                <h2>{"Get In Touch"}</h2>
                <p class="contact-intro">
                    {"Simply fill out the brief fields below and Dr. Norman will be in touch with you soon, usually within one business day. This form is safe, private, and completely free."}
                </p>

                <form onsubmit={onsubmit}>
                    { text_input(Field::Name, "Name", "text", "Name") }
                    { text_input(Field::Phone, "Phone", "text", "Phone") }
                    { text_input(Field::Email, "Email", "email", "you@example.com") }

                    <div class={classes!("form-row", errors.contains(Field::Message).then(|| "has-error"))}>
                        <label class="form-label" for={Field::Message.as_str()}>{"What brings you here?"}</label>
                        <textarea
                            id={Field::Message.as_str()}
                            name={Field::Message.as_str()}
                            rows="3"
                            value={fields.message.clone()}
                            oninput={oninput.clone()}
                            class="form-input"
                            placeholder="How can I help you?"
                        />
                        { field_error(errors, Field::Message) }
                    </div>

                    { text_input(Field::PreferredTime, "Preferred time to reach you", "text", "e.g., Mornings, Afternoons") }

                    <div class="consent-row">
                        <input
                            id={Field::Consent.as_str()}
                            type="checkbox"
                            name={Field::Consent.as_str()}
                            checked={fields.consent}
                            onchange={onedit}
                        />
                        <label for={Field::Consent.as_str()}>{"I agree to be contacted"}</label>
                    </div>
                    { field_error(errors, Field::Consent) }

                    <button type="submit" class="submit-button">{"Submit"}</button>
                </form>

                <p class="contact-footnote">
                    <span>{"ⓘ"}</span>
                    {" By clicking submit you consent to receive texts and emails from Dr. Marcia T. Norman"}
                </p>
            </div>

            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2.5rem 1rem;
                    background: #e7edeb;
                }

                .contact-card {
                    width: 100%;
                    max-width: 28rem;
                    background: #fff;
                    border: 1px solid #1b4c42;
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                    font-family: Georgia, 'Times New Roman', serif;
                    color: #1b4c42;
                }

                .contact-card h2 {
                    text-align: center;
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 0.25rem;
                }

                .contact-intro {
                    text-align: center;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin-bottom: 1.25rem;
                }

                .form-row {
                    margin-bottom: 1rem;
                }

                .form-label {
                    display: block;
                    font-size: 0.875rem;
                    margin-bottom: 0.25rem;
                }

                .form-input {
                    width: 100%;
                    box-sizing: border-box;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                    padding: 0.5rem 0.75rem;
                    font: inherit;
                }

                .has-error .form-input {
                    border-color: #dc2626;
                }

                .field-error {
                    font-size: 0.875rem;
                    color: #dc2626;
                }

                .consent-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                }

                .consent-row input {
                    margin-top: 0.25rem;
                }

                .submit-button {
                    width: 100%;
                    margin-top: 1rem;
                    padding: 0.5rem 0;
                    border: none;
                    border-radius: 0.375rem;
                    background: #1b4c42;
                    color: #fff;
                    font: inherit;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .submit-button:hover {
                    background: #163f38;
                }

                .contact-footnote {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.25rem;
                    margin-top: 1rem;
                    font-size: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}
