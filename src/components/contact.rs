// =============================================================================
// Gravity Web - Contact Section
// =============================================================================
// Owns the contact form state: four field signals plus the per-field error
// map recomputed on every submit attempt
// =============================================================================

use leptos::prelude::*;

use crate::components::{TextArea, TextInput};
use crate::form::{self, ContactForm, Field, FormErrors};
use crate::mailer::{self, MailMessage};

/// Contact section with the validated mail-composing form.
#[component]
pub fn ContactSection() -> impl IntoView {
    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let number = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let snapshot = ContactForm {
            name: name.get(),
            email: email.get(),
            number: number.get(),
            message: message.get(),
        };

        let result = form::validate(&snapshot);
        if !result.is_empty() {
            // Entered values stay in place for correction
            log::debug!("contact form rejected: {} invalid fields", result.len());
            errors.set(result);
            return;
        }

        mailer::deliver(&MailMessage::from_form(&snapshot));

        // Clear after submit
        name.set(String::new());
        email.set(String::new());
        number.set(String::new());
        message.set(String::new());
        errors.set(FormErrors::default());
    };

    view! {
        <section class="section contact" id="contact" aria-label="contact">
            <div class="container">
                <div class="contact-intro">
                    <h2 class="section-main-title">"CONTACT"</h2>
                    <p class="section-subtitle-para">
                        "I would love to hear about your project and how I could help. \
                         Please fill the form, and I'll get back to you as soon as possible."
                    </p>
                    <figure class="contact-figure">
                        <img
                            src="/assets/icons/pattern-rings.svg"
                            width="355"
                            height="356"
                            loading="lazy"
                            alt=""
                        />
                    </figure>
                </div>

                <form class="contact-form" novalidate=true on:submit=submit>
                    <TextInput
                        value=name
                        name="name"
                        placeholder="Name"
                        error=Signal::derive(move || errors.get().message(Field::Name))
                    />
                    <TextInput
                        value=email
                        name="email"
                        input_type="email"
                        placeholder="Enter your mail"
                        error=Signal::derive(move || errors.get().message(Field::Email))
                    />
                    <TextInput
                        value=number
                        name="number"
                        input_type="tel"
                        placeholder="Enter your contact number"
                        error=Signal::derive(move || errors.get().message(Field::Number))
                    />
                    <TextArea
                        value=message
                        name="message"
                        placeholder="Message"
                        rows=6
                        error=Signal::derive(move || errors.get().message(Field::Message))
                    />
                    <button type="submit" class="btn btn-primary submit-btn">"Send Message"</button>
                </form>
            </div>
        </section>
    }
}
