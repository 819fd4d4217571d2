use dioxus::prelude::*;
use tracing::debug;

use crate::{
    core::{
        content::CONTACT_CHANNELS,
        state::{ContactField, ContactForm, ContactRelay, SimulatedRelay, SubmitStatus},
    },
    ui::{Site, components::SectionHeader},
};

/// Contact form plus direct contact channels. Submissions go through the
/// simulated relay; nothing leaves the process.
#[component]
pub fn Contact() -> Element {
    let site = use_context::<Site>();
    let relay = use_hook(|| SimulatedRelay::new(site.config.submit_delay()));
    let mut form = use_signal(ContactForm::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let started = form.write().begin_submit();
        match started {
            Ok(submission) => {
                spawn(async move {
                    let outcome = relay.deliver(submission).await;
                    form.write().finish_submit(outcome);
                });
            }
            Err(err) => debug!(error = %err, "contact submission refused"),
        }
    };

    let current = form.read().clone();
    let data = current.data();
    let submitting = current.is_submitting();

    rsx! {
        section {
            id: "contact",
            class: "contact section",
            div {
                class: "container",
                SectionHeader {
                    lead: "Get In",
                    accent: "Touch",
                    subtitle: "Have a project in mind? Let's work together!",
                }
                div {
                    class: "contact-content",
                    form {
                        class: "contact-form",
                        onsubmit: onsubmit,
                        div {
                            class: "form-group",
                            label { r#for: "name", "Name" }
                            input {
                                r#type: "text",
                                id: "name",
                                name: "name",
                                placeholder: "Your name",
                                required: true,
                                value: "{data.name}",
                                oninput: move |e| form.write().set_field(ContactField::Name, e.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "email", "Email" }
                            input {
                                r#type: "email",
                                id: "email",
                                name: "email",
                                placeholder: "your.email@example.com",
                                required: true,
                                value: "{data.email}",
                                oninput: move |e| form.write().set_field(ContactField::Email, e.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "message", "Message" }
                            textarea {
                                id: "message",
                                name: "message",
                                placeholder: "Tell me about your project...",
                                rows: "5",
                                required: true,
                                value: "{data.message}",
                                oninput: move |e| form.write().set_field(ContactField::Message, e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting,
                            if submitting { "Sending..." } else { "Send Message" }
                        }
                        if *current.status() == SubmitStatus::Success {
                            p { class: "success-message", "Message sent successfully!" }
                        }
                        if let SubmitStatus::Failed(reason) = current.status() {
                            p { class: "error-message", "Message could not be sent: {reason}" }
                        }
                    }
                    div {
                        class: "contact-info",
                        h3 { "Contact Information" }
                        p { class: "contact-intro", "Feel free to reach out through any of these channels:" }
                        div {
                            class: "info-list",
                            for channel in CONTACT_CHANNELS {
                                div {
                                    key: "{channel.label}",
                                    class: "info-item",
                                    div {
                                        class: "info-content",
                                        span { class: "info-label", "{channel.label}" }
                                        if let Some(href) = channel.href {
                                            a {
                                                href: href,
                                                target: "_blank",
                                                rel: "noopener noreferrer",
                                                "{channel.value}"
                                            }
                                        } else {
                                            span { "{channel.value}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
