use dioxus::prelude::*;

use crate::{core::content::PROFILE, ui::components::ExternalLink};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            id: "home",
            class: "hero",
            div {
                class: "hero-content",
                p { class: "hero-greeting", "Hello, I'm" }
                h1 {
                    class: "hero-name",
                    span { class: "gradient-text", "{PROFILE.name}" }
                }
                h2 { class: "hero-title", "{PROFILE.role}" }
                p { class: "hero-description", "{PROFILE.tagline}" }
                div {
                    class: "hero-cta",
                    a { href: "#projects", class: "btn btn-primary", "View My Work" }
                    a { href: "#contact", class: "btn btn-secondary", "Get In Touch" }
                }
                div {
                    class: "hero-socials",
                    ExternalLink { href: PROFILE.github, label: "GitHub Profile", "GitHub" }
                    ExternalLink { href: PROFILE.linkedin, label: "LinkedIn Profile", "LinkedIn" }
                    a { href: PROFILE.mailto(), aria_label: "Email", "Email" }
                }
            }
            div {
                class: "scroll-indicator",
                div { class: "scroll-arrow" }
            }
        }
    }
}
