use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    core::{content::PROFILE, state::Section},
    ui::{Route, components::ExternalLink},
};

#[component]
pub fn Footer() -> Element {
    let route = use_route::<Route>();
    let on_home = route.is_home();
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "container",
                div {
                    class: "footer-content",
                    div {
                        class: "footer-brand",
                        Link {
                            to: Route::home(),
                            class: "footer-logo",
                            "{PROFILE.name}"
                            span { "." }
                        }
                        p { "{PROFILE.footer_tagline}" }
                    }
                    div {
                        class: "footer-links",
                        h4 { "Quick Links" }
                        ul {
                            for section in Section::NAV {
                                li {
                                    key: "{section.anchor()}",
                                    if on_home {
                                        a { href: section.href(true), "{section.label()}" }
                                    } else {
                                        Link { to: Route::home_section(section), "{section.label()}" }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "footer-social",
                        h4 { "Connect" }
                        div {
                            class: "social-icons",
                            ExternalLink { href: PROFILE.github, label: "GitHub", "GitHub" }
                            ExternalLink { href: PROFILE.linkedin, label: "LinkedIn", "LinkedIn" }
                            a { href: PROFILE.mailto(), aria_label: "Email", "Email" }
                        }
                    }
                }
                div {
                    class: "footer-bottom",
                    p { "© {year} {PROFILE.name}. Made with ♥ using Rust." }
                }
            }
        }
    }
}
