mod footer;
mod navbar;

use dioxus::prelude::*;

pub use footer::Footer;
pub use navbar::NavBar;

/// Title block shared by the home page sections
#[component]
pub fn SectionHeader(lead: &'static str, accent: &'static str, subtitle: Option<&'static str>) -> Element {
    rsx! {
        div {
            class: "section-header",
            h2 {
                class: "section-title",
                "{lead} "
                span { class: "gradient-text", "{accent}" }
            }
            div { class: "section-line" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Link that opens in a new browsing context
#[component]
pub fn ExternalLink(
    #[props(into)] href: String,
    #[props(default, into)] class: String,
    #[props(into)] label: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: label,
            {children}
        }
    }
}
