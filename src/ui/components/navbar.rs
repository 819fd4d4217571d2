use dioxus::prelude::*;

use crate::{
    core::{
        content::PROFILE,
        state::{NavBarState, Section},
    },
    ui::{Route, Site, hooks::use_window_scroll},
};

/// Top navigation. Section links are in-page anchors on the home page and
/// route back home from anywhere else.
#[component]
pub fn NavBar() -> Element {
    let site = use_context::<Site>();
    let route = use_route::<Route>();
    let on_home = route.is_home();

    let mut nav = use_signal(|| NavBarState::new(site.config.scroll_threshold));
    let offset = use_window_scroll();
    use_effect(move || {
        let y = offset();
        nav.write().on_scroll(y);
    });

    let state = nav();
    let nav_class = if state.is_scrolled() { "navbar scrolled" } else { "navbar" };
    let links_class = if state.is_mobile_menu_open() { "nav-links open" } else { "nav-links" };
    let toggle_icon = if state.is_mobile_menu_open() { "✕" } else { "☰" };

    rsx! {
        nav {
            class: nav_class,
            div {
                class: "navbar-container",
                Link {
                    to: Route::home(),
                    class: "logo",
                    span { class: "logo-text", "{PROFILE.name}" }
                    span { class: "logo-dot", "." }
                }
                ul {
                    class: links_class,
                    for section in Section::NAV {
                        li {
                            key: "{section.anchor()}",
                            if on_home {
                                a {
                                    href: section.href(true),
                                    onclick: move |_| nav.write().close_mobile_menu(),
                                    "{section.label()}"
                                }
                            } else {
                                Link {
                                    to: Route::home_section(section),
                                    onclick: move |_| nav.write().close_mobile_menu(),
                                    "{section.label()}"
                                }
                            }
                        }
                    }
                }
                button {
                    class: "mobile-toggle",
                    aria_label: "Toggle navigation menu",
                    onclick: move |_| nav.write().toggle_mobile_menu(),
                    "{toggle_icon}"
                }
            }
        }
    }
}
