use dioxus::prelude::*;

use crate::ui::{
    About, Contact, Hero, Projects,
    components::{Footer, NavBar},
    hooks::scroll_to_anchor,
};

/// Home page. A non-empty `section` (the `#fragment` of the route) is
/// scrolled into view once the page has mounted.
#[component]
pub fn Home(section: String) -> Element {
    use_effect(use_reactive!(|section| {
        if !section.is_empty() {
            scroll_to_anchor(&section);
        }
    }));

    rsx! {
        NavBar {}
        main {
            Hero {}
            About {}
            Projects {}
            Contact {}
        }
        Footer {}
    }
}
