mod about;
pub mod components;
mod contact;
mod hero;
mod home;
mod hooks;
mod project;
mod projects;

use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    SiteConfig,
    core::{catalog::Catalog, state::Section},
};

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use home::Home;
pub use project::{
    DetailBlock, Figure, ProjectDetails, ProjectDetailsProps, ProjectNotFound, ProjectPage,
    detail_blocks,
};
pub use projects::{ProjectCard, Projects};

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/#:section")]
    Home { section: String },
    #[route("/project/:id")]
    ProjectPage { id: String },
}

impl Route {
    /// Top of the home page
    pub fn home() -> Self {
        Route::Home {
            section: String::new(),
        }
    }

    /// Home page scrolled to `section` once it mounts
    pub fn home_section(section: Section) -> Self {
        Route::Home {
            section: section.anchor().to_string(),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home { .. })
    }
}

/// Read-only data shared with every view through the root context
#[derive(Debug, Clone)]
pub struct Site {
    pub catalog: Arc<Catalog>,
    pub config: Arc<SiteConfig>,
}

impl Site {
    pub fn new(catalog: Catalog, config: SiteConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        div {
            class: "app",
            Router::<Route> {}
        }
    }
}
