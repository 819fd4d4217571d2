use dioxus::prelude::*;

use crate::{
    core::catalog::ProjectRecord,
    ui::{Route, Site, components::SectionHeader},
};

/// Gallery of every catalog project, in catalog order
#[component]
pub fn Projects() -> Element {
    let site = use_context::<Site>();

    rsx! {
        section {
            id: "projects",
            class: "projects section",
            div {
                class: "container",
                SectionHeader {
                    lead: "My",
                    accent: "Projects",
                    subtitle: "Click on any project to see detailed results and findings",
                }
                div {
                    class: "projects-grid",
                    for project in site.catalog.projects() {
                        ProjectCard { key: "{project.id}", project: project.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectCard(project: ProjectRecord) -> Element {
    let site = use_context::<Site>();
    let thumbnail = project
        .thumbnail
        .as_deref()
        .map(|src| site.config.asset_url(src));

    rsx! {
        Link {
            to: Route::ProjectPage { id: project.id.clone() },
            class: "project-card",
            div {
                class: "project-image",
                if let Some(src) = thumbnail {
                    img { src: src, alt: "{project.title}" }
                }
            }
            div {
                class: "project-info",
                h3 { "{project.title}" }
                p { "{project.short_description}" }
                div {
                    class: "project-tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}
