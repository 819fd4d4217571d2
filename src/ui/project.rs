use dioxus::prelude::*;
use tracing::debug;

use crate::{
    SiteConfig,
    core::catalog::ProjectRecord,
    ui::{
        Route, Site,
        components::{ExternalLink, Footer, NavBar},
    },
};

/// A results figure with its source already resolved against the asset root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
}

/// The pieces of a project page, in render order
#[derive(Debug, Clone, PartialEq)]
pub enum DetailBlock<'a> {
    Header {
        title: &'a str,
        subtitle: &'a str,
        tags: &'a [String],
    },
    Section {
        heading: &'static str,
        body: &'a str,
        figures: Vec<Figure>,
        /// Rendered with the closing-section emphasis
        highlighted: bool,
    },
    Technologies(&'a [String]),
    Links {
        github: &'a str,
        demo: Option<&'a str>,
    },
}

impl DetailBlock<'_> {
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            DetailBlock::Section { heading, .. } => Some(*heading),
            DetailBlock::Technologies(_) => Some("Technologies Used"),
            _ => None,
        }
    }
}

fn text_section<'a>(heading: &'static str, body: &'a str) -> DetailBlock<'a> {
    DetailBlock::Section {
        heading,
        body,
        figures: Vec::new(),
        highlighted: false,
    }
}

/// Lay out a project page. The conclusion appears only when the record has
/// one and the demo link only when a demo url exists; everything else is
/// unconditional.
pub fn detail_blocks<'a>(project: &'a ProjectRecord, config: &SiteConfig) -> Vec<DetailBlock<'a>> {
    let figures = project
        .results_images
        .iter()
        .enumerate()
        .map(|(index, image)| Figure {
            src: config.asset_url(&image.src),
            alt: image.alt_text(index),
            caption: image.caption.clone(),
        })
        .collect();

    let mut blocks = vec![
        DetailBlock::Header {
            title: &project.title,
            subtitle: &project.subtitle,
            tags: &project.tags,
        },
        text_section("Overview", &project.overview),
        text_section("Problem Statement", &project.problem),
        text_section("Approach & Methodology", &project.approach),
        DetailBlock::Section {
            heading: "Results & Findings",
            body: &project.results,
            figures,
            highlighted: false,
        },
    ];
    if let Some(conclusion) = project.conclusion() {
        blocks.push(DetailBlock::Section {
            heading: "Conclusion",
            body: conclusion,
            figures: Vec::new(),
            highlighted: true,
        });
    }
    blocks.push(DetailBlock::Technologies(&project.technologies));
    blocks.push(DetailBlock::Links {
        github: &project.github,
        demo: project.demo(),
    });
    blocks
}

/// Project detail page for `/project/:id`
#[component]
pub fn ProjectPage(id: String) -> Element {
    let site = use_context::<Site>();

    let Some(project) = site.catalog.find_project(&id).cloned() else {
        debug!(%id, "no project matches route");
        return rsx! {
            NavBar {}
            ProjectNotFound {}
        };
    };

    let config = site.config.as_ref().clone();
    rsx! {
        NavBar {}
        main {
            class: "project-page",
            Link { to: Route::home(), class: "back-link", "← Back to Home" }
            ProjectDetails { project: project, config: config }
        }
        Footer {}
    }
}

/// Shown for `/project/:id` when no record has that id
#[component]
pub fn ProjectNotFound() -> Element {
    rsx! {
        main {
            class: "project-page",
            div {
                class: "not-found",
                h1 { "Project Not Found" }
                p { "The project you're looking for doesn't exist." }
                Link { to: Route::home(), class: "btn btn-primary", "Back to Home" }
            }
        }
    }
}

/// Body of a project page. Needs no router or site context.
#[component]
pub fn ProjectDetails(project: ProjectRecord, config: SiteConfig) -> Element {
    let blocks = detail_blocks(&project, &config);

    rsx! {
        for block in blocks {
            {render_block(block)}
        }
    }
}

fn render_block(block: DetailBlock<'_>) -> Element {
    match block {
        DetailBlock::Header { title, subtitle, tags } => rsx! {
            header {
                class: "project-header",
                h1 { "{title}" }
                p { class: "project-subtitle", "{subtitle}" }
                div {
                    class: "project-tags",
                    for tag in tags {
                        span { key: "{tag}", "{tag}" }
                    }
                }
            }
        },
        DetailBlock::Section {
            heading,
            body,
            figures,
            highlighted,
        } => {
            let class = if highlighted {
                "project-section conclusion"
            } else {
                "project-section"
            };
            rsx! {
                section {
                    class: class,
                    h2 { "{heading}" }
                    div {
                        class: "section-content",
                        p { "{body}" }
                        for fig in figures {
                            figure {
                                class: "result-image",
                                img { src: fig.src, alt: fig.alt }
                                if let Some(caption) = fig.caption {
                                    figcaption { "{caption}" }
                                }
                            }
                        }
                    }
                }
            }
        }
        DetailBlock::Technologies(technologies) => rsx! {
            section {
                class: "project-section",
                h2 { "Technologies Used" }
                div {
                    class: "tech-grid",
                    for tech in technologies {
                        span { class: "tech-badge", "{tech}" }
                    }
                }
            }
        },
        DetailBlock::Links { github, demo } => rsx! {
            section {
                class: "project-links",
                ExternalLink { href: github, class: "btn", "View on GitHub" }
                if let Some(demo) = demo {
                    ExternalLink { href: demo, class: "btn btn-secondary", "Live Demo" }
                }
            }
        },
    }
}
