//! Tests for the project detail page.
//!
//! Tests cover:
//! - Section order and the optional conclusion
//! - Results figures in source order with caption fallbacks
//! - GitHub link always present, demo link only when the record has one
//! - Server-side rendering of the page body
//! - The not-found page for unknown ids, rendered through the router

mod common;

use std::rc::Rc;

use common::*;
use dioxus::history::{History, MemoryHistory};
use dioxus::prelude::*;
use portfolio::ui::{DetailBlock, ProjectDetails, ProjectDetailsProps, detail_blocks};
use portfolio::{App, Site};

fn headings(blocks: &[DetailBlock<'_>]) -> Vec<&'static str> {
    blocks.iter().filter_map(|block| block.heading()).collect()
}

fn links<'a>(blocks: &[DetailBlock<'a>]) -> (&'a str, Option<&'a str>) {
    blocks
        .iter()
        .find_map(|block| match block {
            DetailBlock::Links { github, demo } => Some((*github, *demo)),
            _ => None,
        })
        .expect("Every page should end with a links block")
}

fn render_details(project: ProjectRecord) -> String {
    let props = ProjectDetailsProps::builder()
        .project(project)
        .config(SiteConfig::default())
        .build();
    let mut dom = VirtualDom::new_with_props(ProjectDetails, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render the whole app at `path`, the way the desktop launcher would
fn render_route(path: &str) -> String {
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
    let mut dom = VirtualDom::new(App)
        .with_root_context(Site::new(embedded_catalog(), SiteConfig::default()))
        .with_root_context(history);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_lausd_page_shows_conclusion() {
    let project = embedded_project("lausd-edulytix");
    let blocks = detail_blocks(&project, &SiteConfig::default());

    assert_eq!(
        headings(&blocks),
        vec![
            "Overview",
            "Problem Statement",
            "Approach & Methodology",
            "Results & Findings",
            "Conclusion",
            "Technologies Used",
        ]
    );
}

#[test]
fn test_lausd_results_figures_in_source_order() {
    let project = embedded_project("lausd-edulytix");
    let blocks = detail_blocks(&project, &SiteConfig::default());

    let figures = blocks
        .iter()
        .find_map(|block| match block {
            DetailBlock::Section {
                heading: "Results & Findings",
                figures,
                ..
            } => Some(figures.clone()),
            _ => None,
        })
        .expect("Results section should exist");

    let sources: Vec<&str> = figures.iter().map(|f| f.src.as_str()).collect();
    assert_eq!(
        sources,
        vec!["/images/participation_rate.png", "/images/best_predictors.png"]
    );
    assert!(figures.iter().all(|f| f.caption.is_some()));
    assert!(figures[0].alt.starts_with("Participation Rate"));
}

#[test]
fn test_page_without_conclusion_skips_section() {
    let project = embedded_project("project-3");
    let blocks = detail_blocks(&project, &SiteConfig::default());

    assert!(!headings(&blocks).contains(&"Conclusion"));
}

#[test]
fn test_demo_link_only_when_present() {
    let placeholder = embedded_project("project-3");
    let blocks = detail_blocks(&placeholder, &SiteConfig::default());
    let (github, demo) = links(&blocks);
    assert_eq!(github, "https://github.com/yourusername/project-3");
    assert_eq!(demo, Some("https://your-demo-link.com"));

    let lausd = embedded_project("lausd-edulytix");
    let blocks = detail_blocks(&lausd, &SiteConfig::default());
    let (github, demo) = links(&blocks);
    assert_eq!(github, "https://github.com/Damirchik11/Comp641");
    assert_eq!(demo, None);
}

#[test]
fn test_uncaptioned_figure_gets_numbered_alt_text() {
    let record = make_record("alpha");
    let config = SiteConfig {
        asset_root: "https://cdn.example.com/".to_string(),
        ..SiteConfig::default()
    };
    let blocks = detail_blocks(&record, &config);

    let figure = blocks
        .iter()
        .find_map(|block| match block {
            DetailBlock::Section { figures, .. } if !figures.is_empty() => Some(figures[0].clone()),
            _ => None,
        })
        .expect("Fixture has one figure");

    assert_eq!(figure.src, "https://cdn.example.com/images/figure.png");
    assert_eq!(figure.alt, "Results visualization 1");
    assert_eq!(figure.caption, None);
}

#[test]
fn test_technologies_are_not_deduplicated() {
    let record = make_record("alpha");
    let blocks = detail_blocks(&record, &SiteConfig::default());

    let technologies = blocks
        .iter()
        .find_map(|block| match block {
            DetailBlock::Technologies(list) => Some(*list),
            _ => None,
        })
        .expect("Technologies block should exist");
    assert_eq!(technologies.len(), 2);
}

#[test]
fn test_rendered_lausd_page() {
    let html = render_details(embedded_project("lausd-edulytix"));

    assert!(html.contains("LAUSD Edulytix"));
    assert!(html.contains("Conclusion"));
    assert!(html.contains("View on GitHub"));
    assert!(!html.contains("Live Demo"));

    let first = html
        .find("/images/participation_rate.png")
        .expect("First figure should render");
    let second = html
        .find("/images/best_predictors.png")
        .expect("Second figure should render");
    assert!(first < second, "Figures should keep source order");
}

#[test]
fn test_rendered_placeholder_page() {
    let html = render_details(embedded_project("project-3"));

    assert!(html.contains("Live Demo"));
    assert!(html.contains("https://your-demo-link.com"));
    assert!(!html.contains("Conclusion"));
}

#[test]
fn test_only_conclusion_is_highlighted() {
    let project = embedded_project("lausd-edulytix");
    let blocks = detail_blocks(&project, &SiteConfig::default());

    let highlighted: Vec<&str> = blocks
        .iter()
        .filter_map(|block| match block {
            DetailBlock::Section {
                heading,
                highlighted: true,
                ..
            } => Some(*heading),
            _ => None,
        })
        .collect();
    assert_eq!(highlighted, vec!["Conclusion"]);

    let html = render_details(project);
    assert_eq!(html.matches("project-section conclusion").count(), 1);
}

#[test]
fn test_unknown_project_renders_not_found() {
    let html = render_route("/project/does-not-exist");

    assert!(html.contains("Project Not Found"));
    assert!(html.contains("Back to Home"));
    assert!(html.contains(r#"href="/""#), "Back link should point home");
    assert!(!html.contains("project-header"), "No detail body for a miss");
    assert!(!html.contains("class=\"footer\""), "Not-found page has no footer");
}

#[test]
fn test_known_project_renders_through_router() {
    let html = render_route("/project/lausd-edulytix");

    assert!(html.contains("LAUSD Edulytix"));
    assert!(!html.contains("Project Not Found"));
    assert!(html.contains("class=\"footer\""));
}
