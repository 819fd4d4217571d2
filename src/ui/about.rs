use dioxus::prelude::*;

use crate::{
    core::{
        content::{ABOUT_BIO, ABOUT_INTRO, EXPERIENCE, SKILLS, STATS},
        state::Accordion,
    },
    ui::components::SectionHeader,
};

/// Bio, quick stats, experience accordion and skills grid
#[component]
pub fn About() -> Element {
    let mut accordion = use_signal(Accordion::default);
    let open = accordion();

    let panels: Vec<_> = EXPERIENCE
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let expanded = open.is_expanded(index);
            let class = if expanded { "experience-item open" } else { "experience-item" };
            (index, entry, expanded, class)
        })
        .collect();

    rsx! {
        section {
            id: "about",
            class: "about section",
            div {
                class: "container",
                SectionHeader { lead: "About", accent: "Me" }
                div {
                    class: "about-content",
                    div {
                        class: "about-text",
                        p { class: "about-intro", "{ABOUT_INTRO}" }
                        for paragraph in ABOUT_BIO {
                            p { "{paragraph}" }
                        }
                        div {
                            class: "about-stats",
                            for stat in STATS {
                                div {
                                    key: "{stat.label}",
                                    class: "stat",
                                    span { class: "stat-number", "{stat.value}" }
                                    span { class: "stat-label", "{stat.label}" }
                                }
                            }
                        }
                    }
                    div {
                        class: "about-experience",
                        h3 { "Experience" }
                        for (index, entry, expanded, class) in panels {
                            div {
                                key: "{index}",
                                class: class,
                                button {
                                    class: "experience-toggle",
                                    aria_expanded: expanded,
                                    onclick: move |_| accordion.write().toggle(index),
                                    span { class: "experience-role", "{entry.role}" }
                                    span { class: "experience-org", "{entry.organization}" }
                                    span { class: "experience-period", "{entry.period}" }
                                }
                                if expanded {
                                    div {
                                        class: "experience-body",
                                        p { "{entry.summary}" }
                                        ul {
                                            for highlight in entry.highlights {
                                                li { "{highlight}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "about-skills",
                        h3 { "Technical Skills" }
                        div {
                            class: "skills-grid",
                            for skill in SKILLS {
                                div {
                                    key: "{skill.name}",
                                    class: "skill-card",
                                    span { class: "skill-name", "{skill.name}" }
                                    div {
                                        class: "skill-bar",
                                        div {
                                            class: "skill-progress",
                                            style: "width: {skill.level}%",
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
