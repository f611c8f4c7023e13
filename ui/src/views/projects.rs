use dioxus::prelude::*;

use crate::components::nav::{simple_link, NavTarget};
use crate::content::Project;
use crate::i18n::use_locale;
use crate::t;

#[component]
pub fn Projects() -> Element {
    let locale = use_locale();
    let projects: Vec<Project> = locale.list("projects.list");

    rsx! {
        main { id: "projects", class: "page page-projects",
            section { class: "hero hero--short",
                img {
                    src: "/images/projects-bg.jpg",
                    alt: t!("projects-hero-alt"),
                    class: "hero__video",
                }
                div { class: "hero__overlay hero__overlay--deep" }
                div { class: "hero__content fade-in",
                    h1 { class: "hero__title", {t!("projects-title")} }
                    p { class: "hero__subtitle", {t!("projects-subtitle")} }
                }
            }

            section { class: "page-projects__list",
                div { class: "card-grid card-grid--two",
                    for project in projects {
                        ProjectCard { key: "{project.title}", project }
                    }
                }
            }

            section { class: "banner-cta",
                div { class: "banner-cta__inner",
                    h2 { class: "banner-cta__title", {t!("projects-cta-title")} }
                    {simple_link(
                        NavTarget::Contact,
                        t!("projects-cta-button"),
                        "button button--light button--pill",
                        String::new(),
                    )}
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        article { class: "project-card",
            img { src: "{project.image}", alt: "{project.title}", class: "project-card__image" }
            div { class: "project-card__body",
                h3 { class: "project-card__title", "{project.title}" }
                p { class: "project-card__text", "{project.description}" }
                div { class: "project-card__tags",
                    for tech in project.technologies.iter() {
                        span { class: "tag", "{tech}" }
                    }
                }
                if let Some(link) = project.link.as_ref() {
                    a {
                        class: "button button--accent button--pill",
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!("portfolio-view-project")}
                    }
                }
            }
        }
    }
}
