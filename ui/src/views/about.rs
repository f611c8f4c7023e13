use dioxus::prelude::*;

use crate::content::TeamMember;
use crate::i18n::use_locale;
use crate::t;
use crate::Hero;

#[component]
pub fn About() -> Element {
    let locale = use_locale();
    let team: Vec<TeamMember> = locale.list("about.team.members");

    rsx! {
        main { id: "about", class: "page page-about",
            Hero {
                video: "/videos/about-bg.mp4",
                title: t!("about-title"),
                subtitle: t!("about-story-subtitle"),
            }

            section { class: "page-about__story",
                div { class: "split",
                    div {
                        h2 { {t!("about-story-title")} }
                        p { class: "muted", {t!("about-story-description")} }
                        p { class: "muted", {t!("about-story-subtitle")} }
                    }
                    div {
                        img { src: "/images/about/company.jpg", alt: t!("about-company-alt"), class: "rounded-image" }
                    }
                }
            }

            section { class: "page-about__team",
                h2 { {t!("about-team-title")} }
                div { class: "card-grid card-grid--three",
                    for member in team {
                        FlipCard { key: "{member.name}", member }
                    }
                }
            }
        }
    }
}

/// Team card: photo and role on the front, bio on the back. Click flips it.
#[component]
fn FlipCard(member: TeamMember) -> Element {
    let mut flipped = use_signal(|| false);
    let question = t!("about-team-who-is", name = member.name.clone());

    rsx! {
        div { class: "flip-card", onclick: move |_| flipped.toggle(),
            div { class: if flipped() { "flip-card__inner flip-card__inner--flipped" } else { "flip-card__inner" },
                div { class: "flip-card__face",
                    img { src: "{member.photo}", alt: "{member.name}", class: "flip-card__photo" }
                    h6 { class: "flip-card__name", "{member.name}" }
                    p { class: "muted", "{member.job}" }
                }
                div { class: "flip-card__face flip-card__face--back",
                    h6 { class: "flip-card__name", "{question}" }
                    p { class: "muted", "{member.description}" }
                }
            }
        }
    }
}
