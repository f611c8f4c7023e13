use dioxus::prelude::*;

use crate::components::nav::{simple_link, NavTarget};
use crate::core::theme::use_theme;
use crate::i18n::use_locale;
use crate::t;

#[component]
pub fn PrivacyPolicy() -> Element {
    let palette = use_theme().palette();
    let locale = use_locale();
    let collected: Vec<String> = locale.list("privacy.dataCollected.items");
    let rights: Vec<String> = locale.list("privacy.userRights.items");
    let heading = format!("color: {};", palette.heading);

    rsx! {
        main { id: "privacy", class: "page page-privacy", style: "{palette.surface_style()}",
            section { class: "page-privacy__hero",
                h1 { class: "fade-in", style: "{heading}", {t!("privacy-title")} }
                p { class: "page-privacy__lead", {t!("privacy-subtitle")} }
            }

            section { class: "page-privacy__content",
                div {
                    h2 { style: "{heading}", {t!("privacy-intro-title")} }
                    p { {t!("privacy-intro-text")} }
                }
                div {
                    h2 { style: "{heading}", {t!("privacy-data-collected-title")} }
                    ul { class: "bullet-list",
                        for item in collected {
                            li { "{item}" }
                        }
                    }
                }
                div {
                    h2 { style: "{heading}", {t!("privacy-data-usage-title")} }
                    p { {t!("privacy-data-usage-text")} }
                }
                div {
                    h2 { style: "{heading}", {t!("privacy-cookies-title")} }
                    p { {t!("privacy-cookies-text")} }
                }
                div {
                    h2 { style: "{heading}", {t!("privacy-user-rights-title")} }
                    ul { class: "bullet-list",
                        for item in rights {
                            li { "{item}" }
                        }
                    }
                }
                div {
                    h2 { style: "{heading}", {t!("privacy-contact-title")} }
                    p {
                        {t!("privacy-contact-text")}
                        " "
                        {simple_link(
                            NavTarget::Contact,
                            t!("privacy-contact-link"),
                            "inline-link",
                            String::new(),
                        )}
                    }
                }
            }
        }
    }
}
