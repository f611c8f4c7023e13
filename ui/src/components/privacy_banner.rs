use dioxus::prelude::*;

use super::nav::{simple_link, NavTarget};
use crate::core::consent::use_consent;
use crate::core::theme::use_theme;
use crate::i18n::use_locale;
use crate::t;

/// One-time cookie/local-storage disclosure pinned to the bottom of the viewport.
#[component]
pub fn PrivacyBanner() -> Element {
    let consent = use_consent();
    let palette = use_theme().palette();
    let _lang = use_locale().current();

    if !consent.is_visible() {
        return rsx! {};
    }

    let accept = move |_| {
        let mut consent = consent.clone();
        consent.accept();
    };

    rsx! {
        div {
            class: "privacy-banner",
            role: "dialog",
            style: "{palette.surface_style()} border-color: {palette.border};",
            div { class: "privacy-banner__inner",
                p { class: "privacy-banner__text", {t!("cookie-description")} }
                div { class: "privacy-banner__actions",
                    {simple_link(
                        NavTarget::PrivacyPolicy,
                        t!("cookie-learn-more"),
                        "privacy-banner__link",
                        format!("color: {};", palette.text),
                    )}
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: accept,
                        {t!("cookie-accept")}
                    }
                }
            }
        }
    }
}
