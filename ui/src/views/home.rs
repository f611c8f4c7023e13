use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::nav::{simple_link, NavTarget};
use crate::content::ServiceCard;
use crate::core::theme::use_theme;
use crate::i18n::use_locale;
use crate::t;
use crate::Hero;

const DEFAULT_CARD_ICON: &str = "fa-bolt";

fn card_icon(card: &ServiceCard) -> &str {
    card.icon.as_deref().unwrap_or(DEFAULT_CARD_ICON)
}

#[component]
pub fn Home() -> Element {
    let palette = use_theme().palette();
    let locale = use_locale();
    let lang = locale.current();
    // Re-parsed only when the language changes.
    let cards = use_memo(move || locale.list::<ServiceCard>("home.cards"));

    debug!("Home render (lang={lang})");

    rsx! {
        main { id: "home", class: "page page-home", style: "{palette.surface_style()}",
            Hero {
                video: "/videos/corporate-bg.mp4",
                title: t!("home-title"),
                subtitle: t!("home-subtitle"),
                overlay: format!("linear-gradient(to bottom, rgba(0,0,0,0.7), {}80, transparent)", palette.card_bg),
                title_color: palette.heading,
            }

            section { class: "page-home__services",
                div { class: "card-grid card-grid--three",
                    for card in cards.read().iter() {
                        div {
                            key: "{card.title}",
                            class: "service-card",
                            style: "{palette.surface_style()} border-color: {palette.border};",
                            i { class: "fa-solid {card_icon(card)} service-card__icon", style: "color: {palette.button};" }
                            h3 { class: "service-card__title", style: "color: {palette.heading};", "{card.title}" }
                            p { class: "service-card__text", "{card.text}" }
                        }
                    }
                }
            }

            section { class: "cta",
                video {
                    class: "hero__video",
                    autoplay: true,
                    r#loop: true,
                    muted: true,
                    playsinline: true,
                    preload: "metadata",
                    source { src: "/videos/cta-bg.mp4", r#type: "video/mp4" }
                }
                div {
                    class: "hero__overlay",
                    style: "background: linear-gradient(to top, {palette.card_bg}cc, rgba(0,0,0,0.4), transparent);",
                }
                div { class: "cta__content",
                    p { class: "cta__tagline", style: "color: {palette.button};", {t!("home-section-tagline")} }
                    h2 { class: "cta__title", style: "color: {palette.heading};", {t!("home-section-title")} }
                    p { class: "cta__text", {t!("home-section-description")} }
                    {simple_link(
                        NavTarget::Contact,
                        t!("home-section-button"),
                        "button button--primary button--pill",
                        format!("background-color: {}; color: {};", palette.button, palette.text),
                    )}
                }
            }
        }
    }
}
