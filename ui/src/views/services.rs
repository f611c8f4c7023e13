use dioxus::prelude::*;

use crate::components::nav::{simple_link, NavTarget};
use crate::content::ServiceCard;
use crate::i18n::use_locale;
use crate::t;
use crate::Hero;

/// Content bundles mark service icons with an emoji; map it to a Font Awesome glyph.
fn service_icon(marker: Option<&str>) -> &'static str {
    match marker {
        Some("📈") => "fa-chart-line",
        Some("🎨") => "fa-palette",
        _ => "fa-laptop-code",
    }
}

#[component]
pub fn Services() -> Element {
    let locale = use_locale();
    let services: Vec<ServiceCard> = locale.list("services.ourServices");

    rsx! {
        main { id: "services", class: "page page-services",
            Hero {
                video: "/videos/service-bg.mp4",
                title: t!("services-title"),
                subtitle: t!("services-subtitle"),
                {simple_link(
                    NavTarget::Contact,
                    t!("services-section-button"),
                    "button button--primary button--pill",
                    String::new(),
                )}
            }

            section { class: "page-services__list",
                div { class: "card-grid card-grid--three",
                    for service in services {
                        div { key: "{service.title}", class: "feature-card",
                            div { class: "feature-card__glow" }
                            div { class: "feature-card__body",
                                i { class: "fa-solid {service_icon(service.icon.as_deref())} feature-card__icon" }
                                h3 { class: "feature-card__title", "{service.title}" }
                                p { class: "feature-card__text", "{service.text}" }
                            }
                        }
                    }
                }
            }

            section { class: "split-cta",
                div { class: "split-cta__inner",
                    div { class: "split-cta__media",
                        img {
                            src: "/images/service-photo.jpg",
                            alt: t!("services-photo-alt"),
                            class: "split-cta__image",
                        }
                    }
                    div { class: "split-cta__copy",
                        h2 { {t!("services-section-title")} }
                        p { {t!("services-section-description")} }
                        {simple_link(
                            NavTarget::Contact,
                            t!("services-section-button"),
                            "button button--light button--pill",
                            String::new(),
                        )}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_markers_map_to_icons() {
        assert_eq!(service_icon(Some("📈")), "fa-chart-line");
        assert_eq!(service_icon(Some("🎨")), "fa-palette");
        assert_eq!(service_icon(Some("💻")), "fa-laptop-code");
    }

    #[test]
    fn unknown_or_missing_marker_falls_back_to_laptop() {
        assert_eq!(service_icon(Some("🚀")), "fa-laptop-code");
        assert_eq!(service_icon(None), "fa-laptop-code");
    }
}
