use dioxus::prelude::*;

use super::nav::{nav_link, NavLink, NavTarget};
use crate::core::platform;
use crate::core::theme::{use_theme, Palette};
use crate::i18n::use_locale;
use crate::t;

struct SocialLink {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        href: "https://www.google.com/search?q=GgT+Digital",
        label: "Google",
        icon: "fa-google",
    },
    SocialLink {
        href: "https://www.instagram.com/ggt_digital/",
        label: "Instagram",
        icon: "fa-instagram",
    },
    SocialLink {
        href: "https://www.linkedin.com/company/109755566",
        label: "LinkedIn",
        icon: "fa-linkedin-in",
    },
    SocialLink {
        href: "https://ggtdigitals.com/",
        label: "WordPress",
        icon: "fa-wordpress",
    },
];

pub const CONTACT_EMAIL: &str = "ggtdigitals@gmail.com";
pub const CONTACT_PHONE: &str = "+34 676 786 232";

#[component]
pub fn Footer() -> Element {
    let palette = use_theme().palette();
    let locale = use_locale();
    let services: Vec<String> = locale.list("footer.services");
    let year = platform::current_year();
    let text_color = format!("color: {};", palette.text);

    rsx! {
        footer { class: "footer", style: "{palette.surface_style()}",
            div { class: "footer__grid",
                div { class: "footer__column footer__brand",
                    h2 { class: "footer__brand-name", style: "color: {palette.heading};", {t!("brand")} }
                    p { class: "footer__blurb", {t!("footer-brand-description")} }
                    div { class: "footer__socials",
                        for link in SOCIAL_LINKS.iter() {
                            a {
                                key: "{link.label}",
                                class: "footer__social",
                                href: link.href,
                                aria_label: link.label,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                style: "{text_color}",
                                i { class: "fa-brands {link.icon}" }
                            }
                        }
                    }
                }

                FooterColumn { title: t!("footer-fast-links-title"), palette,
                    ul { class: "footer__list",
                        for target in NavTarget::MENU {
                            li { key: "{target.path()}",
                                {nav_link(NavLink {
                                    target,
                                    label: target.label(),
                                    class: "footer__link",
                                    style: text_color.clone(),
                                    onclick: Some(EventHandler::new(|_| platform::scroll_to_top())),
                                })}
                            }
                        }
                    }
                }

                FooterColumn { title: t!("footer-services-title"), palette,
                    ul { class: "footer__list",
                        for service in services {
                            li { key: "{service}", "{service}" }
                        }
                    }
                }

                FooterColumn { title: t!("footer-contact-title"), palette,
                    ul { class: "footer__list",
                        li { "📍 Málaga, " {t!("footer-contact-country")} }
                        li { "📞 {CONTACT_PHONE}" }
                        li { "📧 {CONTACT_EMAIL}" }
                    }
                }
            }

            div {
                class: "footer__bottom",
                style: "border-color: {palette.border};",
                {t!("footer-copyright", year = year)}
            }
        }
    }
}

#[component]
fn FooterColumn(title: String, palette: Palette, children: Element) -> Element {
    rsx! {
        div { class: "footer__column",
            h3 { class: "footer__heading", style: "color: {palette.heading};", "{title}" }
            {children}
        }
    }
}
