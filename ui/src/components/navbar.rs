use dioxus::prelude::*;

use super::lang_menu::LanguageMenu;
use super::nav::{nav_link, NavLink, NavTarget};
use crate::core::platform;
use crate::core::theme::use_theme;
use crate::i18n::use_locale;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Duration of the mobile menu slide-up before it unmounts.
const MOBILE_CLOSE_MS: u32 = 300;

#[component]
pub fn Navbar() -> Element {
    let mut theme = use_theme();
    let palette = theme.palette();
    let dark = theme.is_dark();
    // Subscribe to language changes so labels refresh.
    let _lang = use_locale().current();
    let mut menu_open = use_signal(|| false);

    let brand = nav_link(NavLink {
        target: NavTarget::Home,
        label: t!("brand"),
        class: "navbar__brand",
        style: format!("color: {};", palette.heading),
        onclick: None,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            style: "{palette.surface_style()}",
            div { class: "navbar__inner",
                {brand}

                div { class: "navbar__actions",
                    nav { class: "navbar__links",
                        for target in NavTarget::MENU {
                            {nav_link(NavLink {
                                target,
                                label: target.label(),
                                class: "navbar__link",
                                style: format!("color: {};", palette.text),
                                onclick: None,
                            })}
                        }
                        LanguageMenu {}
                    }

                    button {
                        r#type: "button",
                        class: "navbar__theme-toggle",
                        style: "background-color: {palette.input_bg}; color: {palette.text};",
                        aria_label: t!("nav-toggle-theme"),
                        onclick: move |_| theme.toggle(),
                        if dark {
                            i { class: "fa-solid fa-sun navbar__sun" }
                        } else {
                            i { class: "fa-solid fa-moon" }
                        }
                    }

                    button {
                        r#type: "button",
                        class: if menu_open() { "navbar__burger navbar__burger--open" } else { "navbar__burger" },
                        aria_label: t!("nav-open-menu"),
                        onclick: move |_| menu_open.toggle(),
                        for _ in 0..3 {
                            span { class: "navbar__burger-bar", style: "background-color: {palette.text};" }
                        }
                    }
                }
            }

            if menu_open() {
                MobileMenu { on_close: move |_| menu_open.set(false) }
            }
        }
    }
}

#[component]
fn MobileMenu(on_close: EventHandler<()>) -> Element {
    let palette = use_theme().palette();
    let mut closing = use_signal(|| false);

    let close = move |_: MouseEvent| {
        if closing() {
            return;
        }
        closing.set(true);
        spawn(async move {
            platform::sleep_ms(MOBILE_CLOSE_MS).await;
            on_close.call(());
        });
    };

    rsx! {
        div {
            class: if closing() { "navbar__mobile navbar__mobile--closing" } else { "navbar__mobile" },
            style: "{palette.surface_style()}",
            button {
                r#type: "button",
                class: "navbar__mobile-close",
                style: "color: {palette.text};",
                aria_label: t!("nav-close-menu"),
                onclick: close,
                i { class: "fa-solid fa-xmark" }
            }

            nav { class: "navbar__mobile-links",
                for target in NavTarget::MENU {
                    {nav_link(NavLink {
                        target,
                        label: target.label(),
                        class: "navbar__mobile-link",
                        style: format!("color: {};", palette.text),
                        onclick: Some(EventHandler::new(close)),
                    })}
                }
            }

            div { class: "navbar__mobile-locale",
                LanguageMenu { mobile: true }
            }
        }
    }
}
