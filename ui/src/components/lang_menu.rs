use dioxus::prelude::*;

use crate::core::theme::use_theme;
use crate::i18n::{use_locale, Language};
use crate::t;

/// Globe button with a dropdown of the supported languages.
#[component]
pub fn LanguageMenu(#[props(default)] mobile: bool) -> Element {
    let locale = use_locale();
    let palette = use_theme().palette();
    let mut open = use_signal(|| false);
    let current = locale.current();

    let root_class = if mobile { "lang-menu lang-menu--mobile" } else { "lang-menu" };

    rsx! {
        div { class: root_class,
            button {
                r#type: "button",
                class: "lang-menu__toggle",
                style: "background-color: {palette.button}; color: {palette.icon};",
                aria_label: t!("nav-language-label"),
                aria_expanded: "{open()}",
                onclick: move |_| open.toggle(),
                i { class: "fa-solid fa-globe", aria_hidden: "true" }
                span { "{current.flag()}" }
            }

            if open() {
                // Transparent backdrop: a click anywhere outside the list closes it.
                div { class: "lang-menu__backdrop", onclick: move |_| open.set(false) }
                ul {
                    class: "lang-menu__list",
                    style: "{palette.surface_style()}",
                    {Language::ALL.into_iter().map(|lang| {
                        let mut locale = locale.clone();
                        let class = if lang == current {
                            "lang-menu__option lang-menu__option--active"
                        } else {
                            "lang-menu__option"
                        };
                        rsx! {
                            li { key: "{lang.code()}",
                                button {
                                    r#type: "button",
                                    class,
                                    onclick: move |_| {
                                        locale.set(lang);
                                        open.set(false);
                                    },
                                    span { "{lang.flag()}" }
                                    " {lang.label()}"
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
