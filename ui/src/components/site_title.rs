use dioxus::prelude::*;

use crate::i18n::use_locale;

/// Localized document title. Subscribes the caller to language changes.
pub fn use_site_title() -> String {
    use_locale().text("site-title")
}

#[component]
pub fn SiteTitle() -> Element {
    let title = use_site_title();
    rsx! {
        document::Title { "{title}" }
    }
}
