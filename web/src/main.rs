use dioxus::prelude::*;

use ui::components::{
    register_nav, Footer, NavBuilder, NavLink, NavTarget, Navbar, PrivacyBanner, SiteTitle,
};
use ui::config::SiteConfig;
use ui::core::consent::ConsentContext;
use ui::core::storage::Preferences;
use ui::core::theme::ThemeContext;
use ui::i18n::{self, LocaleContext};
use ui::views::{About, Contact, Home, Portfolio, PrivacyPolicy, Projects, Services};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/services")]
    Services {},
    #[route("/portfolio")]
    Portfolio {},
    #[route("/projects")]
    Projects {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/privacy-policy")]
    PrivacyPolicy {},
}

const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::Services => Route::Services {},
            NavTarget::Portfolio => Route::Portfolio {},
            NavTarget::Projects => Route::Projects {},
            NavTarget::About => Route::About {},
            NavTarget::Contact => Route::Contact {},
            NavTarget::PrivacyPolicy => Route::PrivacyPolicy {},
        }
    }
}

fn route_link(link: NavLink) -> Element {
    let NavLink {
        target,
        label,
        class,
        style,
        onclick,
    } = link;
    rsx! {
        Link {
            class,
            active_class: "active",
            style,
            to: Route::from(target),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            "{label}"
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();
    register_nav(NavBuilder { link: route_link });

    let config = use_context_provider(SiteConfig::from_build_env);
    let prefs = use_context_provider(Preferences::for_platform);
    let default_dark = config.default_dark_mode;
    let default_language = config.default_language;
    {
        let prefs = prefs.clone();
        use_context_provider(move || ThemeContext::new(prefs, default_dark));
    }
    {
        let prefs = prefs.clone();
        use_context_provider(move || ConsentContext::new(prefs));
    }
    use_context_provider(move || LocaleContext::new(prefs, default_language));

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Chrome shared by every page: title, navbar, routed content, footer and the consent banner.
#[component]
fn SiteShell() -> Element {
    rsx! {
        SiteTitle {}
        Navbar {}
        Outlet::<Route> {}
        Footer {}
        PrivacyBanner {}
    }
}
