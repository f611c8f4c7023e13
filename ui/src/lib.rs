//! Shared UI crate for the GgT Digital site: views, chrome, theme, i18n and the contact form.

pub mod config;
pub mod contact;
pub mod content;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Route-agnostic links (components/nav.rs)
    pub mod nav;
    pub use nav::{register_nav, NavBuilder, NavLink, NavTarget};

    pub mod footer;
    pub mod lang_menu;
    pub mod navbar;
    pub mod privacy_banner;
    pub mod site_title;

    pub use footer::Footer;
    pub use lang_menu::LanguageMenu;
    pub use navbar::Navbar;
    pub use privacy_banner::PrivacyBanner;
    pub use site_title::{use_site_title, SiteTitle};
}

mod hero;
pub use hero::Hero;

use dioxus::prelude::*;

/// Shared site stylesheet; platforms link it once at the root.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
