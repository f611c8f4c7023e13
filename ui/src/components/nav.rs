use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::t;

/// Destinations reachable from the site chrome. Paths mirror the platform route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Services,
    Portfolio,
    Projects,
    About,
    Contact,
    PrivacyPolicy,
}

impl NavTarget {
    /// Primary menu, in display order.
    pub const MENU: [NavTarget; 6] = [
        NavTarget::Home,
        NavTarget::Services,
        NavTarget::Portfolio,
        NavTarget::Projects,
        NavTarget::About,
        NavTarget::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::Services => "/services",
            NavTarget::Portfolio => "/portfolio",
            NavTarget::Projects => "/projects",
            NavTarget::About => "/about",
            NavTarget::Contact => "/contact",
            NavTarget::PrivacyPolicy => "/privacy-policy",
        }
    }

    pub fn label(self) -> String {
        match self {
            NavTarget::Home => t!("nav-home"),
            NavTarget::Services => t!("nav-services"),
            NavTarget::Portfolio => t!("nav-portfolio"),
            NavTarget::Projects => t!("nav-projects"),
            NavTarget::About => t!("nav-about"),
            NavTarget::Contact => t!("nav-contact"),
            NavTarget::PrivacyPolicy => t!("nav-privacy"),
        }
    }
}

/// Everything a platform needs to render one router-aware link.
#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub target: NavTarget,
    pub label: String,
    pub class: &'static str,
    pub style: String,
    pub onclick: Option<EventHandler<MouseEvent>>,
}

/// Platforms register a `NavBuilder` so `ui` can emit router `Link`s without
/// knowing the platform's `Route` enum.
///
/// Example (in the platform crate):
/// ```ignore
/// fn route_link(link: NavLink) -> Element {
///     let to = match link.target { NavTarget::Home => Route::Home {}, /* ... */ };
///     rsx!( Link { class: link.class, to, "{link.label}" } )
/// }
/// register_nav(NavBuilder { link: route_link });
/// ```
///
/// Without a registered builder, links render as plain anchors (full page loads).
pub struct NavBuilder {
    pub link: fn(NavLink) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

pub fn nav_link(link: NavLink) -> Element {
    if let Some(builder) = NAV_BUILDER.get() {
        return (builder.link)(link);
    }
    let NavLink {
        target,
        label,
        class,
        style,
        onclick,
    } = link;
    rsx! {
        a {
            class,
            style,
            href: target.path(),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            "{label}"
        }
    }
}

/// Shorthand for a link with no click handler.
pub fn simple_link(target: NavTarget, label: String, class: &'static str, style: String) -> Element {
    nav_link(NavLink {
        target,
        label,
        class,
        style,
        onclick: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_paths_are_unique_and_rooted() {
        let mut paths: Vec<_> = NavTarget::MENU.iter().map(|t| t.path()).collect();
        assert!(paths.iter().all(|p| p.starts_with('/')));
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), NavTarget::MENU.len());
    }

    #[test]
    fn section_links_carry_their_name_in_href() {
        for (target, name) in [
            (NavTarget::Services, "services"),
            (NavTarget::Portfolio, "portfolio"),
            (NavTarget::About, "about"),
            (NavTarget::Contact, "contact"),
        ] {
            assert!(target.path().contains(name));
        }
        // Only the portfolio link may match a `portfolio` href selector.
        let matches = NavTarget::MENU
            .iter()
            .filter(|t| t.path().contains("portfolio"))
            .count();
        assert_eq!(matches, 1);
    }
}
