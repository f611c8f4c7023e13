//! Page objects: intent-level operations over a [`Session`](crate::Session).

mod about;
mod contact;
mod init;
mod portfolio;
mod services;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use init::InitPage;
pub use portfolio::PortfolioPage;
pub use services::ServicesPage;

use crate::{E2eError, Session};

/// Sections reachable from the main navigation that the suite walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Services,
    Portfolio,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Services,
        Section::Portfolio,
        Section::About,
        Section::Contact,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Navigation link whose `href` mentions the section.
    pub fn nav_selector(self) -> String {
        format!(r#"nav a[href*="{}"]"#, self.slug())
    }

    /// Root element of the section's page view.
    pub fn root_selector(self) -> String {
        format!("#{}", self.slug())
    }
}

/// A page whose presence is signalled by one root section.
#[allow(async_fn_in_trait)]
pub trait SectionPage {
    const SECTION: Section;

    fn session(&self) -> &Session;

    async fn wait_until_section_is_displayed(&self) -> Result<bool, E2eError> {
        self.session()
            .wait_until_displayed(&Self::SECTION.root_selector())
            .await
    }
}

/// Waits on the page object that owns `section`.
pub async fn wait_for_section(session: &Session, section: Section) -> Result<bool, E2eError> {
    match section {
        Section::Services => ServicesPage::new(session).wait_until_section_is_displayed().await,
        Section::Portfolio => PortfolioPage::new(session).wait_until_section_is_displayed().await,
        Section::About => AboutPage::new(session).wait_until_section_is_displayed().await,
        Section::Contact => ContactPage::new(session).wait_until_section_is_displayed().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_follow_the_section_slug() {
        assert_eq!(Section::Services.nav_selector(), r#"nav a[href*="services"]"#);
        assert_eq!(Section::Contact.root_selector(), "#contact");
    }

    #[test]
    fn sections_are_walked_in_menu_order() {
        let slugs: Vec<_> = Section::ALL.iter().map(|s| s.slug()).collect();
        assert_eq!(slugs, ["services", "portfolio", "about", "contact"]);
    }

    #[test]
    fn pages_bind_to_their_section() {
        assert_eq!(ServicesPage::SECTION, Section::Services);
        assert_eq!(PortfolioPage::SECTION, Section::Portfolio);
        assert_eq!(AboutPage::SECTION, Section::About);
        assert_eq!(ContactPage::SECTION, Section::Contact);
    }
}
