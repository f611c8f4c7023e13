use super::{Section, SectionPage};
use crate::Session;

pub struct PortfolioPage<'a> {
    session: &'a Session,
}

impl<'a> PortfolioPage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl SectionPage for PortfolioPage<'_> {
    const SECTION: Section = Section::Portfolio;

    fn session(&self) -> &Session {
        self.session
    }
}
