use super::{Section, SectionPage};
use crate::Session;

pub struct AboutPage<'a> {
    session: &'a Session,
}

impl<'a> AboutPage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl SectionPage for AboutPage<'_> {
    const SECTION: Section = Section::About;

    fn session(&self) -> &Session {
        self.session
    }
}
