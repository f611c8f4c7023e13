use super::{Section, SectionPage};
use crate::Session;

pub struct ServicesPage<'a> {
    session: &'a Session,
}

impl<'a> ServicesPage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl SectionPage for ServicesPage<'_> {
    const SECTION: Section = Section::Services;

    fn session(&self) -> &Session {
        self.session
    }
}
