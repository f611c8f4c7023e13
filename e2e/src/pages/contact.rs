use super::{Section, SectionPage};
use crate::Session;

pub struct ContactPage<'a> {
    session: &'a Session,
}

impl<'a> ContactPage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl SectionPage for ContactPage<'_> {
    const SECTION: Section = Section::Contact;

    fn session(&self) -> &Session {
        self.session
    }
}
