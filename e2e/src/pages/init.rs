use super::Section;
use crate::{E2eError, Session};

/// Landing page: the entry point of every navigation scenario.
pub struct InitPage<'a> {
    session: &'a Session,
}

impl<'a> InitPage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn go(&self) -> Result<(), E2eError> {
        self.session.navigate("/").await
    }

    pub async fn select_section(&self, section: Section) -> Result<(), E2eError> {
        self.session.click(&section.nav_selector()).await
    }
}
