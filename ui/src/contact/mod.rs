//! Contact form draft and its submission state machine.
//!
//! `Editing -> Sending -> Submitted`. A failed send returns to `Editing` with
//! the draft intact; `Submitted` is terminal for the page. While `Sending`,
//! further submits are rejected so a double click cannot send twice.
//!
//! Problems the visitor must see are kept as a [`FormIssue`] and rendered
//! through the translation bundles, never as raw error text.

mod mailer;
pub use mailer::{EmailJsClient, Mailer, SendError, SiteMailer, Unconfigured};

use dioxus::logger::tracing::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::t;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Mirrors the `required` attribute on all three inputs.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Sending,
    Submitted,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("all fields are required")]
    Incomplete,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the message was already sent")]
    AlreadySubmitted,
}

/// Visitor-facing problem shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIssue {
    /// A field is empty or whitespace only.
    Incomplete,
    NotConfigured,
    DeliveryFailed,
}

impl FormIssue {
    pub fn message(self) -> String {
        match self {
            FormIssue::Incomplete => t!("contact-error-incomplete"),
            FormIssue::NotConfigured => t!("contact-error-not-configured"),
            FormIssue::DeliveryFailed => t!("contact-error-delivery"),
        }
    }
}

impl From<&SendError> for FormIssue {
    fn from(err: &SendError) -> Self {
        match err {
            SendError::NotConfigured => FormIssue::NotConfigured,
            SendError::Transport(_) | SendError::Rejected { .. } => FormIssue::DeliveryFailed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    phase: SubmitPhase,
    last_error: Option<FormIssue>,
}

impl ContactForm {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    pub fn last_error(&self) -> Option<FormIssue> {
        self.last_error
    }

    /// Enter `Sending` and hand back the draft to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactDraft, SubmitRejected> {
        match self.phase {
            SubmitPhase::Sending => return Err(SubmitRejected::InFlight),
            SubmitPhase::Submitted => return Err(SubmitRejected::AlreadySubmitted),
            SubmitPhase::Editing => {}
        }
        if !self.draft.is_complete() {
            self.last_error = Some(FormIssue::Incomplete);
            return Err(SubmitRejected::Incomplete);
        }
        self.phase = SubmitPhase::Sending;
        self.last_error = None;
        Ok(self.draft.clone())
    }

    /// Apply the delivery outcome. Ignored unless a submission is in flight.
    pub fn complete(&mut self, outcome: Result<(), SendError>) {
        if self.phase != SubmitPhase::Sending {
            return;
        }
        match outcome {
            Ok(()) => self.phase = SubmitPhase::Submitted,
            Err(err) => {
                self.phase = SubmitPhase::Editing;
                self.last_error = Some(FormIssue::from(&err));
            }
        }
    }
}

/// One delivery attempt. On failure the raw error is logged and the visitor
/// is told through `alert` with the localized notice.
pub async fn deliver<M: Mailer>(
    mailer: &M,
    draft: &ContactDraft,
    alert: impl FnOnce(&str),
) -> Result<(), SendError> {
    let outcome = mailer.send(draft).await;
    match &outcome {
        Ok(()) => info!("contact message delivered"),
        Err(err) => {
            warn!("contact message failed: {err}");
            alert(&t!("contact-error-alert"));
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakeMailer {
        succeed: bool,
        calls: Cell<u32>,
    }

    impl FakeMailer {
        fn new(succeed: bool) -> Self {
            Self {
                succeed,
                calls: Cell::new(0),
            }
        }
    }

    impl Mailer for FakeMailer {
        async fn send(&self, _draft: &ContactDraft) -> Result<(), SendError> {
            self.calls.set(self.calls.get() + 1);
            if self.succeed {
                Ok(())
            } else {
                Err(SendError::Rejected {
                    status: 500,
                    body: "boom".into(),
                })
            }
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            draft: ContactDraft {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                message: "I need a website".into(),
            },
            ..ContactForm::default()
        }
    }

    fn run(form: &mut ContactForm, mailer: &FakeMailer) {
        let draft = form.begin_submit().unwrap();
        let outcome = block_on(mailer.send(&draft));
        form.complete(outcome);
    }

    #[test]
    fn successful_send_reaches_submitted() {
        let mut form = filled();
        let mailer = FakeMailer::new(true);
        run(&mut form, &mailer);
        assert!(form.is_submitted());
        assert_eq!(mailer.calls.get(), 1);
        assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitted));
    }

    #[test]
    fn failed_send_keeps_draft_editable() {
        let mut form = filled();
        let before = form.draft.clone();
        run(&mut form, &FakeMailer::new(false));
        assert_eq!(form.phase(), SubmitPhase::Editing);
        assert_eq!(form.draft, before);
        assert_eq!(form.last_error(), Some(FormIssue::DeliveryFailed));

        // Manual retry is allowed and clears the error.
        run(&mut form, &FakeMailer::new(true));
        assert!(form.is_submitted());
        assert!(form.last_error().is_none());
    }

    #[test]
    fn incomplete_draft_is_rejected_without_sending() {
        let mut form = filled();
        form.draft.message = "   ".into();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Incomplete));
        assert_eq!(form.phase(), SubmitPhase::Editing);
        assert_eq!(form.last_error(), Some(FormIssue::Incomplete));
    }

    #[test]
    fn issue_clears_once_the_draft_is_fixed() {
        let mut form = filled();
        form.draft.name = "   ".into();
        assert!(form.begin_submit().is_err());
        form.draft.name = "Ana".into();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.last_error(), None);
    }

    #[test]
    fn send_errors_map_to_issue_kinds() {
        assert_eq!(FormIssue::from(&SendError::NotConfigured), FormIssue::NotConfigured);
        let rejected = SendError::Rejected {
            status: 400,
            body: "The user_id parameter is required".into(),
        };
        assert_eq!(FormIssue::from(&rejected), FormIssue::DeliveryFailed);
    }

    #[test]
    fn issues_render_from_the_bundle() {
        i18n::init();
        for (issue, key) in [
            (FormIssue::Incomplete, "contact-error-incomplete"),
            (FormIssue::NotConfigured, "contact-error-not-configured"),
            (FormIssue::DeliveryFailed, "contact-error-delivery"),
        ] {
            let text = issue.message();
            assert_eq!(text, i18n::text(key));
            assert_ne!(text, key, "{key} missing from the bundle");
        }
    }

    #[test]
    fn provider_failure_raises_one_alert() {
        i18n::init();
        let alerts = RefCell::new(Vec::new());
        let mut form = filled();
        let draft = form.begin_submit().unwrap();

        let outcome = block_on(deliver(&FakeMailer::new(false), &draft, |msg| {
            alerts.borrow_mut().push(msg.to_string())
        }));
        form.complete(outcome);

        assert_eq!(*alerts.borrow(), vec![i18n::text("contact-error-alert")]);
        assert_eq!(form.phase(), SubmitPhase::Editing);
    }

    #[test]
    fn successful_delivery_stays_silent() {
        let alerts = RefCell::new(Vec::<String>::new());
        let draft = filled().draft;
        let outcome = block_on(deliver(&FakeMailer::new(true), &draft, |msg| {
            alerts.borrow_mut().push(msg.to_string())
        }));
        assert!(outcome.is_ok());
        assert!(alerts.borrow().is_empty());
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert!(form.is_sending());
    }

    #[test]
    fn cannot_be_submitted_without_a_send_attempt() {
        let mut form = filled();
        form.complete(Ok(()));
        assert_eq!(form.phase(), SubmitPhase::Editing);
    }
}
