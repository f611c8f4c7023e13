//! Outbound delivery of contact submissions through the EmailJS REST API.

use serde::Serialize;
use thiserror::Error;

use super::ContactDraft;
use crate::config::EmailJsConfig;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("email delivery is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Something that can deliver a contact draft. One attempt per call, no retries.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(&self, draft: &ContactDraft) -> Result<(), SendError>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactDraft,
}

#[derive(Debug, Clone)]
pub struct EmailJsClient {
    config: EmailJsConfig,
    http: reqwest::Client,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

impl Mailer for EmailJsClient {
    async fn send(&self, draft: &ContactDraft) -> Result<(), SendError> {
        let body = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: draft,
        };
        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(SendError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Mailer used when no credentials were configured at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl Mailer for Unconfigured {
    async fn send(&self, _draft: &ContactDraft) -> Result<(), SendError> {
        Err(SendError::NotConfigured)
    }
}

/// The configured client, or [`Unconfigured`].
#[derive(Debug, Clone)]
pub enum SiteMailer {
    EmailJs(EmailJsClient),
    Unconfigured(Unconfigured),
}

impl SiteMailer {
    pub fn from_config(config: Option<EmailJsConfig>) -> Self {
        match config {
            Some(cfg) => Self::EmailJs(EmailJsClient::new(cfg)),
            None => Self::Unconfigured(Unconfigured),
        }
    }
}

impl Mailer for SiteMailer {
    async fn send(&self, draft: &ContactDraft) -> Result<(), SendError> {
        match self {
            Self::EmailJs(client) => client.send(draft).await,
            Self::Unconfigured(none) => none.send(draft).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_emailjs_shape() {
        let draft = ContactDraft {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            message: "Hola".into(),
        };
        let body = EmailJsRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "pub",
            template_params: &draft,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pub",
                "template_params": {
                    "name": "Ana",
                    "email": "ana@example.com",
                    "message": "Hola"
                }
            })
        );
    }

    #[test]
    fn unconfigured_mailer_always_fails() {
        let outcome = futures::executor::block_on(SiteMailer::from_config(None).send(&ContactDraft::default()));
        assert!(matches!(outcome, Err(SendError::NotConfigured)));
    }
}
