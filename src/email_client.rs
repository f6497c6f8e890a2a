use crate::domain::ClientEmail;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretBox};
use serde::Serialize;
use std::borrow::Cow;

#[derive(thiserror::Error, Debug)]
pub enum EmailError {
    #[error("Email service not configured")]
    NotConfigured,
    #[error("Resend API error: {} - {body}", status.as_u16())]
    Rejected { status: StatusCode, body: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Thin client for the Resend `POST /emails` endpoint.
pub struct EmailClient {
    http_client: reqwest::Client,
    base_url: String,
    sender: ClientEmail,
    authorization_token: Option<SecretBox<String>>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: ClientEmail,
        authorization_token: Option<SecretBox<String>>,
        timeout_duration: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout_duration)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.authorization_token.is_some()
    }

    #[tracing::instrument(
        name = "Sending email through Resend",
        skip(self, text_content),
        fields(recipient = %recipient, reply_to = %reply_to)
    )]
    pub async fn send_email(
        &self,
        recipient: &ClientEmail,
        reply_to: &ClientEmail,
        subject: &str,
        text_content: &str,
    ) -> Result<(), EmailError> {
        let token = self
            .authorization_token
            .as_ref()
            .ok_or(EmailError::NotConfigured)?;

        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: self.sender.as_ref().into(),
            to: vec![recipient.as_ref().into()],
            subject: subject.into(),
            text: text_content.into(),
            reply_to: reply_to.as_ref().into(),
        };
        let response = self
            .http_client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", token.expose_secret()),
            )
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "Resend responded");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Rejected { status, body });
        }
        Ok(())
    }
}

#[derive(Serialize, Debug)]
struct SendEmailRequest<'a> {
    from: Cow<'a, str>,
    to: Vec<Cow<'a, str>>,
    subject: Cow<'a, str>,
    text: Cow<'a, str>,
    reply_to: Cow<'a, str>,
}
