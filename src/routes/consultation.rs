use crate::domain::{ClientEmail, ConsultationData, ConsultationRequest, RequestRejection};
use crate::email_client::{EmailClient, EmailError};
use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError, web};
use chrono::Utc;

/// Upper bound on a buffered consultation body.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Address consultation requests are delivered to.
pub struct ConsultationInbox(pub ClientEmail);

#[derive(thiserror::Error)]
pub enum ConsultationError {
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Invalid request body")]
    UnreadableBody(#[source] actix_web::Error),
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid field")]
    InvalidField(String),
    #[error("Email service not configured")]
    NotConfigured,
    #[error("Failed to send email")]
    SendFailed(#[source] EmailError),
}

impl std::fmt::Debug for ConsultationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<RequestRejection> for ConsultationError {
    fn from(rejection: RequestRejection) -> Self {
        match rejection {
            RequestRejection::MissingFields => Self::MissingFields,
            RequestRejection::InvalidField(reason) => Self::InvalidField(reason),
        }
    }
}

impl ResponseError for ConsultationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnreadableBody(_)
            | Self::InvalidBody(_)
            | Self::MissingFields
            | Self::InvalidField(_) => StatusCode::BAD_REQUEST,
            Self::NotConfigured | Self::SendFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::InvalidField(reason) => {
                serde_json::json!({ "error": self.to_string(), "details": reason })
            }
            Self::SendFailed(e) => {
                serde_json::json!({ "error": self.to_string(), "details": e.to_string() })
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        HttpResponseBuilder::new(self.status_code())
            .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
            .json(body)
    }
}

#[tracing::instrument(
    name = "Relaying a consultation request",
    skip(payload, email_client, inbox),
    fields(client_email = tracing::field::Empty)
)]
pub async fn send_consultation_email(
    payload: web::Payload,
    email_client: web::Data<EmailClient>,
    inbox: web::Data<ConsultationInbox>,
) -> Result<HttpResponse, ConsultationError> {
    let body = payload
        .to_bytes_limited(MAX_BODY_BYTES)
        .await
        .map_err(|_| ConsultationError::PayloadTooLarge)?
        .map_err(ConsultationError::UnreadableBody)?;
    let data: ConsultationData =
        serde_json::from_slice(&body).map_err(ConsultationError::InvalidBody)?;
    let request = ConsultationRequest::try_from(data)?;
    tracing::Span::current().record("client_email", tracing::field::display(&request.email));

    if !email_client.is_configured() {
        tracing::error!("Resend API key is not set, cannot relay consultation request");
        return Err(ConsultationError::NotConfigured);
    }

    email_client
        .send_email(
            &inbox.0,
            &request.email,
            &request.email_subject(),
            &request.email_body(Utc::now()),
        )
        .await
        .map_err(|e| match e {
            EmailError::NotConfigured => ConsultationError::NotConfigured,
            other => ConsultationError::SendFailed(other),
        })?;

    tracing::info!(admin_email = %inbox.0, "Consultation email sent");
    Ok(HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .json(serde_json::json!({
            "success": true,
            "message": "Email sent successfully"
        })))
}

pub async fn consultation_preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .finish()
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .content_type("text/plain; charset=utf-8")
        .body("Method not allowed")
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
