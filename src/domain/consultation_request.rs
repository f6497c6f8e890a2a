use crate::domain::{ClientEmail, ClientName, EstateLocation};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

const MAX_OBJECTIVES_GRAPHEMES: usize = 5000;
const MAX_PHONE_GRAPHEMES: usize = 64;

/// Consultation form as posted by the website.
///
/// Fields are kept as raw JSON so that a value of the wrong type is reported
/// against its field instead of failing the whole body.
#[derive(serde::Deserialize, Debug, Default)]
pub struct ConsultationData {
    #[serde(default)]
    pub full_name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub estate_location: Option<Value>,
    #[serde(default)]
    pub objectives: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RequestRejection {
    MissingFields,
    InvalidField(String),
}

#[derive(Debug)]
pub struct ConsultationRequest {
    pub full_name: ClientName,
    pub email: ClientEmail,
    pub estate_location: EstateLocation,
    pub objectives: Option<String>,
    pub phone: Option<String>,
}

/// `null` counts as absent; any non-string value is rejected.
fn text(field: Option<Value>, label: &str) -> Result<Option<String>, RequestRejection> {
    match field {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(RequestRejection::InvalidField(format!(
            "{label} must be a string"
        ))),
    }
}

fn required(field: Option<Value>, label: &str) -> Result<String, RequestRejection> {
    text(field, label)?
        .filter(|value| !value.trim().is_empty())
        .ok_or(RequestRejection::MissingFields)
}

fn optional(
    field: Option<Value>,
    label: &str,
    max_graphemes: usize,
) -> Result<Option<String>, RequestRejection> {
    let Some(value) = text(field, label)?
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    else {
        return Ok(None);
    };
    if value.graphemes(true).count() > max_graphemes {
        return Err(RequestRejection::InvalidField(format!(
            "{label} cannot be longer than {max_graphemes} characters"
        )));
    }
    Ok(Some(value))
}

impl TryFrom<ConsultationData> for ConsultationRequest {
    type Error = RequestRejection;

    fn try_from(data: ConsultationData) -> Result<Self, Self::Error> {
        let full_name = required(data.full_name, "Full name")?;
        let email = required(data.email, "Email")?;
        let estate_location = required(data.estate_location, "Estate location")?;

        Ok(Self {
            full_name: ClientName::try_from(full_name).map_err(RequestRejection::InvalidField)?,
            email: ClientEmail::try_from(email).map_err(RequestRejection::InvalidField)?,
            estate_location: EstateLocation::try_from(estate_location)
                .map_err(RequestRejection::InvalidField)?,
            objectives: optional(data.objectives, "Objectives", MAX_OBJECTIVES_GRAPHEMES)?,
            phone: optional(data.phone, "Phone", MAX_PHONE_GRAPHEMES)?,
        })
    }
}

impl ConsultationRequest {
    pub fn email_subject(&self) -> String {
        format!("New Consultation Request from {}", self.full_name.as_ref())
    }

    /// Plain-text notification sent to the site administrator.
    pub fn email_body(&self, submitted_at: DateTime<Utc>) -> String {
        const RULE: &str = "─────────────────────────────────────";
        format!(
            "New Private Consultation Request Received\n\
             \n\
             Client Details:\n\
             {RULE}\n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             Estate Location: {location}\n\
             \n\
             Primary Objectives:\n\
             {objectives}\n\
             \n\
             {RULE}\n\
             Submitted at: {submitted_at}\n\
             \n\
             Please follow up with the client at your earliest convenience.\n",
            name = self.full_name.as_ref(),
            email = self.email.as_ref(),
            phone = self.phone.as_deref().unwrap_or("Not provided"),
            location = self.estate_location.as_ref(),
            objectives = self.objectives.as_deref().unwrap_or("Not specified"),
            submitted_at = submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}
