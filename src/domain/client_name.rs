use unicode_segmentation::UnicodeSegmentation;
use validator::{Validate, ValidationError};

const MAX_LINE_GRAPHEMES: usize = 256;

/// Shared rule for short free-text fields: non-blank, bounded, one line.
pub(crate) fn validate_single_line(s: &str) -> Result<(), ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::new("empty"));
    }
    if s.graphemes(true).count() > MAX_LINE_GRAPHEMES {
        return Err(ValidationError::new("too_long"));
    }
    if s.chars().any(char::is_control) {
        return Err(ValidationError::new("control_character"));
    }
    Ok(())
}

#[derive(Debug, Validate)]
pub struct ClientName {
    #[validate(custom(function = "validate_single_line"))]
    name: String,
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for ClientName {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let s = ClientName {
            name: value.trim().to_string(),
        };
        match s.validate() {
            Ok(_) => Ok(s),
            Err(_) => Err(format!("'{}' is not a valid full name", s.name)),
        }
    }
}
