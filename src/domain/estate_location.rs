use super::client_name::validate_single_line;
use validator::Validate;

#[derive(Debug, Validate)]
pub struct EstateLocation {
    #[validate(custom(function = "validate_single_line"))]
    location: String,
}

impl AsRef<str> for EstateLocation {
    fn as_ref(&self) -> &str {
        &self.location
    }
}

impl TryFrom<String> for EstateLocation {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let s = EstateLocation {
            location: value.trim().to_string(),
        };
        match s.validate() {
            Ok(_) => Ok(s),
            Err(_) => Err(format!("'{}' is not a valid estate location", s.location)),
        }
    }
}
