use validator::Validate;

#[derive(Debug, Clone, Validate, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct ClientEmail {
    #[validate(email)]
    email: String,
}

impl AsRef<str> for ClientEmail {
    fn as_ref(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Display for ClientEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.email)
    }
}

impl TryFrom<String> for ClientEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let client_email = Self {
            email: value.trim().to_string(),
        };
        match client_email.validate() {
            Ok(_) => Ok(client_email),
            Err(_) => Err(format!(
                "'{}' is not a valid email address",
                client_email.email
            )),
        }
    }
}
