use crate::domain::ClientEmail;
use secrecy::SecretBox;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::PathBuf;
use std::time::Duration;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// Canonical public origin used for SEO urls.
    pub base_url: String,
    pub dist_dir: PathBuf,
    pub public_dir: PathBuf,
    pub render_page_meta: bool,
}

#[derive(serde::Deserialize, Debug)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: ClientEmail,
    pub admin_email: ClientEmail,
    #[serde(default)]
    pub authorization_token: Option<SecretBox<String>>,
    #[serde(
        rename = "timeout_milliseconds",
        deserialize_with = "deserialize_duration_from_millis"
    )]
    pub timeout: Duration,
}

fn deserialize_duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let millis = u64::deserialize(deserializer)?;
    Ok(Duration::from_millis(millis))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }

    /// Reads `APP_ENVIRONMENT`, defaulting to `local`.
    pub fn current() -> Result<Self, String> {
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!("{} is not a valid environment", other)),
        }
    }
}

/// Variables understood by earlier deployments of the site, mapped onto
/// their settings keys. They take precedence over the `APP_` layer.
const LEGACY_ENV_ALIASES: [(&str, &str); 4] = [
    ("PORT", "application.port"),
    ("RESEND_API_KEY", "email_client.authorization_token"),
    ("RESEND_FROM_EMAIL", "email_client.sender_email"),
    ("ADMIN_EMAIL", "email_client.admin_email"),
];

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    let environment = Environment::current().map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let mut builder = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        );

    for (variable, key) in LEGACY_ENV_ALIASES {
        let value = std::env::var(variable).ok().filter(|v| !v.trim().is_empty());
        builder = builder.set_override_option(key, value)?;
    }

    builder.build()?.try_deserialize::<Settings>()
}
