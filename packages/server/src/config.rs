use std::fmt;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer};

/// Deployment variables read verbatim, mapped to their config keys.
///
/// These win over the config file and the `AQUALIX__` overrides. Empty values
/// count as unset.
const DEPLOYMENT_VARS: &[(&str, &str)] = &[
    ("MAILJET_API_KEY", "mail.api_key"),
    ("MAILJET_API_SECRET", "mail.api_secret"),
    ("CONTACT_EMAIL", "mail.contact_email"),
    ("SENDER_EMAIL", "mail.sender"),
    ("ALLOW_APPLICANT_EMAIL", "mail.allow_applicant_email"),
];

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Empty means any origin.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Deserialize, Clone)]
pub struct MailAppConfig {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    /// Inbox that receives every application.
    pub contact_email: Option<String>,
    /// `Display Name <address>` used as the `From` of every message.
    pub sender: String,
    /// Also send an acknowledgement to the applicant. Only the string `true`
    /// (any case) enables it.
    #[serde(deserialize_with = "deserialize_flag")]
    pub allow_applicant_email: bool,
    pub base_url: String,
    /// Per-message timeout. 0, the default, leaves sends unbounded.
    pub timeout_secs: u64,
}

impl MailAppConfig {
    /// Names of the required deployment variables that are unset or empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("MAILJET_API_KEY", &self.api_key),
            ("MAILJET_API_SECRET", &self.api_secret),
            ("CONTACT_EMAIL", &self.contact_email),
        ]
        .into_iter()
        .filter(|(_, value)| non_empty(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl fmt::Debug for MailAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailAppConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("contact_email", &self.contact_email)
            .field("sender", &self.sender)
            .field("allow_applicant_email", &self.allow_applicant_email)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Returns the value if it is set and not empty.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.eq_ignore_ascii_case("true"))
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mail: MailAppConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.cors.max_age", 3600)?
            .set_default("mail.sender", mail::DEFAULT_SENDER)?
            .set_default("mail.allow_applicant_email", "false")?
            .set_default("mail.base_url", mail::DEFAULT_BASE_URL)?
            .set_default("mail.timeout_secs", 0)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., AQUALIX__SERVER__PORT)
            .add_source(
                Environment::with_prefix("AQUALIX")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins"),
            );

        for (var, key) in DEPLOYMENT_VARS {
            let value = std::env::var(var).ok().filter(|v| !v.is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        builder.build()?.try_deserialize()
    }
}
