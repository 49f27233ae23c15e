use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.mailjet.com";

/// Credentials and endpoint for one Mailjet account.
#[derive(Clone)]
pub struct MailjetConfig {
    pub api_key: String,
    pub api_secret: String,
    /// Scheme and host of the API, without the `/v3.1` path.
    pub base_url: String,
    /// Per-request timeout. `None` leaves it to the HTTP client.
    pub timeout: Option<Duration>,
}

impl MailjetConfig {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn send_url(&self) -> String {
        format!("{}/v3.1/send", self.base_url.trim_end_matches('/'))
    }
}

// The secret must never reach the logs.
impl fmt::Debug for MailjetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailjetConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
