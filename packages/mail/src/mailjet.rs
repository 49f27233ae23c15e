use std::time::Duration;

use futures::future::try_join_all;
use reqwest::Client;
use tracing::{error, info, instrument};

use crate::config::MailjetConfig;
use crate::error::MailError;
use crate::message::{OutboundEmail, SendRequest};
use crate::sender::SenderIdentity;

/// Build the shared HTTP client used for every Mailjet call.
pub fn build_http_client() -> Result<Client, MailError> {
    let client = Client::builder()
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()?;
    Ok(client)
}

/// Sends messages through Mailjet on behalf of one sender.
///
/// Cheap to build per request: the underlying [`Client`] is reference counted.
#[derive(Debug, Clone)]
pub struct MailjetClient {
    http: Client,
    config: MailjetConfig,
    sender: SenderIdentity,
}

impl MailjetClient {
    pub fn new(http: Client, config: MailjetConfig, sender: SenderIdentity) -> Self {
        Self {
            http,
            config,
            sender,
        }
    }

    /// Send a single message. Any non-2xx answer is an error.
    #[instrument(skip(self, email), fields(to = %email.to, subject = %email.subject))]
    pub async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let payload = SendRequest::single(&self.sender, email);

        let mut request = self
            .http
            .post(self.config.send_url())
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .json(&payload);
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.inspect_err(|e| {
            error!(error = %e, "Mailjet request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| e.to_string());
            error!(status = status.as_u16(), %body, "Mailjet rejected message");
            return Err(MailError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        info!("Message accepted by Mailjet");
        Ok(())
    }

    /// Send every message concurrently.
    ///
    /// Returns the first failure and drops the sends still in flight. Messages
    /// already accepted by Mailjet are not recalled.
    pub async fn send_all(&self, emails: &[OutboundEmail]) -> Result<(), MailError> {
        try_join_all(emails.iter().map(|email| self.send(email))).await?;
        Ok(())
    }
}
