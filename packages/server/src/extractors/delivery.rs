use axum::{extract::FromRequestParts, http::request::Parts};
use mail::{MailjetClient, MailjetConfig, SenderIdentity};

use crate::config::non_empty;
use crate::error::AppError;
use crate::state::AppState;

/// Everything needed to deliver one application, resolved from config.
///
/// Add this as a handler parameter to require working mail delivery. It runs
/// before the body is read, so a misconfigured server answers 500 without
/// parsing the request or touching the network.
pub struct MailDelivery {
    pub client: MailjetClient,
    pub contact_email: String,
    pub allow_applicant_email: bool,
}

impl FromRequestParts<AppState> for MailDelivery {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let mail = &state.config.mail;

        let (Some(api_key), Some(api_secret), Some(contact_email)) = (
            non_empty(&mail.api_key),
            non_empty(&mail.api_secret),
            non_empty(&mail.contact_email),
        ) else {
            return Err(AppError::NotConfigured(mail.missing_required()));
        };

        let config = MailjetConfig {
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
            base_url: mail.base_url.clone(),
            timeout: mail.timeout(),
        };

        Ok(MailDelivery {
            client: MailjetClient::new(
                state.http.clone(),
                config,
                SenderIdentity::parse(&mail.sender),
            ),
            contact_email: contact_email.to_string(),
            allow_applicant_email: mail.allow_applicant_email,
        })
    }
}
