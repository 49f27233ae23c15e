use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    /// Mailjet answered with a non-success status.
    #[error("Mailjet error: {status} {body}")]
    Provider { status: u16, body: String },

    #[error("Mailjet request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl MailError {
    /// HTTP status returned by Mailjet, if the request reached it.
    pub fn status(&self) -> Option<u16> {
        match self {
            MailError::Provider { status, .. } => Some(*status),
            MailError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
