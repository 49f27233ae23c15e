//! Thin client for the Mailjet v3.1 send API.

pub mod config;
pub mod error;
pub mod mailjet;
pub mod message;
pub mod sender;

pub use config::{DEFAULT_BASE_URL, MailjetConfig};
pub use error::MailError;
pub use mailjet::{MailjetClient, build_http_client};
pub use message::OutboundEmail;
pub use sender::{DEFAULT_SENDER, DEFAULT_SENDER_NAME, SenderIdentity};
