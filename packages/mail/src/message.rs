use serde::Serialize;

use crate::sender::SenderIdentity;

/// One HTML email to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl OutboundEmail {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html: html.into(),
        }
    }
}

/// Body of `POST /v3.1/send`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SendRequest<'a> {
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireMessage<'a> {
    from: WireContact<'a>,
    to: Vec<WireRecipient<'a>>,
    subject: &'a str,
    #[serde(rename = "HTMLPart")]
    html_part: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireContact<'a> {
    email: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireRecipient<'a> {
    email: &'a str,
}

impl<'a> SendRequest<'a> {
    pub(crate) fn single(from: &'a SenderIdentity, email: &'a OutboundEmail) -> Self {
        Self {
            messages: vec![WireMessage {
                from: WireContact {
                    email: &from.email,
                    name: &from.name,
                },
                to: vec![WireRecipient { email: &email.to }],
                subject: &email.subject,
                html_part: &email.html,
            }],
        }
    }
}
