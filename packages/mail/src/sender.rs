/// Display name used when the configured sender has none.
pub const DEFAULT_SENDER_NAME: &str = "Aqualix";

/// Sender used when none is configured. Must be a validated Mailjet sender.
pub const DEFAULT_SENDER: &str = "Aqualix <noreply@example.com>";

/// The `From` of every outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderIdentity {
    pub name: String,
    pub email: String,
}

impl SenderIdentity {
    /// Parse a `Display Name <address>` string.
    ///
    /// The display name runs up to the last `<` that still leaves a non-empty
    /// address part before the closing `>`. Anything not in that form is
    /// taken as a bare address and paired with [`DEFAULT_SENDER_NAME`].
    pub fn parse(raw: &str) -> Self {
        if let Some(body) = raw.strip_suffix('>') {
            for (open, _) in body.rmatch_indices('<') {
                let display = &body[..open];
                if display.contains(is_line_terminator) {
                    continue;
                }
                if let Some(email) = bracketed_address(&body[open + 1..]) {
                    let name = display.trim();
                    return Self {
                        name: if name.is_empty() {
                            DEFAULT_SENDER_NAME.to_string()
                        } else {
                            name.to_string()
                        },
                        email: email.to_string(),
                    };
                }
            }
        }

        Self {
            name: DEFAULT_SENDER_NAME.to_string(),
            email: raw.to_string(),
        }
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Address between the brackets with surrounding whitespace dropped.
///
/// The part must be non-empty and its trimmed text must sit on one line. A
/// whitespace-only part yields an empty address unless it is all line breaks.
fn bracketed_address(inner: &str) -> Option<&str> {
    let address = inner.trim();
    if address.is_empty() {
        inner
            .chars()
            .any(|c| !is_line_terminator(c))
            .then_some(address)
    } else if address.contains(is_line_terminator) {
        None
    } else {
        Some(address)
    }
}

impl Default for SenderIdentity {
    fn default() -> Self {
        Self::parse(DEFAULT_SENDER)
    }
}
