use chrono::{DateTime, SecondsFormat, Utc};
use common::Application;
use mail::OutboundEmail;

const MOTIVATION_STYLE: &str = "white-space:pre-wrap;font-family:ui-sans-serif,system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial,Apple Color Emoji,Segoe UI Emoji";

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Notification for the team inbox.
pub fn operator_notification(
    application: &Application,
    contact_email: &str,
    submitted_at: DateTime<Utc>,
) -> OutboundEmail {
    let social = application
        .social_profile
        .as_deref()
        .map(|s| format!("\n  <p><strong>Social:</strong> {}</p>", escape_html(s)))
        .unwrap_or_default();

    let html = format!(
        r#"<div>
  <h2>New Aqualix Application</h2>
  <p><strong>Name:</strong> {name}</p>
  <p><strong>Email:</strong> {email}</p>{social}
  <p><strong>Preferred Team:</strong> {team}</p>
  <p><strong>Motivation:</strong></p>
  <pre style="{MOTIVATION_STYLE}">{motivation}</pre>
  <p style="color:#6b7280;font-size:12px">Submitted at {submitted_at}</p>
</div>"#,
        name = escape_html(&application.name),
        email = escape_html(&application.email),
        team = escape_html(&application.team_label()),
        motivation = escape_html(&application.motivation),
        submitted_at = submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    );

    OutboundEmail::new(
        contact_email,
        format!(
            "New Aqualix Application: {} ({})",
            application.name, application.preferred_team
        ),
        html,
    )
}

/// Acknowledgement for the applicant.
pub fn applicant_acknowledgement(application: &Application) -> OutboundEmail {
    let html = format!(
        r#"<div>
  <h2>Thanks for applying to Aqualix, {name}!</h2>
  <p>We received your application and will get back to you within 48 hours.</p>
  <p>Team selected: <strong>{team}</strong></p>
  <p>The Aqualix Team</p>
</div>"#,
        name = escape_html(&application.name),
        team = escape_html(&application.team_label()),
    );

    OutboundEmail::new(
        application.email.clone(),
        "We received your Aqualix application",
        html,
    )
}
