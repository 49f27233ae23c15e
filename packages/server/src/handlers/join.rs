use axum::Json;
use chrono::Utc;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::delivery::MailDelivery;
use crate::extractors::json::AppJson;
use crate::models::join::{JoinRequest, JoinResponse, validate_join_request};
use crate::utils::email;

/// Accept a join application and email it to the team.
///
/// The operator notification is always sent. The applicant acknowledgement is
/// sent alongside it only when enabled in config. Both sends run concurrently
/// and the first failure fails the request; a notification that was already
/// accepted is not reported separately.
#[utoipa::path(
    post,
    path = "/api/join",
    tag = "Applications",
    operation_id = "submitApplication",
    summary = "Submit a join application",
    description = "Validates the application and emails it to the team inbox through Mailjet. When `ALLOW_APPLICANT_EMAIL` is `true`, the applicant also receives an acknowledgement.",
    request_body = JoinRequest,
    responses(
        (status = 200, description = "Application delivered", body = JoinResponse),
        (status = 400, description = "Invalid body (INVALID_JSON) or field (VALIDATION_ERROR)", body = ErrorBody),
        (status = 405, description = "Not a POST (METHOD_NOT_ALLOWED)", body = ErrorBody),
        (status = 500, description = "Missing configuration (NOT_CONFIGURED) or Mailjet failure (MAIL_DELIVERY_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip_all, fields(team = tracing::field::Empty))]
pub async fn submit_application(
    delivery: MailDelivery,
    AppJson(payload): AppJson<JoinRequest>,
) -> Result<Json<JoinResponse>, AppError> {
    let application = validate_join_request(payload)?;
    tracing::Span::current().record("team", application.preferred_team.as_str());

    let mut emails = vec![email::operator_notification(
        &application,
        &delivery.contact_email,
        Utc::now(),
    )];
    if delivery.allow_applicant_email {
        emails.push(email::applicant_acknowledgement(&application));
    }

    info!(messages = emails.len(), "Dispatching application emails");
    delivery.client.send_all(&emails).await?;
    info!("Application delivered");

    Ok(Json(JoinResponse { ok: true }))
}

/// Fallback for any method other than POST on `/api/join`.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
