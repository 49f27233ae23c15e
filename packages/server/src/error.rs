use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mail::MailError;
use serde::Serialize;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable error description.
    #[schema(example = "Invalid email")]
    pub error: String,
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `INVALID_JSON`,
    /// `METHOD_NOT_ALLOWED`, `NOT_CONFIGURED`, `MAIL_DELIVERY_FAILED`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    MethodNotAllowed,
    /// Body is not valid JSON for the endpoint. Holds the parser detail, which
    /// is logged but not returned.
    InvalidJson(String),
    Validation(String),
    /// Required deployment variables are missing.
    NotConfigured(Vec<&'static str>),
    /// Mailjet refused a message or could not be reached.
    MailDelivery(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody {
                    error: "Method not allowed".into(),
                    code: "METHOD_NOT_ALLOWED",
                },
            ),
            AppError::InvalidJson(detail) => {
                tracing::debug!("Rejected request body: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        error: "Invalid JSON".into(),
                        code: "INVALID_JSON",
                    },
                )
            }
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg,
                    code: "VALIDATION_ERROR",
                },
            ),
            AppError::NotConfigured(missing) => {
                let message = format!("Server not configured. Missing {}", missing.join(", "));
                tracing::error!("{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: message,
                        code: "NOT_CONFIGURED",
                    },
                )
            }
            AppError::MailDelivery(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: if msg.is_empty() {
                        "Email send failed".into()
                    } else {
                        msg
                    },
                    code: "MAIL_DELIVERY_FAILED",
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<MailError> for AppError {
    fn from(err: MailError) -> Self {
        AppError::MailDelivery(err.to_string())
    }
}
