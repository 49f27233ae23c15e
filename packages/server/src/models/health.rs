use serde::Serialize;

/// Liveness probe response.
#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Server package version.
    #[schema(example = "0.1.0")]
    pub version: String,
}
