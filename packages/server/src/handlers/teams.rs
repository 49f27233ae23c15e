use axum::Json;
use common::Team;

use crate::models::team::TeamResponse;

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = "Applications",
    operation_id = "listTeams",
    summary = "List the teams applicants can choose",
    responses(
        (status = 200, description = "Teams in display order", body = Vec<TeamResponse>),
    ),
)]
pub async fn list_teams() -> Json<Vec<TeamResponse>> {
    Json(Team::ALL.iter().copied().map(TeamResponse::from).collect())
}
