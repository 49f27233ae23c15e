use common::Team;
use serde::Serialize;

/// A team applicants can choose on the join form.
#[derive(Serialize, utoipa::ToSchema)]
pub struct TeamResponse {
    /// Value to submit as `preferredTeam`.
    #[schema(example = "embedded")]
    pub id: String,
    #[schema(example = "Embedded Systems Team")]
    pub label: String,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id().to_string(),
            label: team.label().to_string(),
        }
    }
}
