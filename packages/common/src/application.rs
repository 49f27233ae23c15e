use crate::team::display_team;

/// A validated join application.
///
/// Lives for one request: built from the submitted form, rendered into
/// emails, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub name: String,
    pub email: String,
    /// Never holds an empty string.
    pub social_profile: Option<String>,
    /// Raw team value as submitted.
    pub preferred_team: String,
    pub motivation: String,
}

impl Application {
    /// Label for the preferred team, or the raw value if it is not a known team.
    pub fn team_label(&self) -> String {
        display_team(&self.preferred_team)
    }
}
