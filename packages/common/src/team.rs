use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Team an applicant can ask to join.
///
/// Ids match the values offered by the join form's select control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Web development.
    Web,
    /// Machine learning and AI.
    Ai,
    /// Embedded systems and hardware.
    Embedded,
    /// Security research and CTFs.
    Cybersecurity,
}

impl Team {
    /// All teams, in the order the site lists them.
    pub const ALL: &'static [Team] = &[Self::Web, Self::Ai, Self::Embedded, Self::Cybersecurity];

    /// Stable identifier sent by the join form.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Ai => "ai",
            Self::Embedded => "embedded",
            Self::Cybersecurity => "cybersecurity",
        }
    }

    /// Human-readable name used in emails.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web Development Team",
            Self::Ai => "AI Team",
            Self::Embedded => "Embedded Systems Team",
            Self::Cybersecurity => "Cyber Security Team",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|team| team.id() == id)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error when parsing an unknown team id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTeamError {
    invalid: String,
}

impl fmt::Display for ParseTeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown team '{}'. Valid values: {}",
            self.invalid,
            Team::ALL
                .iter()
                .map(|t| t.id())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseTeamError {}

impl FromStr for Team {
    type Err = ParseTeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ParseTeamError {
            invalid: s.to_string(),
        })
    }
}

/// Display label for a submitted team value.
///
/// The join endpoint only requires a non-empty team, so values outside the
/// catalogue are shown as submitted.
pub fn display_team(raw: &str) -> String {
    match Team::from_id(raw) {
        Some(team) => team.label().to_string(),
        None => raw.to_string(),
    }
}
