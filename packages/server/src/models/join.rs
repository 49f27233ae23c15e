use std::fmt;

use common::Application;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor, value::MapAccessDeserializer},
};

use crate::error::AppError;

/// Minimum lengths, counted in UTF-16 code units as browsers count them.
pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MOTIVATION_CHARS: usize = 50;

/// Request body for a join application.
///
/// Every field is optional at the JSON level so that a missing field is
/// reported with the same message as an invalid one. Fields are only read
/// from a JSON object; any other non-null JSON value carries no fields.
#[derive(Debug, Default, utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct JoinRequest {
    /// Applicant's name (at least 2 characters).
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Applicant's email address.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Link to a GitHub, LinkedIn or portfolio page.
    #[schema(example = "https://github.com/ada")]
    pub social_profile: Option<String>,
    /// One of `web`, `ai`, `embedded`, `cybersecurity`.
    #[schema(example = "embedded")]
    pub preferred_team: Option<String>,
    /// Why the applicant wants to join (at least 50 characters).
    #[schema(example = "I have been building firmware for underwater drones and want to ship it at hackathons.")]
    pub motivation: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoinFields {
    name: Option<String>,
    email: Option<String>,
    social_profile: Option<String>,
    preferred_team: Option<String>,
    motivation: Option<String>,
}

impl From<JoinFields> for JoinRequest {
    fn from(fields: JoinFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            social_profile: fields.social_profile,
            preferred_team: fields.preferred_team,
            motivation: fields.motivation,
        }
    }
}

struct JoinRequestVisitor;

impl<'de> Visitor<'de> for JoinRequestVisitor {
    type Value = JoinRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<JoinRequest, A::Error> {
        JoinFields::deserialize(MapAccessDeserializer::new(map)).map(JoinRequest::from)
    }

    // Arrays are never read by position.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<JoinRequest, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(JoinRequest::default())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<JoinRequest, E> {
        Ok(JoinRequest::default())
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<JoinRequest, E> {
        Ok(JoinRequest::default())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<JoinRequest, E> {
        Ok(JoinRequest::default())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<JoinRequest, E> {
        Ok(JoinRequest::default())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<JoinRequest, E> {
        Ok(JoinRequest::default())
    }
}

impl<'de> Deserialize<'de> for JoinRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(JoinRequestVisitor)
    }
}

/// Successful submission response.
#[derive(Serialize, utoipa::ToSchema)]
pub struct JoinResponse {
    #[schema(example = true)]
    pub ok: bool,
}

/// Validate a join request, in field order, and turn it into an [`Application`].
pub fn validate_join_request(payload: JoinRequest) -> Result<Application, AppError> {
    let name = payload
        .name
        .filter(|n| n.encode_utf16().count() >= MIN_NAME_CHARS)
        .ok_or_else(|| AppError::Validation("Invalid name".into()))?;

    let email = payload
        .email
        .filter(|e| is_valid_email(e))
        .ok_or_else(|| AppError::Validation("Invalid email".into()))?;

    let preferred_team = payload
        .preferred_team
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Preferred team is required".into()))?;

    let motivation = payload
        .motivation
        .filter(|m| m.encode_utf16().count() >= MIN_MOTIVATION_CHARS)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "Motivation must be at least {MIN_MOTIVATION_CHARS} characters"
            ))
        })?;

    Ok(Application {
        name,
        email,
        social_profile: payload.social_profile.filter(|s| !s.is_empty()),
        preferred_team,
        motivation,
    })
}

/// Permissive `local@domain.tld` check.
///
/// Accepts when some line of the input has an `@` with at least one character
/// before it, and a later `.` with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    email
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .any(|line| {
            let chars: Vec<char> = line.chars().collect();
            let Some(at) = chars.iter().skip(1).position(|&c| c == '@').map(|i| i + 1) else {
                return false;
            };
            chars
                .iter()
                .enumerate()
                .any(|(i, &c)| c == '.' && i >= at + 2 && i + 2 <= chars.len())
        })
}
