//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Every dashboard field is optional: the backend omits or nulls fields for
//! new players, and the screen substitutes display defaults instead of
//! failing the whole render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST /api/auth/telegram`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthRequest<'a> {
    #[serde(rename = "initData")]
    pub init_data: &'a str,
}

/// Successful authentication result.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "AuthResponseWire")]
pub struct AuthResponse {
    /// Bearer token for subsequent calls. Some deployments name it `jwtToken`.
    pub token: String,
    /// Whether the player still has to pick a nickname and position.
    pub requires_profile_setup: bool,
}

/// Auth body as sent. Both token keys may be present and the flag may be null.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponseWire {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    jwt_token: Option<String>,
    #[serde(default)]
    requires_profile_setup: Option<bool>,
}

impl TryFrom<AuthResponseWire> for AuthResponse {
    type Error = &'static str;

    fn try_from(wire: AuthResponseWire) -> Result<Self, Self::Error> {
        let token = [wire.token, wire.jwt_token]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty())
            .ok_or("missing token")?;
        Ok(Self { token, requires_profile_setup: wire.requires_profile_setup.unwrap_or(false) })
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Field position a player can pick during profile setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "gk")]
    Goalkeeper,
    #[serde(rename = "df")]
    Defender,
    #[serde(rename = "mf")]
    Midfielder,
    #[serde(rename = "fw")]
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [Self::Goalkeeper, Self::Defender, Self::Midfielder, Self::Forward];

    /// Wire code sent to the backend.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Goalkeeper => "gk",
            Self::Defender => "df",
            Self::Midfielder => "mf",
            Self::Forward => "fw",
        }
    }

    /// Label shown in the UI and cached after a profile update.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Goalkeeper => "Goalkeeper",
            Self::Defender => "Defender",
            Self::Midfielder => "Midfielder",
            Self::Forward => "Forward",
        }
    }

    /// Material Symbols icon name for the position card.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Goalkeeper => "sports_handball",
            Self::Defender => "shield",
            Self::Midfielder => "swap_horiz",
            Self::Forward => "sports_soccer",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Label for a position code returned by the backend; unknown codes are
    /// shown verbatim.
    #[must_use]
    pub fn label_for_code(code: &str) -> String {
        Self::from_code(code).map_or_else(|| code.to_owned(), |p| p.label().to_owned())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unknown position `{s}` (expected gk, df, mf or fw)"))
    }
}

/// Body of `PUT /player/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate<'a> {
    pub nickname: &'a str,
    pub position: Position,
}

/// Profile as stored by the backend after an update.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileResponse {
    pub nickname: String,
    /// Position code; kept as a string so unknown codes do not fail the save.
    pub position: String,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Read-only season snapshot from `GET /api/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSnapshot {
    pub nickname: Option<String>,
    /// Player-chosen display name; preferred over `nickname` when present.
    pub custom_nickname: Option<String>,
    pub position: Option<String>,
    pub team_name: Option<String>,
    pub season_goals: Option<u32>,
    pub season_assists: Option<u32>,
    pub season_matches: Option<u32>,
    pub next_match: Option<MatchSummary>,
    pub team_progress: Option<TeamProgress>,
}

/// Upcoming fixture shown on the dashboard card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchSummary {
    pub opponent_team_name: Option<String>,
    pub match_date: Option<String>,
    pub match_time: Option<String>,
    pub location: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamProgress {
    /// Team chemistry on a 0–10 scale.
    pub chemistry_score: Option<f64>,
    /// Most recent results, newest last (e.g. `"Win"`, `"Draw"`, `"Lose"`).
    pub recent_results: Option<Vec<String>>,
}

// =============================================================================
// MATCHES
// =============================================================================

/// Body of `POST /api/matches`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub opponent_team_name: String,
    pub match_date: String,
    pub match_time: String,
    pub location: String,
}
