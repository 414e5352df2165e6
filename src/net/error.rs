//! API error taxonomy and the shared non-success response handler.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends up as inline text on a screen, so each variant's
//! `Display` is the user-facing sentence. Nothing is retried; 401/403 are
//! flagged via [`ApiError::is_auth_failure`] so the client can drop the token.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::storage::StoreError;

/// Characters of a non-JSON error body quoted in the message.
pub const ERROR_SNIPPET_CHARS: usize = 50;

/// Characters of an undecodable success body quoted in the message.
pub const DECODE_SNIPPET_CHARS: usize = 100;

/// Backend operation a request belongs to; used in messages and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Authenticate,
    UpdateProfile,
    FetchDashboard,
    CreateMatch,
    AuthorizedFetch,
}

impl Operation {
    /// Gerund phrase used in "error 500 while …" messages.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Authenticate => "authenticating",
            Self::UpdateProfile => "updating the profile",
            Self::FetchDashboard => "loading the dashboard",
            Self::CreateMatch => "creating the match",
            Self::AuthorizedFetch => "calling the backend",
        }
    }

    /// Short stable name for structured logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Authenticate => "authenticate",
            Self::UpdateProfile => "update_profile",
            Self::FetchDashboard => "fetch_dashboard",
            Self::CreateMatch => "create_match",
            Self::AuthorizedFetch => "authorized_fetch",
        }
    }
}

/// Why a success body could not be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeMismatch {
    /// Not JSON at all (HTML error page, truncated body).
    NotJson,
    /// Valid JSON missing required fields or holding the wrong types.
    Schema,
}

impl DecodeMismatch {
    #[must_use]
    pub fn classify(error: &serde_json::Error) -> Self {
        if error.is_data() { Self::Schema } else { Self::NotJson }
    }

    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::NotJson => "expected JSON",
            Self::Schema => "the JSON did not have the expected fields",
        }
    }
}

/// Errors produced by [`crate::net::api::ApiClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, timeout).
    #[error("network request failed: {0}")]
    Transport(String),

    /// An authorized call was attempted without a stored token.
    #[error("Authorization required.")]
    MissingToken,

    /// The backend rejected the credentials (401/403). The token is dropped.
    #[error("{message}")]
    Unauthorized { status: u16, message: String },

    /// Any other non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A non-success status whose body was not JSON (usually a proxy HTML page).
    #[error("error {status} while {}: the server returned a non-JSON response (starts with: {snippet})", .operation.describe())]
    NonJson { status: u16, operation: Operation, snippet: String },

    /// A success status whose body was not JSON, or was JSON of the wrong shape.
    #[error("unexpected response while {}: {} (starts with: {snippet})", .operation.describe(), .mismatch.describe())]
    Decode { operation: Operation, mismatch: DecodeMismatch, snippet: String },

    /// The session could not be persisted.
    #[error("could not save the session: {0}")]
    Storage(#[from] StoreError),
}

impl ApiError {
    /// Grepable error code, mirrored in logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_TRANSPORT",
            Self::MissingToken => "E_MISSING_TOKEN",
            Self::Unauthorized { .. } => "E_UNAUTHORIZED",
            Self::Status { .. } => "E_STATUS",
            Self::NonJson { .. } => "E_NON_JSON",
            Self::Decode { .. } => "E_DECODE",
            Self::Storage(_) => "E_STORAGE",
        }
    }

    /// HTTP status of the failed response, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Status { status, .. } | Self::NonJson { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// True for 401/403 responses, which invalidate the stored token.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        self.status().is_some_and(is_auth_status)
    }
}

#[must_use]
pub fn is_auth_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Classify a non-success response.
///
/// JSON bodies contribute their `message` field; JSON without one gets a
/// generic "error {status} while …" sentence; anything else becomes
/// [`ApiError::NonJson`] quoting the start of the body.
#[must_use]
pub fn from_error_response(operation: Operation, status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map_or_else(|| format!("error {status} while {}.", operation.describe()), str::to_owned),
        Err(_) => {
            return ApiError::NonJson { status, operation, snippet: snippet(body, ERROR_SNIPPET_CHARS) };
        }
    };

    if is_auth_status(status) {
        ApiError::Unauthorized { status, message }
    } else {
        ApiError::Status { status, message }
    }
}

/// First `max_chars` characters of `body`, respecting char boundaries.
#[must_use]
pub fn snippet(body: &str, max_chars: usize) -> String {
    body.trim().chars().take(max_chars).collect()
}
