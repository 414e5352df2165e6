//! Backend REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that talks to the backend. Screens call it; it writes
//! authentication and profile results into the [`SessionStore`].
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses go through [`from_error_response`]. A 401/403 from
//! any call also deletes the stored token, so the next launch re-authenticates.
//! Authorized calls without a token fail before any request is sent.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, DECODE_SNIPPET_CHARS, DecodeMismatch, Operation, from_error_response, snippet};
use super::transport::{CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT, HttpRequest, HttpResponse, Method, Transport};
use super::types::{AuthRequest, AuthResponse, DashboardSnapshot, NewMatch, Position, ProfileResponse, ProfileUpdate};
use crate::config::AppConfig;
use crate::storage::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    config: Arc<AppConfig>,
    transport: Arc<dyn Transport>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: Arc<AppConfig>, transport: Arc<dyn Transport>, session: SessionStore) -> Self {
        Self { config, transport, session }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Exchange Telegram launch data for a bearer token via `POST {auth}`.
    ///
    /// Token and profile-setup flag are persisted together before returning.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status,
    /// undecodable body, or if the session cannot be saved.
    pub async fn authenticate(&self, init_data: &str) -> Result<AuthResponse, ApiError> {
        let op = Operation::Authenticate;
        let body = encode(&AuthRequest { init_data })?;
        let request = HttpRequest::new(Method::Post, self.config.url(&self.config.endpoints.auth))
            .body(CONTENT_TYPE_TEXT, body);

        let response = self.execute(op, request).await?;
        let auth: AuthResponse = decode(op, &response)?;
        self.session.record_auth(&auth.token, auth.requires_profile_setup)?;
        tracing::info!(requires_profile_setup = auth.requires_profile_setup, "authenticated");
        Ok(auth)
    }

    /// Save nickname and position via `PUT {profile}`.
    ///
    /// On success the profile-setup flag is cleared and the returned nickname
    /// and human-readable position label are cached.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending anything when no
    /// token is stored, otherwise as [`ApiClient::authenticate`].
    pub async fn update_profile(&self, nickname: &str, position: Position) -> Result<ProfileResponse, ApiError> {
        let op = Operation::UpdateProfile;
        let body = encode(&ProfileUpdate { nickname, position })?;
        let response = self
            .authorized(op, Method::Put, &self.config.endpoints.profile, Some((CONTENT_TYPE_TEXT, body)))
            .await?;
        let profile: ProfileResponse = decode(op, &response)?;

        self.session.set_position_label(&Position::label_for_code(&profile.position))?;
        self.session.set_nickname(&profile.nickname)?;
        self.session.set_profile_setup_needed(false)?;
        tracing::info!(position = %profile.position, "profile updated");
        Ok(profile)
    }

    /// Fetch the player's season snapshot via `GET {dashboard}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending anything when no
    /// token is stored, otherwise as [`ApiClient::authenticate`].
    pub async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        let op = Operation::FetchDashboard;
        let response = self.authorized(op, Method::Get, &self.config.endpoints.dashboard, None).await?;
        decode(op, &response)
    }

    /// Record a new fixture via `POST {matches}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending anything when no
    /// token is stored, otherwise as [`ApiClient::authenticate`].
    pub async fn create_match(&self, new_match: &NewMatch) -> Result<(), ApiError> {
        let op = Operation::CreateMatch;
        let body = encode(new_match)?;
        self.authorized(op, Method::Post, &self.config.endpoints.matches, Some((CONTENT_TYPE_JSON, body)))
            .await?;
        tracing::info!(opponent = %new_match.opponent_team_name, "match created");
        Ok(())
    }

    /// Authorized GET of an arbitrary backend path, returning the JSON body.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::fetch_dashboard`].
    pub async fn fetch_authorized(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        let op = Operation::AuthorizedFetch;
        let response = self.authorized(op, Method::Get, path, None).await?;
        if response.body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        decode(op, &response)
    }

    /// Send a bearer-authorized request, failing locally when no token is stored.
    async fn authorized(
        &self,
        op: Operation,
        method: Method,
        path: &str,
        body: Option<(&'static str, String)>,
    ) -> Result<HttpResponse, ApiError> {
        let Some(token) = self.session.token() else {
            tracing::warn!(operation = op.name(), "no stored token; request not sent");
            return Err(ApiError::MissingToken);
        };
        let mut request = HttpRequest::new(method, self.config.url(path)).bearer(token);
        if let Some((content_type, body)) = body {
            request = request.body(content_type, body);
        }
        self.execute(op, request).await
    }

    /// Send `request` and turn non-success statuses into errors.
    async fn execute(&self, op: Operation, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(operation = op.name(), method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(operation = op.name(), error = %e, "request failed");
            ApiError::Transport(e.0)
        })?;

        if response.is_success() {
            return Ok(response);
        }

        let err = from_error_response(op, response.status, &response.body);
        tracing::warn!(operation = op.name(), status = response.status, code = err.error_code(), "request rejected");
        if err.is_auth_failure() {
            if let Err(e) = self.session.clear_token() {
                tracing::warn!(error = %e, "failed to clear rejected token");
            }
        }
        Err(err)
    }
}

fn encode<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Transport(format!("request encoding failed: {e}")))
}

fn decode<T: DeserializeOwned>(op: Operation, response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        tracing::warn!(operation = op.name(), error = %e, "response decode failed");
        ApiError::Decode {
            operation: op,
            mismatch: DecodeMismatch::classify(&e),
            snippet: snippet(&response.body, DECODE_SNIPPET_CHARS),
        }
    })
}
