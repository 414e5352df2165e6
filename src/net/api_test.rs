use super::*;
use crate::state::test_helpers::{MockTransport, TEST_BASE_URL, dashboard_json, signed_in_context, test_context};
use crate::storage::KeyValueStore;
use crate::storage::session::{POSITION_LABEL_KEY, PROFILE_SETUP_KEY, TOKEN_KEY};

// =========================================================================
// authenticate
// =========================================================================

#[tokio::test]
async fn authenticate_posts_init_data_as_simple_request() {
    let (ctx, transport, _) = test_context();
    transport.respond_json(200, &serde_json::json!({ "token": "jwt-1", "requiresProfileSetup": true }));

    let auth = ctx.api.authenticate("query_id=abc").await.unwrap();
    assert_eq!(auth.token, "jwt-1");
    assert!(auth.requires_profile_setup);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, format!("{TEST_BASE_URL}/api/auth/telegram"));
    assert_eq!(req.bearer, None);
    assert_eq!(req.content_type, Some(CONTENT_TYPE_TEXT));
    assert_eq!(req.body.as_deref(), Some(r#"{"initData":"query_id=abc"}"#));
}

#[tokio::test]
async fn authenticate_persists_token_and_flag() {
    let (ctx, transport, store) = test_context();
    transport.respond_json(200, &serde_json::json!({ "jwtToken": "jwt-2", "requiresProfileSetup": false }));

    ctx.api.authenticate("init").await.unwrap();
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-2"));
    assert_eq!(store.get(PROFILE_SETUP_KEY).as_deref(), Some("false"));
}

#[tokio::test]
async fn authenticate_failure_surfaces_server_message() {
    let (ctx, transport, store) = test_context();
    transport.respond_json(401, &serde_json::json!({ "message": "Invalid init data signature" }));

    let err = ctx.api.authenticate("forged").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid init data signature");
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn authenticate_transport_failure_is_reported() {
    let (ctx, transport, _) = test_context();
    transport.fail("dns error");

    let err = ctx.api.authenticate("init").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(ref m) if m == "dns error"));
}

#[tokio::test]
async fn authenticate_rejects_success_body_without_token() {
    let (ctx, transport, store) = test_context();
    transport.respond(200, "<html>ngrok warning page</html>");

    let err = ctx.api.authenticate("init").await.unwrap_err();
    assert_eq!(err.error_code(), "E_DECODE");
    assert!(err.to_string().contains("ngrok warning page"));
    assert!(err.to_string().contains("expected JSON"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn authenticate_json_without_token_reports_shape_mismatch() {
    let (ctx, transport, store) = test_context();
    transport.respond(200, r#"{"requiresProfileSetup":false}"#);

    let err = ctx.api.authenticate("init").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { mismatch: DecodeMismatch::Schema, .. }));
    let text = err.to_string();
    assert!(text.contains("did not have the expected fields"), "{text}");
    assert!(!text.contains("expected JSON"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn authenticate_accepts_null_setup_flag() {
    let (ctx, transport, _) = test_context();
    transport.respond(200, r#"{"token":"abc","jwtToken":"abc","requiresProfileSetup":null}"#);

    let auth = ctx.api.authenticate("init").await.unwrap();
    assert_eq!(auth.token, "abc");
    assert!(!auth.requires_profile_setup);
}

// =========================================================================
// update_profile
// =========================================================================

#[tokio::test]
async fn update_profile_sends_bearer_and_caches_results() {
    let (ctx, transport, store) = test_context();
    ctx.session.record_auth("tok", true).unwrap();
    transport.respond_json(
        200,
        &serde_json::json!({ "nickname": "wall", "position": "gk", "message": "Profile saved" }),
    );

    let profile = ctx.api.update_profile("wall", Position::Goalkeeper).await.unwrap();
    assert_eq!(profile.message.as_deref(), Some("Profile saved"));

    let req = &transport.requests()[0];
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.url, format!("{TEST_BASE_URL}/player/profile"));
    assert_eq!(req.bearer.as_deref(), Some("tok"));
    assert_eq!(req.body.as_deref(), Some(r#"{"nickname":"wall","position":"gk"}"#));

    assert_eq!(ctx.session.profile_setup_needed(), Some(false));
    assert_eq!(store.get(POSITION_LABEL_KEY).as_deref(), Some("Goalkeeper"));
    assert_eq!(ctx.session.nickname().as_deref(), Some("wall"));
}

#[tokio::test]
async fn update_profile_caches_unknown_position_verbatim() {
    let (ctx, transport, _) = signed_in_context();
    transport.respond_json(200, &serde_json::json!({ "nickname": "lib", "position": "sweeper" }));

    ctx.api.update_profile("lib", Position::Defender).await.unwrap();
    assert_eq!(ctx.session.position_label().as_deref(), Some("sweeper"));
}

#[tokio::test]
async fn update_profile_without_token_sends_nothing() {
    let (ctx, transport, _) = test_context();
    let err = ctx.api.update_profile("x", Position::Forward).await.unwrap_err();
    assert!(matches!(err, ApiError::MissingToken));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn update_profile_failure_leaves_flag_untouched() {
    let (ctx, transport, _) = test_context();
    ctx.session.record_auth("tok", true).unwrap();
    transport.respond_json(409, &serde_json::json!({ "message": "Nickname taken" }));

    let err = ctx.api.update_profile("taken", Position::Midfielder).await.unwrap_err();
    assert_eq!(err.to_string(), "Nickname taken");
    assert_eq!(ctx.session.profile_setup_needed(), Some(true));
    assert_eq!(ctx.session.token().as_deref(), Some("tok"));
}

// =========================================================================
// fetch_dashboard
// =========================================================================

#[tokio::test]
async fn fetch_dashboard_parses_snapshot() {
    let (ctx, transport, _) = signed_in_context();
    transport.respond_json(200, &dashboard_json());

    let snapshot = ctx.api.fetch_dashboard().await.unwrap();
    assert_eq!(snapshot.team_name.as_deref(), Some("FC Dynamo"));
    assert_eq!(snapshot.season_goals, Some(14));

    let req = &transport.requests()[0];
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, format!("{TEST_BASE_URL}/api/dashboard"));
    assert_eq!(req.bearer.as_deref(), Some("test-token"));
    assert_eq!(req.body, None);
}

#[tokio::test]
async fn fetch_dashboard_without_token_fails_locally() {
    let (ctx, transport, _) = test_context();
    let err = ctx.api.fetch_dashboard().await.unwrap_err();
    assert!(matches!(err, ApiError::MissingToken));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn unauthorized_response_clears_token() {
    let (ctx, transport, store) = signed_in_context();
    transport.respond_json(401, &serde_json::json!({ "message": "Token expired" }));

    let err = ctx.api.fetch_dashboard().await.unwrap_err();
    assert!(err.is_auth_failure());
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(ctx.session.profile_setup_needed(), Some(false));
}

#[tokio::test]
async fn forbidden_html_response_clears_token() {
    let (ctx, transport, _) = signed_in_context();
    transport.respond(403, "<h1>Forbidden</h1>");

    let err = ctx.api.create_match(&sample_match()).await.unwrap_err();
    assert_eq!(err.error_code(), "E_NON_JSON");
    assert_eq!(ctx.session.token(), None);
}

#[tokio::test]
async fn server_error_keeps_token() {
    let (ctx, transport, _) = signed_in_context();
    transport.respond(500, "Internal Server Error");

    let err = ctx.api.fetch_dashboard().await.unwrap_err();
    assert!(err.to_string().starts_with("error 500 while loading the dashboard"));
    assert_eq!(ctx.session.token().as_deref(), Some("test-token"));
}

#[tokio::test]
async fn fetch_dashboard_html_success_body_is_decode_error() {
    let (ctx, transport, _) = signed_in_context();
    transport.respond(200, &format!("<!DOCTYPE html>{}", "a".repeat(300)));

    let err = ctx.api.fetch_dashboard().await.unwrap_err();
    match err {
        ApiError::Decode { operation, mismatch, snippet } => {
            assert_eq!(operation, Operation::FetchDashboard);
            assert_eq!(mismatch, DecodeMismatch::NotJson);
            assert_eq!(snippet.chars().count(), DECODE_SNIPPET_CHARS);
        }
        other => panic!("expected Decode, got {other:?}"),
    }
}

// =========================================================================
// create_match / fetch_authorized
// =========================================================================

fn sample_match() -> NewMatch {
    NewMatch {
        opponent_team_name: "Rovers".to_owned(),
        match_date: "2026-10-24".to_owned(),
        match_time: "18:30".to_owned(),
        location: "North Park".to_owned(),
    }
}

#[tokio::test]
async fn create_match_posts_json() {
    let (ctx, transport, _) = signed_in_context();
    transport.respond(201, "");

    ctx.api.create_match(&sample_match()).await.unwrap();
    let req = &transport.requests()[0];
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, format!("{TEST_BASE_URL}/api/matches"));
    assert_eq!(req.content_type, Some(CONTENT_TYPE_JSON));
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["opponentTeamName"], "Rovers");
    assert_eq!(body["matchTime"], "18:30");
}

#[tokio::test]
async fn fetch_authorized_returns_json_or_null() {
    let (ctx, transport, _) = signed_in_context();
    transport.respond(200, r#"{"ok":true}"#);
    transport.respond(204, "");

    let first = ctx.api.fetch_authorized("/api/player/me").await.unwrap();
    assert_eq!(first, serde_json::json!({ "ok": true }));
    let second = ctx.api.fetch_authorized("api/ping").await.unwrap();
    assert_eq!(second, serde_json::Value::Null);
    assert_eq!(transport.requests()[1].url, format!("{TEST_BASE_URL}/api/ping"));
}

#[tokio::test]
async fn mock_transport_defaults_to_connection_refused() {
    let transport = MockTransport::new();
    let err = transport.send(HttpRequest::new(Method::Get, "https://x.test")).await.unwrap_err();
    assert_eq!(err.to_string(), "connection refused");
}
