use super::*;
use crate::state::test_helpers::{signed_in_context, test_context};
use crate::storage::KeyValueStore;
use crate::storage::session::{NICKNAME_KEY, PROFILE_SETUP_KEY, TOKEN_KEY};

fn telegram_launch() -> LaunchContext {
    LaunchContext {
        pathname: "/app/js/main.js".to_owned(),
        query: String::new(),
        init_data: Some("query_id=AAH&user=%7B%22id%22%3A1%7D&hash=ab12".to_owned()),
    }
}

#[tokio::test]
async fn new_player_lands_on_position_selection() {
    let (ctx, transport, _) = test_context();
    transport.respond_json(200, &serde_json::json!({ "token": "jwt-1", "requiresProfileSetup": true }));

    let outcome = boot(&ctx, &telegram_launch()).await;

    assert_eq!(
        outcome,
        BootOutcome::Routed { screen: Screen::PositionSelection, source: RouteSource::Authenticated }
    );
    assert_eq!(ctx.session.token().as_deref(), Some("jwt-1"));
    assert_eq!(ctx.base_path(), "/app/");
}

#[tokio::test]
async fn returning_player_lands_on_dashboard() {
    let (ctx, transport, _) = test_context();
    transport.respond_json(200, &serde_json::json!({ "token": "jwt-2", "requiresProfileSetup": false }));

    let outcome = boot(&ctx, &telegram_launch()).await;

    assert_eq!(outcome, BootOutcome::Routed { screen: Screen::Dashboard, source: RouteSource::Authenticated });
    assert_eq!(ctx.session.profile_setup_needed(), Some(false));
}

#[tokio::test]
async fn second_boot_is_a_no_op() {
    let (ctx, transport, _) = test_context();
    transport.respond_json(200, &serde_json::json!({ "token": "jwt-1", "requiresProfileSetup": false }));

    boot(&ctx, &telegram_launch()).await;
    let again = boot(&ctx, &telegram_launch()).await;

    assert_eq!(again, BootOutcome::AlreadyStarted);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn clones_share_the_boot_flag() {
    let (ctx, _, _) = test_context();
    let launch = LaunchContext::default();

    boot(&ctx.clone(), &launch).await;
    assert_eq!(boot(&ctx, &launch).await, BootOutcome::AlreadyStarted);
}

#[tokio::test]
async fn offline_boot_without_cache_goes_to_setup() {
    let (ctx, transport, _) = test_context();

    let outcome = boot(&ctx, &LaunchContext::default()).await;

    assert_eq!(outcome, BootOutcome::Routed { screen: Screen::PositionSelection, source: RouteSource::Offline });
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn offline_boot_honours_cached_flag() {
    let (ctx, _, store) = test_context();
    store.set(PROFILE_SETUP_KEY, "false").unwrap();

    let outcome = boot(&ctx, &LaunchContext::default()).await;

    assert_eq!(outcome, BootOutcome::Routed { screen: Screen::Dashboard, source: RouteSource::Offline });
}

#[tokio::test]
async fn offline_boot_treats_odd_flag_as_needing_setup() {
    let (ctx, _, store) = test_context();
    store.set(PROFILE_SETUP_KEY, "maybe").unwrap();

    let outcome = boot(&ctx, &LaunchContext::default()).await;

    assert_eq!(outcome, BootOutcome::Routed { screen: Screen::PositionSelection, source: RouteSource::Offline });
}

#[tokio::test]
async fn reset_flag_clears_session_and_stops() {
    let (ctx, transport, store) = signed_in_context();
    store.set(NICKNAME_KEY, "nine").unwrap();
    let launch = LaunchContext { query: "?reset=true".to_owned(), ..telegram_launch() };

    let outcome = boot(&ctx, &launch).await;

    assert_eq!(outcome, BootOutcome::Reset);
    assert!(store.is_empty());
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn rejected_launch_data_reports_failure() {
    let (ctx, transport, _) = test_context();
    transport.respond_json(403, &serde_json::json!({ "message": "Invalid init data" }));

    let outcome = boot(&ctx, &telegram_launch()).await;

    assert_eq!(outcome, BootOutcome::AuthFailed { message: "Invalid init data".to_owned() });
    assert_eq!(ctx.session.token(), None);
}

#[tokio::test]
async fn unreachable_backend_reports_failure() {
    let (ctx, transport, _) = test_context();
    transport.fail("dns error");

    let outcome = boot(&ctx, &telegram_launch()).await;

    assert!(matches!(outcome, BootOutcome::AuthFailed { ref message } if message.contains("dns error")));
}
