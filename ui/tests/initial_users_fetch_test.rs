//! Integration tests for the one-time users fetch on app load.
//!
//! These tests verify that:
//! 1. The users endpoint is requested exactly once, however many frames run
//! 2. The loading view is shown while the request is in flight
//! 3. A failed request shows the error view instead of the table

mod common;

use std::time::Duration;

use common::{TestCtx, seven_users, wait_until_settled};
use directory_business::UsersSnapshot;
use kittest::Queryable;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_initial_fetch_is_triggered_once() {
    let mut ctx = TestCtx::new_app_expecting(
        ResponseTemplate::new(200).set_body_json(seven_users()),
        1,
    )
    .await;
    let harness = ctx.harness_mut();

    wait_until_settled(harness, 80).await;

    // Keep rendering; the fetch must not repeat.
    for _ in 0..10 {
        harness.step();
    }
    tokio::time::sleep(Duration::from_millis(50)).await;

    // The mock server verifies the call count when dropped.
}

#[tokio::test]
async fn test_loading_view_while_fetching() {
    let mut ctx = TestCtx::new_app(
        ResponseTemplate::new(200)
            .set_body_json(seven_users())
            .set_delay(Duration::from_secs(1)),
    )
    .await;
    let harness = ctx.harness_mut();

    harness.step();

    let snapshot = harness
        .state()
        .state
        .ctx
        .cached::<UsersSnapshot>()
        .expect("UsersSnapshot should be recorded");
    assert!(snapshot.is_loading());

    assert!(
        harness.query_by_label_contains("Loading users").is_some(),
        "Should display 'Loading users...' while fetching"
    );
    assert!(
        harness.query_by_label("Rows per page").is_none(),
        "The table should not render while loading"
    );
    assert!(harness.query_by_label("User Database").is_some());
}

#[tokio::test]
async fn test_server_error_shows_error_view() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(500)).await;
    let harness = ctx.harness_mut();

    wait_until_settled(harness, 80).await;

    let snapshot = harness
        .state()
        .state
        .ctx
        .cached::<UsersSnapshot>()
        .expect("UsersSnapshot should be recorded");
    assert!(!snapshot.is_loading());
    assert!(snapshot.error().is_some_and(|message| !message.is_empty()));
    assert!(snapshot.records().is_empty());

    assert!(
        harness.query_by_label_contains("Error: ").is_some(),
        "Should display the error message"
    );
    assert!(harness.query_by_label("Users Directory").is_none());
    assert!(harness.query_by_label("Rows per page").is_none());
}

#[tokio::test]
async fn test_malformed_payload_shows_error_view() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(200).set_body_string("not json")).await;
    let harness = ctx.harness_mut();

    wait_until_settled(harness, 80).await;

    assert!(harness.query_by_label_contains("Error: ").is_some());
    assert!(harness.query_by_label_contains("Loading users").is_none());
}
