use std::time::Duration;

use directory_business::UsersSnapshot;
use directory_ui::DirectoryApp;
use directory_ui::state::State;
use egui_kittest::Harness;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time given to the mock server between frames.
pub const API_RESPONSE_WAIT_MS: u64 = 25;

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    #[allow(dead_code)]
    mock_server: MockServer,
    harness: Harness<'a, DirectoryApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, DirectoryApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, DirectoryApp> {
        &self.harness
    }

    /// App backed by a mock `/users` endpoint answering with `template`.
    pub async fn new_app(template: ResponseTemplate) -> Self {
        Self::new_app_expecting(template, 1..).await
    }

    pub async fn new_app_expecting(
        template: ResponseTemplate,
        expected_calls: impl Into<wiremock::Times>,
    ) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("limit", "50"))
            .respond_with(template)
            .expect(expected_calls)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = DirectoryApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

/// Seven users; with id-based statuses 1, 4, 7 are Inactive, 2, 5 Pending, 3, 6 Active.
#[allow(unused)]
pub fn seven_users() -> serde_json::Value {
    serde_json::json!({
        "users": [
            {"id": 1, "firstName": "Emily", "lastName": "Johnson", "email": "emily@corp.io", "role": "admin"},
            {"id": 2, "firstName": "David", "lastName": "Brown", "email": "dbrown@corp.io", "role": "user"},
            {"id": 3, "firstName": "Sophia", "lastName": "Davis", "email": "sophia@corp.io", "role": "moderator"},
            {"id": 4, "firstName": "Liam", "lastName": "Garcia", "email": "liam@dalton.dev", "role": "user"},
            {"id": 5, "firstName": "Dana", "lastName": "Scully", "email": "dana@fbi.gov", "role": "admin"},
            {"id": 6, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@corp.io", "role": "user"},
            {"id": 7, "firstName": "Amanda", "lastName": "Reed", "email": "amanda@corp.io", "role": "user"}
        ],
        "total": 7,
        "skip": 0,
        "limit": 50
    })
}

/// Step frames until the users snapshot leaves the loading state.
#[allow(unused)]
pub async fn wait_until_settled(harness: &mut Harness<'_, DirectoryApp>, max_frames: usize) {
    for _ in 0..max_frames {
        harness.step();
        tokio::time::sleep(Duration::from_millis(API_RESPONSE_WAIT_MS)).await;

        let settled = harness
            .state()
            .state
            .ctx
            .cached::<UsersSnapshot>()
            .is_some_and(|snapshot| !snapshot.is_loading());
        if settled {
            // Render the settled snapshot.
            harness.step();
            harness.step();
            return;
        }
    }

    panic!("Timed out waiting for the users fetch to settle");
}

/// Run a few frames so input changes reach the view.
#[allow(unused)]
pub fn settle_frames(harness: &mut Harness<'_, DirectoryApp>) {
    for _ in 0..3 {
        harness.step();
    }
}
