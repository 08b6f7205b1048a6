// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{pipeline, RecordingNotifier, StaticProvider};
use axum::http::StatusCode;
use axum_test::TestServer;
use mentionscan::application::use_cases::run_coordinator::RunCoordinator;
use mentionscan::domain::models::search_query::Engine;
use mentionscan::domain::search::engine::SearchProvider;
use mentionscan::infrastructure::storage::InMemoryReportSink;
use mentionscan::presentation::routes;
use std::sync::Arc;
use std::time::Duration;

struct TestApp {
    server: TestServer,
    provider: Arc<StaticProvider>,
    notifier: Arc<RecordingNotifier>,
}

fn create_test_app() -> TestApp {
    let provider = Arc::new(StaticProvider::new(Engine::Google, &[]));
    let notifier = Arc::new(RecordingNotifier::default());
    let providers: Vec<Arc<dyn SearchProvider>> = vec![provider.clone()];
    let coordinator = Arc::new(RunCoordinator::new(
        Arc::new(pipeline(providers, vec![], &[])),
        Arc::new(InMemoryReportSink::new()),
        notifier.clone(),
    ));

    TestApp {
        server: TestServer::new(routes::routes(coordinator)).unwrap(),
        provider,
        notifier,
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app.server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_version() {
    let app = create_test_app();
    let response = app.server.get("/v1/version").await;
    response.assert_text(env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_search_is_accepted_and_runs_in_background() {
    let app = create_test_app();

    let response = app
        .server
        .post("/search")
        .form(&[
            ("client_name", "Acme"),
            ("name_variations", "Acme Inc, ACME"),
            ("keywords", "fraud"),
            ("recipient_email", "ops@example.com"),
        ])
        .await;

    response.assert_status(StatusCode::ACCEPTED);
    response.assert_text("Search started!");

    // The run finishes on its own task
    for _ in 0..50 {
        if !app.notifier.sent.lock().unwrap().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(app.notifier.sent.lock().unwrap().len(), 1);
    assert_eq!(
        *app.provider.queries.lock().unwrap(),
        vec!["Acme fraud", "Acme Inc fraud", "ACME fraud"]
    );
}

#[tokio::test]
async fn test_search_without_keywords_is_rejected() {
    let app = create_test_app();

    let response = app
        .server
        .post("/search")
        .form(&[
            ("client_name", "Acme"),
            ("name_variations", ""),
            ("keywords", " , "),
            ("recipient_email", "ops@example.com"),
        ])
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("keywords"));
    assert!(app.provider.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_with_bad_address_is_rejected() {
    let app = create_test_app();

    let response = app
        .server
        .post("/search")
        .form(&[
            ("client_name", "Acme"),
            ("keywords", "fraud"),
            ("recipient_email", "not-an-address"),
        ])
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
