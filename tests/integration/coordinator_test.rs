// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{acme_request, pipeline, CannedFetcher, RecordingNotifier, StaticProvider};
use mentionscan::application::use_cases::run_coordinator::RunCoordinator;
use mentionscan::domain::models::run::RunOutcome;
use mentionscan::domain::models::search_query::Engine;
use mentionscan::domain::search::engine::SearchProvider;
use mentionscan::domain::services::verification_service::VerificationService;
use mentionscan::engines::traits::{PageFetcher, RenderMode};
use mentionscan::infrastructure::storage::{InMemoryReportSink, LocalReportSink};
use std::sync::Arc;

const NEWS_URL: &str = "http://news.example.com/a";

fn acme_pipeline() -> Arc<VerificationService> {
    let providers: Vec<Arc<dyn SearchProvider>> =
        vec![Arc::new(StaticProvider::new(Engine::Google, &[NEWS_URL]))];
    let fetchers: Vec<Arc<dyn PageFetcher>> = vec![Arc::new(CannedFetcher::new(
        RenderMode::Static,
        &[(NEWS_URL, "<p>Acme Inc accused of fraud</p>")],
    ))];
    Arc::new(pipeline(providers, fetchers, &[]))
}

#[tokio::test]
async fn test_run_persists_and_notifies() {
    let sink = Arc::new(InMemoryReportSink::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let coordinator = Arc::new(RunCoordinator::new(
        acme_pipeline(),
        sink.clone(),
        notifier.clone(),
    ));

    let outcome = coordinator.spawn(acme_request()).wait().await;

    let RunOutcome::Completed {
        report_locator,
        match_count,
    } = outcome.clone()
    else {
        panic!("run did not complete: {:?}", outcome);
    };
    assert_eq!(match_count, 2);

    let stored = sink.get(&report_locator).await.unwrap();
    assert_eq!(stored.urls(Engine::Google, "news.example.com").unwrap().len(), 2);

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ops@example.com");
    assert_eq!(sent[0].subject, "Search Results for Acme");
    assert!(sent[0].body.contains(&format!("Report Location: {}", report_locator)));
    assert!(sent[0].body.contains("Domain: news.example.com"));
    assert!(!sent[0].body.contains("g-key"));
    assert!(!sent[0].body.contains("b-key"));
}

#[tokio::test]
async fn test_notifier_failure_ends_run_as_failed() {
    let notifier = Arc::new(RecordingNotifier {
        fail: true,
        ..Default::default()
    });
    let coordinator = Arc::new(RunCoordinator::new(
        acme_pipeline(),
        Arc::new(InMemoryReportSink::new()),
        notifier,
    ));

    let outcome = coordinator.spawn(acme_request()).wait().await;
    assert!(matches!(outcome, RunOutcome::Failed { .. }));
}

#[tokio::test]
async fn test_run_writes_local_report() {
    let dir = tempfile::tempdir().unwrap();
    let coordinator = Arc::new(RunCoordinator::new(
        acme_pipeline(),
        Arc::new(LocalReportSink::new(dir.path())),
        Arc::new(RecordingNotifier::default()),
    ));

    let outcome = coordinator.spawn(acme_request()).wait().await;
    let RunOutcome::Completed { report_locator, .. } = outcome.clone() else {
        panic!("run did not complete: {:?}", outcome);
    };

    assert!(report_locator.starts_with(&dir.path().join("Acme").to_string_lossy().to_string()));
    let contents = tokio::fs::read_to_string(&report_locator).await.unwrap();
    assert_eq!(
        contents,
        format!(
            "google Results:\n\nDomain: news.example.com\n  - {0}\n  - {0}\n\n",
            NEWS_URL
        )
    );
}
