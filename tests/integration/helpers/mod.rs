// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use mentionscan::domain::models::credentials::{Credentials, EngineCredentials};
use mentionscan::domain::models::run::RunRequest;
use mentionscan::domain::models::search_query::{CandidateLink, Engine, SearchQuery};
use mentionscan::domain::search::engine::{SearchError, SearchProvider};
use mentionscan::domain::services::notification_service::{Notification, Notifier, NotifyError};
use mentionscan::domain::services::verification_service::VerificationService;
use mentionscan::engines::router::{EngineRouter, RenderPolicy};
use mentionscan::engines::traits::{
    EngineError, FetchRequest, FetchResponse, PageFetcher, RenderMode,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Returns the same links for every query and records the query texts.
pub struct StaticProvider {
    engine: Engine,
    links: Vec<String>,
    pub queries: Mutex<Vec<String>>,
}

impl StaticProvider {
    pub fn new(engine: Engine, links: &[&str]) -> Self {
        Self {
            engine,
            links: links.iter().map(|l| l.to_string()).collect(),
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SearchProvider for StaticProvider {
    async fn search(
        &self,
        query: &SearchQuery,
        _credentials: &EngineCredentials,
    ) -> Result<Vec<CandidateLink>, SearchError> {
        self.queries.lock().unwrap().push(query.text());
        Ok(self.links.clone())
    }

    fn engine(&self) -> Engine {
        self.engine
    }
}

/// Fails every query with a non-2xx status.
pub struct FailingProvider(pub Engine);

#[async_trait]
impl SearchProvider for FailingProvider {
    async fn search(
        &self,
        _query: &SearchQuery,
        _credentials: &EngineCredentials,
    ) -> Result<Vec<CandidateLink>, SearchError> {
        Err(SearchError::Status {
            engine: self.0,
            status: 500,
        })
    }

    fn engine(&self) -> Engine {
        self.0
    }
}

/// Serves canned markup keyed by URL; unknown URLs are a 404.
pub struct CannedFetcher {
    mode: RenderMode,
    pages: HashMap<String, String>,
    partial: bool,
    pub fetched: Mutex<Vec<String>>,
}

impl CannedFetcher {
    pub fn new(mode: RenderMode, pages: &[(&str, &str)]) -> Self {
        Self {
            mode,
            pages: pages
                .iter()
                .map(|(url, html)| (url.to_string(), html.to_string()))
                .collect(),
            partial: false,
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Every response is flagged as a timed-out render.
    pub fn partial(mut self) -> Self {
        self.partial = true;
        self
    }
}

#[async_trait]
impl PageFetcher for CannedFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        self.fetched.lock().unwrap().push(request.url.clone());
        match self.pages.get(&request.url) {
            Some(content) => Ok(FetchResponse {
                content: content.clone(),
                partial: self.partial,
                response_time_ms: 1,
            }),
            None => Err(EngineError::HttpStatus(404)),
        }
    }

    fn mode(&self) -> RenderMode {
        self.mode
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

/// Collects notifications, optionally failing every delivery.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
    pub fail: bool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Status(502));
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

pub fn test_credentials() -> Arc<Credentials> {
    Arc::new(Credentials {
        google: EngineCredentials::new("g-key").with_context_id("g-cx"),
        bing: EngineCredentials::new("b-key"),
    })
}

pub fn acme_request() -> RunRequest {
    RunRequest {
        subject_name: "Acme".to_string(),
        name_variations: vec!["Acme Inc".to_string()],
        keywords: vec!["fraud".to_string()],
        notify_address: "ops@example.com".to_string(),
    }
}

pub fn router(fetchers: Vec<Arc<dyn PageFetcher>>, render_hosts: &[&str]) -> Arc<EngineRouter> {
    Arc::new(EngineRouter::new(
        fetchers,
        RenderPolicy::new(render_hosts.iter().map(|h| h.to_string()).collect()),
        Duration::from_secs(5),
    ))
}

pub fn pipeline(
    providers: Vec<Arc<dyn SearchProvider>>,
    fetchers: Vec<Arc<dyn PageFetcher>>,
    render_hosts: &[&str],
) -> VerificationService {
    VerificationService::new(providers, router(fetchers, render_hosts), test_credentials())
}
