// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use mentionscan::domain::models::credentials::EngineCredentials;
use mentionscan::domain::models::search_query::{Engine, SearchQuery};
use mentionscan::domain::search::engine::{SearchError, SearchProvider};
use mentionscan::infrastructure::search::bing::BingSearchEngine;
use mentionscan::infrastructure::search::google::GoogleSearchEngine;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query(engine: Engine) -> SearchQuery {
    SearchQuery::new(engine, "Acme Inc", "fraud")
}

#[tokio::test]
async fn test_google_sends_key_cx_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("key", "g-key"))
        .and(query_param("cx", "g-cx"))
        .and(query_param("q", "Acme Inc fraud"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"title": "one", "link": "https://news.example.com/a"},
                {"title": "no link"},
                {"title": "two", "link": "https://blog.example.org/b"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let engine = GoogleSearchEngine::new(
        format!("{}/customsearch/v1", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();
    let credentials = EngineCredentials::new("g-key").with_context_id("g-cx");

    let links = engine
        .search(&query(Engine::Google), &credentials)
        .await
        .unwrap();
    assert_eq!(
        links,
        vec!["https://news.example.com/a", "https://blog.example.org/b"]
    );
}

#[tokio::test]
async fn test_google_without_items_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"kind": "customsearch#search"})))
        .mount(&server)
        .await;

    let engine = GoogleSearchEngine::new(server.uri(), Duration::from_secs(5)).unwrap();
    let credentials = EngineCredentials::new("g-key").with_context_id("g-cx");

    let links = engine
        .search(&query(Engine::Google), &credentials)
        .await
        .unwrap();
    assert!(links.is_empty());
}

#[tokio::test]
async fn test_google_missing_context_id_is_an_error() {
    let engine = GoogleSearchEngine::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
    let err = engine
        .search(&query(Engine::Google), &EngineCredentials::new("g-key"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::MissingCredential(_)));
}

#[tokio::test]
async fn test_google_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let engine = GoogleSearchEngine::new(server.uri(), Duration::from_secs(5)).unwrap();
    let credentials = EngineCredentials::new("g-key").with_context_id("g-cx");

    let err = engine
        .search(&query(Engine::Google), &credentials)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SearchError::Status {
            engine: Engine::Google,
            status: 403
        }
    );
}

#[tokio::test]
async fn test_bing_sends_subscription_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v7.0/search"))
        .and(header("Ocp-Apim-Subscription-Key", "b-key"))
        .and(query_param("q", "Acme Inc fraud"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "webPages": {"value": [
                {"name": "one", "url": "https://news.example.com/a"}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let engine = BingSearchEngine::new(
        format!("{}/v7.0/search", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();

    let links = engine
        .search(&query(Engine::Bing), &EngineCredentials::new("b-key"))
        .await
        .unwrap();
    assert_eq!(links, vec!["https://news.example.com/a"]);
}

#[tokio::test]
async fn test_bing_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let engine = BingSearchEngine::new(server.uri(), Duration::from_secs(5)).unwrap();
    let err = engine
        .search(&query(Engine::Bing), &EngineCredentials::new("b-key"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)));
}
