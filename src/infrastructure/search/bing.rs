// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::credentials::EngineCredentials;
use crate::domain::models::search_query::{CandidateLink, Engine, SearchQuery};
use crate::domain::search::engine::{SearchError, SearchProvider};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/search";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

#[derive(Debug, Deserialize)]
struct BingResponse {
    #[serde(rename = "webPages")]
    web_pages: Option<BingWebPages>,
}

#[derive(Debug, Deserialize)]
struct BingWebPages {
    #[serde(default)]
    value: Vec<BingWebPage>,
}

#[derive(Debug, Deserialize)]
struct BingWebPage {
    url: Option<String>,
}

/// Bing Search Engine implementation on the Web Search API v7.
///
/// The subscription key travels as a header; results are nested under
/// `webPages.value`.
pub struct BingSearchEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl BingSearchEngine {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn extract_links(body: BingResponse) -> Vec<CandidateLink> {
        body.web_pages
            .map(|pages| pages.value.into_iter().filter_map(|page| page.url).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SearchProvider for BingSearchEngine {
    async fn search(
        &self,
        query: &SearchQuery,
        credentials: &EngineCredentials,
    ) -> Result<Vec<CandidateLink>, SearchError> {
        let q = query.text();
        info!("Bing search request: query={}", q);

        let response = self
            .client
            .get(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, credentials.api_key.as_str())
            .query(&[("q", q.as_str())])
            .send()
            .await
            .map_err(|e| SearchError::NetworkError(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SearchError::Status {
                engine: Engine::Bing,
                status: response.status().as_u16(),
            });
        }

        let body: BingResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        Ok(Self::extract_links(body))
    }

    fn engine(&self) -> Engine {
        Engine::Bing
    }
}
