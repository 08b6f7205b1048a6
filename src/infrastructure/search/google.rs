// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::credentials::EngineCredentials;
use crate::domain::models::search_query::{CandidateLink, Engine, SearchQuery};
use crate::domain::search::engine::{SearchError, SearchProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    items: Vec<GoogleItem>,
}

#[derive(Debug, Deserialize)]
struct GoogleItem {
    link: Option<String>,
}

/// Google 搜索引擎实现
/// 基于 Custom Search JSON API，需要 API key 与搜索上下文 id (cx)
pub struct GoogleSearchEngine {
    client: Client,
    endpoint: String,
}

impl GoogleSearchEngine {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// 从响应体中提取链接，缺少 link 字段的条目被跳过
    fn extract_links(body: GoogleResponse) -> Vec<CandidateLink> {
        body.items.into_iter().filter_map(|item| item.link).collect()
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchEngine {
    async fn search(
        &self,
        query: &SearchQuery,
        credentials: &EngineCredentials,
    ) -> Result<Vec<CandidateLink>, SearchError> {
        let cx = credentials
            .context_id
            .as_deref()
            .ok_or(SearchError::MissingCredential("google cse_id"))?;
        let q = query.text();

        info!("Google搜索请求: query={}", q);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("key", credentials.api_key.as_str()), ("cx", cx), ("q", q.as_str())])
            .send()
            .await
            .map_err(|e| SearchError::NetworkError(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SearchError::Status {
                engine: Engine::Google,
                status: response.status().as_u16(),
            });
        }

        let body: GoogleResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        Ok(Self::extract_links(body))
    }

    fn engine(&self) -> Engine {
        Engine::Google
    }
}
