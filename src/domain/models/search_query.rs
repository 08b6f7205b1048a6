// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 搜索引擎标识
///
/// 每个变体对应一个外部搜索 API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Google Custom Search JSON API
    Google,
    /// Bing Web Search API v7
    Bing,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Google => "google",
            Engine::Bing => "bing",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL returned by a search provider for one query.
pub type CandidateLink = String;

/// 单个搜索查询
///
/// 由名称变体和关键词组成，构建后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    engine: Engine,
    variation_text: String,
    keyword_text: String,
}

impl SearchQuery {
    pub fn new(engine: Engine, variation_text: impl Into<String>, keyword_text: impl Into<String>) -> Self {
        Self {
            engine,
            variation_text: variation_text.into(),
            keyword_text: keyword_text.into(),
        }
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Text sent to the provider: variation and keyword joined by one space, trimmed.
    pub fn text(&self) -> String {
        format!("{} {}", self.variation_text, self.keyword_text)
            .trim()
            .to_string()
    }

    /// Terms a discovered page must contain to count as a match.
    pub fn required_terms(&self) -> [&str; 2] {
        [&self.variation_text, &self.keyword_text]
    }
}
