// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::search_query::Engine;
use crate::domain::search::engine::{SearchError, SearchProvider};
use crate::infrastructure::search::bing::BingSearchEngine;
use crate::infrastructure::search::google::GoogleSearchEngine;
use std::sync::Arc;
use tracing::info;

/// 搜索引擎工厂
///
/// 按配置的引擎顺序创建搜索提供者
pub struct SearchEngineFactory;

impl SearchEngineFactory {
    /// 创建单个引擎的提供者
    pub fn create(engine: Engine, settings: &Settings) -> Result<Arc<dyn SearchProvider>, SearchError> {
        let timeout = settings.search.timeout();
        let provider: Arc<dyn SearchProvider> = match engine {
            Engine::Google => Arc::new(GoogleSearchEngine::new(
                settings.google.endpoint.clone(),
                timeout,
            )?),
            Engine::Bing => Arc::new(BingSearchEngine::new(
                settings.bing.endpoint.clone(),
                timeout,
            )?),
        };
        Ok(provider)
    }

    /// 按 `search.engines` 顺序创建所有提供者
    pub fn create_all(settings: &Settings) -> Result<Vec<Arc<dyn SearchProvider>>, SearchError> {
        let providers = settings
            .search
            .engines
            .iter()
            .map(|engine| Self::create(*engine, settings))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Search providers ready: {:?}",
            providers.iter().map(|p| p.engine().as_str()).collect::<Vec<_>>()
        );
        Ok(providers)
    }
}
