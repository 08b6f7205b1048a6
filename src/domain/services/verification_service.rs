// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::credentials::Credentials;
use crate::domain::models::result_set::{AggregatedResultSet, VerifiedMatch};
use crate::domain::models::run::RunRequest;
use crate::domain::search::engine::SearchProvider;
use crate::domain::services::{content_normalizer, query_planner, term_matcher};
use crate::engines::router::EngineRouter;
use crate::engines::traits::RenderMode;
use crate::utils::url_utils::extract_domain;
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 验证服务
///
/// 对每个引擎、每个查询、每个候选链接依次执行：搜索 → 抓取 → 规范化 → 匹配 → 聚合。
/// 全程串行，单个查询或链接的失败只会使该项无结果，不会中断整个运行。
pub struct VerificationService {
    /// 按引擎迭代顺序排列的搜索提供者
    providers: Vec<Arc<dyn SearchProvider>>,
    /// 页面抓取路由
    router: Arc<EngineRouter>,
    /// 引擎凭据
    credentials: Arc<Credentials>,
}

impl VerificationService {
    pub fn new(
        providers: Vec<Arc<dyn SearchProvider>>,
        router: Arc<EngineRouter>,
        credentials: Arc<Credentials>,
    ) -> Self {
        Self {
            providers,
            router,
            credentials,
        }
    }

    /// 执行一次完整的搜索与验证
    ///
    /// # 参数
    ///
    /// * `request` - 运行输入
    ///
    /// # 返回值
    ///
    /// 按引擎、域名分组的已验证链接
    pub async fn run(&self, request: &RunRequest) -> AggregatedResultSet {
        let mut results = AggregatedResultSet::new();

        for provider in &self.providers {
            let engine = provider.engine();
            let credentials = self.credentials.for_engine(engine);

            for query in query_planner::plan_queries(engine, request) {
                counter!("search_queries_total", "engine" => engine.as_str()).increment(1);

                let links = match provider.search(&query, credentials).await {
                    Ok(links) => links,
                    Err(e) => {
                        warn!(%engine, query = %query.text(), "Search failed: {}", e);
                        counter!("search_provider_errors_total", "engine" => engine.as_str())
                            .increment(1);
                        continue;
                    }
                };
                debug!(%engine, query = %query.text(), count = links.len(), "Search returned links");

                for link in links {
                    let Some(domain) = extract_domain(&link) else {
                        warn!(%engine, link = %link, "Skipping link without a host");
                        continue;
                    };

                    let mode = self.router.select_mode(&link);
                    if self.verify(&link, &query.required_terms(), mode).await {
                        counter!("verified_links_total", "engine" => engine.as_str()).increment(1);
                        results.record(VerifiedMatch {
                            engine,
                            domain,
                            url: link,
                        });
                    }
                }
            }
        }

        info!(
            subject = %request.subject_name,
            matches = results.match_count(),
            "Verification run finished"
        );
        results
    }

    /// 验证页面是否同时包含所有词项
    ///
    /// 抓取或解析中的任何错误都会被记录并返回 `false`
    pub async fn verify(&self, url: &str, required_terms: &[&str], mode: RenderMode) -> bool {
        info!(url, %mode, "Checking link");

        let page = match self.router.fetch(url, mode).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url, "Error fetching page: {}", e);
                return false;
            }
        };

        debug!(url, elapsed_ms = page.response_time_ms, "Page fetched");
        if page.partial {
            debug!(url, "Matching against partially rendered content");
        }

        let text = content_normalizer::normalize(&page.content);
        let found = term_matcher::matches_all(&text, required_terms);
        info!(url, found, "Content found: {}", found);
        found
    }
}
