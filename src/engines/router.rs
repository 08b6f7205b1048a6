// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{EngineError, FetchRequest, FetchResponse, PageFetcher, RenderMode};
use crate::engines::user_agents::random_user_agent;
use crate::utils::url_utils::{extract_domain, host_matches};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// 渲染策略
///
/// 主机名在允许列表中（或为其子域名）的页面使用渲染模式，其余使用静态模式
#[derive(Debug, Clone, Default)]
pub struct RenderPolicy {
    hosts: Vec<String>,
}

impl RenderPolicy {
    pub fn new(hosts: Vec<String>) -> Self {
        Self { hosts }
    }

    pub fn mode_for(&self, url: &str) -> RenderMode {
        match extract_domain(url) {
            Some(host) if self.hosts.iter().any(|h| host_matches(&host, h)) => {
                RenderMode::Rendered
            }
            _ => RenderMode::Static,
        }
    }
}

/// 引擎路由器
///
/// 根据抓取模式选择引擎，并为每次抓取随机选择 User-Agent
pub struct EngineRouter {
    /// 引擎列表
    engines: Vec<Arc<dyn PageFetcher>>,
    /// 渲染策略
    policy: RenderPolicy,
    /// 单次请求超时
    request_timeout: Duration,
}

impl EngineRouter {
    /// 创建新的引擎路由器
    ///
    /// # 参数
    ///
    /// * `engines` - 引擎列表，每种模式取第一个匹配的引擎
    /// * `policy` - 渲染策略
    /// * `request_timeout` - 单次请求超时
    pub fn new(
        engines: Vec<Arc<dyn PageFetcher>>,
        policy: RenderPolicy,
        request_timeout: Duration,
    ) -> Self {
        Self {
            engines,
            policy,
            request_timeout,
        }
    }

    pub fn select_mode(&self, url: &str) -> RenderMode {
        self.policy.mode_for(url)
    }

    /// 使用指定模式抓取页面
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 抓取响应
    /// * `Err(EngineError)` - 抓取失败或没有对应模式的引擎
    pub async fn fetch(&self, url: &str, mode: RenderMode) -> Result<FetchResponse, EngineError> {
        let engine = self
            .engines
            .iter()
            .find(|e| e.mode() == mode)
            .ok_or(EngineError::NoEngine(mode))?;

        let request = FetchRequest {
            url: url.to_string(),
            user_agent: random_user_agent().to_string(),
            timeout: self.request_timeout,
        };

        debug!(engine = engine.name(), %mode, url, "Fetching page");
        engine.fetch(&request).await
    }
}
