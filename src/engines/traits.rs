// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非 2xx 状态码
    #[error("Unexpected status: {0}")]
    HttpStatus(u16),
    /// 浏览器错误
    #[error("Browser error: {0}")]
    Browser(String),
    /// 没有处理该模式的引擎
    #[error("No engine registered for {0} mode")]
    NoEngine(RenderMode),
}

/// 抓取模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// 纯 HTTP GET
    Static,
    /// 无头浏览器渲染
    Rendered,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Static => f.write_str("static"),
            RenderMode::Rendered => f.write_str("rendered"),
        }
    }
}

/// 抓取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 本次请求使用的 User-Agent
    pub user_agent: String,
    /// 超时时间
    pub timeout: Duration,
}

/// 抓取响应
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// 页面原始标记
    pub content: String,
    /// 渲染等待是否超时（仅渲染模式）
    pub partial: bool,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 页面抓取引擎特质
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 执行抓取
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError>;

    /// 该引擎实现的抓取模式
    fn mode(&self) -> RenderMode;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
