// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::credentials::{Credentials, EngineCredentials};
use crate::domain::models::search_query::Engine;
use crate::infrastructure::search::{bing, google};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// 应用程序配置设置
///
/// 进程启动时构建一次，之后作为参数向下传递
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 搜索配置
    pub search: SearchSettings,
    /// Google 凭据与端点
    pub google: GoogleSettings,
    /// Bing 凭据与端点
    pub bing: BingSettings,
    /// 页面抓取配置
    pub fetch: FetchSettings,
    /// 报告配置
    pub report: ReportSettings,
    /// 通知配置
    pub notifier: NotifierSettings,
    /// 指标配置
    #[serde(default)]
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 搜索配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 引擎迭代顺序
    #[serde(default = "default_engines", deserialize_with = "list_or_csv")]
    pub engines: Vec<Engine>,
    /// 搜索 API 请求超时（秒）
    pub timeout_secs: u64,
}

impl SearchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Google Custom Search 配置
#[derive(Clone, Deserialize)]
pub struct GoogleSettings {
    pub endpoint: String,
    pub api_key: String,
    pub cse_id: String,
}

/// Bing Web Search 配置
#[derive(Clone, Deserialize)]
pub struct BingSettings {
    pub endpoint: String,
    pub api_key: String,
}

impl std::fmt::Debug for GoogleSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .field("cse_id", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for BingSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BingSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// 页面抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 渲染模式下等待 body 的最长时间（秒）
    pub render_wait_secs: u64,
    /// 需要渲染模式的主机列表
    #[serde(default = "default_render_hosts", deserialize_with = "list_or_csv")]
    pub render_hosts: Vec<String>,
}

impl FetchSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn render_wait(&self) -> Duration {
        Duration::from_secs(self.render_wait_secs)
    }
}

/// 报告配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// 报告根目录
    pub base_dir: String,
}

/// 通知配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierSettings {
    /// 发件人地址
    pub sender: String,
    /// 邮件中继地址，未设置时仅写日志
    pub relay_url: Option<String>,
    /// 中继签名密钥
    pub secret: Option<String>,
}

/// 指标配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsSettings {
    /// Prometheus 监听地址，未设置时不启动导出器
    pub listen_addr: Option<SocketAddr>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrCsv<T> {
    List(Vec<T>),
    Csv(String),
}

/// 列表配置既可写成数组，也可写成逗号分隔的字符串（环境变量）
fn list_or_csv<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match ListOrCsv::<T>::deserialize(deserializer)? {
        ListOrCsv::List(items) => Ok(items),
        ListOrCsv::Csv(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|item| {
                T::deserialize(IntoDeserializer::<D::Error>::into_deserializer(item.to_string()))
            })
            .collect(),
    }
}

fn default_engines() -> Vec<Engine> {
    vec![Engine::Google, Engine::Bing]
}

fn default_render_hosts() -> Vec<String> {
    vec!["liverpoolecho.co.uk".to_string()]
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载内置默认值、`config/default`、`config/{APP_ENVIRONMENT}` 与 `MENTIONSCAN__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败（例如缺少 API 凭据）
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("MENTIONSCAN").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 从指定文件加载配置（叠加在内置默认值之上）
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_string_lossy().to_string();
        Self::defaults()?
            .add_source(File::with_name(&path))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("search.timeout_secs", 30)?
            .set_default("google.endpoint", google::DEFAULT_ENDPOINT)?
            .set_default("bing.endpoint", bing::DEFAULT_ENDPOINT)?
            .set_default("fetch.request_timeout_secs", 30)?
            .set_default("fetch.render_wait_secs", 10)?
            .set_default("report.base_dir", "./reports")?
            .set_default("notifier.sender", "noreply@localhost")
    }

    /// 各引擎凭据
    pub fn credentials(&self) -> Credentials {
        Credentials {
            google: EngineCredentials::new(self.google.api_key.clone())
                .with_context_id(self.google.cse_id.clone()),
            bing: EngineCredentials::new(self.bing.api_key.clone()),
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
