// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::result_set::AggregatedResultSet;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use thiserror::Error;

/// 报告错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 报告仓库特质
///
/// 持久化一次运行的聚合结果
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// 保存结果并返回稳定的定位符（路径或 URI）
    ///
    /// # 参数
    ///
    /// * `subject` - 主体名称
    /// * `results` - 聚合结果集
    /// * `timestamp` - 运行时间
    async fn persist(
        &self,
        subject: &str,
        results: &AggregatedResultSet,
        timestamp: DateTime<Local>,
    ) -> Result<String, ReportError>;
}
