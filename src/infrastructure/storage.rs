// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::result_set::AggregatedResultSet;
use crate::domain::repositories::report_repository::{ReportError, ReportSink};

/// Makes a subject name safe to use as a single path component.
fn sanitize_component(subject: &str) -> String {
    let cleaned: String = subject
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.trim_matches('.') {
        "" => "_".to_string(),
        s => s.to_string(),
    }
}

/// 本地文件系统报告实现
///
/// 报告路径：`<base>/<subject>/<subject>_<DD-MM-YYYY_HH-MM-SS>.txt`
pub struct LocalReportSink {
    base_path: PathBuf,
}

impl LocalReportSink {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn report_path(&self, subject: &str, timestamp: DateTime<Local>) -> PathBuf {
        let subject = sanitize_component(subject);
        let file_name = format!("{}_{}.txt", subject, timestamp.format("%d-%m-%Y_%H-%M-%S"));
        Path::new(&self.base_path).join(&subject).join(file_name)
    }
}

#[async_trait]
impl ReportSink for LocalReportSink {
    async fn persist(
        &self,
        subject: &str,
        results: &AggregatedResultSet,
        timestamp: DateTime<Local>,
    ) -> Result<String, ReportError> {
        let full_path = self.report_path(subject, timestamp);

        // 确保目录存在
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(&full_path).await?;
        file.write_all(results.render_text().as_bytes()).await?;
        file.flush().await?;

        let locator = full_path.to_string_lossy().to_string();
        info!("Report written to {}", locator);
        Ok(locator)
    }
}

/// 测试用的内存报告实现（用于单元测试）
#[derive(Default, Clone)]
pub struct InMemoryReportSink {
    reports: Arc<RwLock<HashMap<String, AggregatedResultSet>>>,
}

impl InMemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, locator: &str) -> Option<AggregatedResultSet> {
        self.reports.read().await.get(locator).cloned()
    }

    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }
}

#[async_trait]
impl ReportSink for InMemoryReportSink {
    async fn persist(
        &self,
        subject: &str,
        results: &AggregatedResultSet,
        _timestamp: DateTime<Local>,
    ) -> Result<String, ReportError> {
        let locator = format!("memory://{}/{}", sanitize_component(subject), Uuid::new_v4());
        self.reports
            .write()
            .await
            .insert(locator.clone(), results.clone());
        Ok(locator)
    }
}
