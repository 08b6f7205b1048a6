// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::result_set::AggregatedResultSet;
use crate::domain::models::run::{RunOutcome, RunRequest};
use crate::domain::repositories::report_repository::{ReportError, ReportSink};
use crate::domain::services::notification_service::{
    generate_ticket_number, Notification, Notifier, NotifyError,
};
use crate::domain::services::verification_service::VerificationService;
use chrono::Local;
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, Instrument};
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

/// 后台运行的句柄
///
/// 触发端可以直接丢弃，测试中可等待其完成信号
pub struct RunHandle {
    id: Uuid,
    handle: JoinHandle<RunOutcome>,
}

impl RunHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 等待运行结束
    pub async fn wait(self) -> RunOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => RunOutcome::Failed {
                reason: format!("run task aborted: {}", e),
            },
        }
    }
}

/// 运行协调器
///
/// 在独立任务中执行验证流水线，完成后写报告并发送通知
pub struct RunCoordinator {
    pipeline: Arc<VerificationService>,
    report_sink: Arc<dyn ReportSink>,
    notifier: Arc<dyn Notifier>,
}

impl RunCoordinator {
    pub fn new(
        pipeline: Arc<VerificationService>,
        report_sink: Arc<dyn ReportSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            pipeline,
            report_sink,
            notifier,
        }
    }

    /// 在后台启动一次运行并立即返回
    ///
    /// # 参数
    ///
    /// * `request` - 已校验的运行输入
    ///
    /// # 返回值
    ///
    /// 返回可等待的运行句柄
    pub fn spawn(self: &Arc<Self>, request: RunRequest) -> RunHandle {
        let id = Uuid::new_v4();
        let coordinator = Arc::clone(self);
        let span = tracing::info_span!("run", %id, subject = %request.subject_name);

        let handle = tokio::spawn(
            async move {
                info!("Run started");
                counter!("runs_started_total").increment(1);
                match coordinator.execute(&request).await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        error!("Run failed: {}", e);
                        counter!("runs_failed_total").increment(1);
                        RunOutcome::Failed {
                            reason: e.to_string(),
                        }
                    }
                }
            }
            .instrument(span),
        );

        RunHandle { id, handle }
    }

    /// 顺序执行：验证 → 落盘 → 通知
    pub async fn execute(&self, request: &RunRequest) -> Result<RunOutcome, RunError> {
        let results: AggregatedResultSet = self.pipeline.run(request).await;
        let executed_at = Local::now();

        let report_locator = self
            .report_sink
            .persist(&request.subject_name, &results, executed_at)
            .await?;

        let notification = Notification::run_report(
            request,
            &report_locator,
            &results.render_text(),
            executed_at,
            &generate_ticket_number(),
        );
        self.notifier.notify(&notification).await?;

        let match_count = results.match_count();
        info!(
            report = %report_locator,
            matches = match_count,
            "Run completed"
        );

        Ok(RunOutcome::Completed {
            report_locator,
            match_count,
        })
    }
}
