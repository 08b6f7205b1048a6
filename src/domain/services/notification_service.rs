// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::run::RunRequest;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
    #[error("Relay returned status {0}")]
    Status(u16),
    #[error("Notifier misconfigured: {0}")]
    Config(String),
}

/// 一封待发送的通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Notification {
    /// 为一次完成的运行构建通知
    ///
    /// 正文只包含运行摘要与报告内容，不包含任何凭据
    ///
    /// # 参数
    ///
    /// * `request` - 运行输入
    /// * `report_locator` - 报告定位符
    /// * `report_text` - 报告正文
    /// * `executed_at` - 执行时间
    /// * `ticket` - 工单号
    pub fn run_report(
        request: &RunRequest,
        report_locator: &str,
        report_text: &str,
        executed_at: DateTime<Local>,
        ticket: &str,
    ) -> Self {
        let search_terms = std::iter::once(request.subject_name.as_str())
            .chain(request.keywords.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");

        let body = format!(
            "[EXECUTION OF SCRIPT REPORT]\n\n\
             Time of Execution: {}\n\
             Date of Execution: {}\n\n\
             Ticket Number (for IT Purposes): {}\n\n\
             Search Terms Used: {}\n\n\
             Report Location: {}\n\n\
             Results Output:\n{}\n",
            executed_at.format("%H:%M:%S"),
            executed_at.format("%Y-%m-%d"),
            ticket,
            search_terms,
            report_locator,
            report_text,
        );

        Self {
            to: request.notify_address.clone(),
            subject: format!("Search Results for {}", request.subject_name),
            body,
        }
    }
}

/// Six random digits used to tag a run in its notification.
pub fn generate_ticket_number() -> String {
    let mut rng = rand::rng();
    (0..6)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// 通知服务特质
///
/// 将最终消息投递到目标地址，不重试
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}
