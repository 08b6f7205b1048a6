// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::NotifierSettings;
use crate::domain::services::notification_service::{Notification, Notifier, NotifyError};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use metrics::counter;
use reqwest::{header, Client};
use serde::Serialize;
use sha2::Sha256;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "X-Mentionscan-Signature";

#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// 签名载荷，返回十六进制 HMAC-SHA256
pub fn sign_payload(secret: &str, payload: &[u8]) -> Result<String, NotifyError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| NotifyError::Config(e.to_string()))?;
    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// 邮件中继通知器
///
/// 将通知以 JSON 形式 POST 到中继，配置密钥时附带签名头
pub struct WebhookNotifier {
    client: Client,
    relay_url: String,
    sender: String,
    secret: Option<String>,
}

impl WebhookNotifier {
    /// 创建新的中继通知器
    ///
    /// # 参数
    ///
    /// * `relay_url` - 中继地址
    /// * `sender` - 发件人地址
    /// * `secret` - 签名密钥
    pub fn new(
        relay_url: impl Into<String>,
        sender: impl Into<String>,
        secret: Option<String>,
    ) -> Result<Self, NotifyError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("Mentionscan-Notifier/0.1.0"),
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| NotifyError::Config(e.to_string()))?;

        Ok(Self {
            client,
            relay_url: relay_url.into(),
            sender: sender.into(),
            secret,
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        info!("Sending notification to {}", notification.to);
        counter!("notifications_attempted_total").increment(1);

        let payload = serde_json::to_vec(&RelayPayload {
            from: &self.sender,
            to: &notification.to,
            subject: &notification.subject,
            body: &notification.body,
        })
        .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        let mut request = self
            .client
            .post(&self.relay_url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(secret) = &self.secret {
            request = request.header(SIGNATURE_HEADER, sign_payload(secret, &payload)?);
        }

        let response = request
            .body(payload)
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Notification relay returned {}", status);
            counter!("notifications_failed_total").increment(1);
            return Err(NotifyError::Status(status.as_u16()));
        }

        info!("Email sent successfully to {}", notification.to);
        Ok(())
    }
}

/// 仅写日志的通知器，未配置中继时使用
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        info!(
            to = %notification.to,
            subject = %notification.subject,
            "No mail relay configured, notification logged only"
        );
        Ok(())
    }
}

/// 根据配置选择通知器
pub fn create_notifier(settings: &NotifierSettings) -> Result<Arc<dyn Notifier>, NotifyError> {
    match &settings.relay_url {
        Some(url) => Ok(Arc::new(WebhookNotifier::new(
            url.clone(),
            settings.sender.clone(),
            settings.secret.clone(),
        )?)),
        None => Ok(Arc::new(LogNotifier)),
    }
}
