// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::run::RunRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// 触发表单
///
/// `name_variations` 与 `keywords` 为逗号分隔的列表
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RunRequestDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "client_name cannot be empty"))]
    pub client_name: String,
    #[serde(default)]
    pub name_variations: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    #[validate(email(message = "recipient_email is invalid"))]
    pub recipient_email: String,
}

/// Splits on commas, trims each entry and drops empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl RunRequestDto {
    /// 校验并转换为领域层的运行输入
    ///
    /// # 返回值
    ///
    /// * `Ok(RunRequest)` - 合法输入
    /// * `Err(RequestError)` - 名称为空、关键词为空或地址非法
    pub fn into_run_request(mut self) -> Result<RunRequest, RequestError> {
        self.client_name = self.client_name.trim().to_string();
        self.recipient_email = self.recipient_email.trim().to_string();
        self.validate()?;

        let keywords = split_list(&self.keywords);
        if keywords.is_empty() {
            return Err(RequestError::Empty("keywords"));
        }

        Ok(RunRequest {
            subject_name: self.client_name,
            name_variations: split_list(&self.name_variations),
            keywords,
            notify_address: self.recipient_email,
        })
    }
}
