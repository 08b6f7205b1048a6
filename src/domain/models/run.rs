// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 一次验证运行的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// 主体名称（客户/品牌）
    pub subject_name: String,
    /// 名称变体，可以为空
    pub name_variations: Vec<String>,
    /// 必须同时出现的关键词，非空
    pub keywords: Vec<String>,
    /// 通知地址
    pub notify_address: String,
}

impl RunRequest {
    /// The subject name followed by every variation, duplicates kept.
    pub fn all_variations(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.subject_name.as_str())
            .chain(self.name_variations.iter().map(String::as_str))
    }
}

/// Completion signal of a background run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed {
        report_locator: String,
        match_count: usize,
    },
    Failed {
        reason: String,
    },
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }
}
