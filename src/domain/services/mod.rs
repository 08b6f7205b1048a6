// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务。
///
/// 包含的服务：
/// - 查询规划（query_planner）：名称变体与关键词的笛卡尔积
/// - 内容规范化（content_normalizer）：去除噪声元素并压平文本
/// - 词项匹配（term_matcher）：大小写无关的全量子串匹配
/// - 通知服务（notification_service）：运行报告通知的接口与正文构建
/// - 验证服务（verification_service）：搜索、抓取、匹配与聚合的流水线
pub mod content_normalizer;
pub mod notification_service;
pub mod query_planner;
pub mod term_matcher;
pub mod verification_service;
