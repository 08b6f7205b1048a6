// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含领域接口的技术实现：
/// - 指标（metrics）：Prometheus 导出器
/// - 搜索（search）：搜索引擎 API 客户端
/// - 服务（services）：通知器实现
/// - 存储（storage）：报告落盘
pub mod metrics;
pub mod search;
pub mod services;
pub mod storage;
