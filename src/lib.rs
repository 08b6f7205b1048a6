// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 表单转换与运行编排
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心实体、查询规划、匹配与验证流水线
pub mod domain;

/// 引擎模块
///
/// 静态与渲染两种页面抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 搜索 API 客户端、报告存储、通知器与指标
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
