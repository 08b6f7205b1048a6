// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：核心业务实体和数据结构
/// - 仓库接口（repositories）：报告持久化抽象接口
/// - 搜索（search）：搜索引擎接口
/// - 服务（services）：查询规划、内容规范化、词项匹配与验证流水线
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
