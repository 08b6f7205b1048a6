// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 搜索查询（search_query）：引擎标识与查询组合
/// - 凭据（credentials）：各引擎的 API 凭据
/// - 结果集（result_set）：按引擎与域名聚合的已验证链接
/// - 运行（run）：一次验证运行的输入与完成信号
pub mod credentials;
pub mod result_set;
pub mod run;
pub mod search_query;
