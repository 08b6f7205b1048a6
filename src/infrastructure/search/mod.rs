// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// 提供 Google、Bing 搜索 API 客户端以及按配置创建它们的工厂
pub mod bing;
pub mod factory;
pub mod google;

pub use factory::SearchEngineFactory;
