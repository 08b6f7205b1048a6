// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 在 HTTP 表单与领域模型之间转换数据
pub mod run_request;
