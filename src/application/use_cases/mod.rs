// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 包含一次完整运行的编排：验证、落盘、通知
pub mod run_coordinator;
