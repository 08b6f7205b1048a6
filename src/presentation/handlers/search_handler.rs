// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    application::{dto::run_request::RunRequestDto, use_cases::run_coordinator::RunCoordinator},
    presentation::errors::AppError,
};

/// 处理搜索触发请求
///
/// 校验表单后在后台启动运行，不等待其完成
///
/// # 参数
///
/// * `coordinator` - 运行协调器
/// * `payload` - 表单数据
///
/// # 返回值
///
/// * `202 Accepted` - 运行已启动
/// * `400 Bad Request` - 表单校验失败
pub async fn start_search(
    Extension(coordinator): Extension<Arc<RunCoordinator>>,
    Form(payload): Form<RunRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let request = payload.into_run_request()?;
    let handle = coordinator.spawn(request);
    info!(run_id = %handle.id(), "Search started");

    Ok((StatusCode::ACCEPTED, "Search started!"))
}
