// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use mentionscan::application::use_cases::run_coordinator::RunCoordinator;
use mentionscan::config::settings::Settings;
use mentionscan::domain::services::verification_service::VerificationService;
use mentionscan::engines::chromium_engine::ChromiumEngine;
use mentionscan::engines::reqwest_engine::ReqwestEngine;
use mentionscan::engines::router::{EngineRouter, RenderPolicy};
use mentionscan::engines::traits::PageFetcher;
use mentionscan::infrastructure::search::SearchEngineFactory;
use mentionscan::infrastructure::services::notifier_impl::create_notifier;
use mentionscan::infrastructure::storage::LocalReportSink;
use mentionscan::presentation::routes;
use mentionscan::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting mentionscan...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    if let Some(addr) = settings.metrics.listen_addr {
        mentionscan::infrastructure::metrics::init_metrics(addr);
    }

    // 3. Search providers and credentials
    let credentials = Arc::new(settings.credentials());
    let providers = SearchEngineFactory::create_all(&settings)?;

    // 4. Page fetchers
    let engines: Vec<Arc<dyn PageFetcher>> = vec![
        Arc::new(ReqwestEngine),
        Arc::new(ChromiumEngine::new(settings.fetch.render_wait())),
    ];
    let router = Arc::new(EngineRouter::new(
        engines,
        RenderPolicy::new(settings.fetch.render_hosts.clone()),
        settings.fetch.request_timeout(),
    ));

    // 5. Pipeline, report sink and notifier
    let pipeline = Arc::new(VerificationService::new(providers, router, credentials));
    let report_sink = Arc::new(LocalReportSink::new(settings.report.base_dir.clone()));
    let notifier = create_notifier(&settings.notifier)?;
    let coordinator = Arc::new(RunCoordinator::new(pipeline, report_sink, notifier));

    // 6. Start HTTP server
    let app = routes::routes(coordinator);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
