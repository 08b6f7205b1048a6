// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{EngineError, FetchRequest, FetchResponse, PageFetcher, RenderMode};
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::network::SetUserAgentOverrideParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

const BODY_POLL_INTERVAL: Duration = Duration::from_millis(200);
const PROFILE_PREFIX: &str = "mentionscan-chromium-";

fn browser_error(e: impl std::fmt::Display) -> EngineError {
    EngineError::Browser(e.to_string())
}

/// 渲染抓取引擎
///
/// 基于chromiumoxide实现。每次抓取启动一个独立的无头浏览器，抓取结束后无论成功与否都会关闭。
pub struct ChromiumEngine {
    /// 等待 body 元素出现的最长时间
    render_wait: Duration,
}

impl ChromiumEngine {
    pub fn new(render_wait: Duration) -> Self {
        Self { render_wait }
    }

    async fn render(
        &self,
        browser: &Browser,
        request: &FetchRequest,
    ) -> Result<FetchResponse, EngineError> {
        let started = Instant::now();
        let deadline = started + self.render_wait;

        let page = browser.new_page("about:blank").await.map_err(browser_error)?;
        page.set_user_agent(SetUserAgentOverrideParams::new(request.user_agent.clone()))
            .await
            .map_err(browser_error)?;

        let navigated = match tokio::time::timeout_at(deadline, page.goto(request.url.as_str())).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => return Err(browser_error(e)),
            Err(_) => false,
        };

        let page_ref = &page;
        let body_ready = navigated
            && wait_until_present(deadline, move || async move {
                page_ref.find_element("body").await.is_ok()
            })
            .await;

        if !body_ready {
            // Slow renders degrade to whatever markup is there.
            warn!(url = %request.url, "Timed out waiting for page to load");
        }

        let content = page.content().await.map_err(browser_error)?;

        if let Err(e) = page.close().await {
            debug!("Failed to close page: {}", e);
        }

        Ok(FetchResponse {
            content,
            partial: !body_ready,
            response_time_ms: started.elapsed().as_millis() as u64,
        })
    }
}

#[async_trait]
impl PageFetcher for ChromiumEngine {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        let session = BrowserSession::launch(&request.user_agent, request.timeout).await?;
        let outcome = self.render(&session.browser, request).await;
        session.shutdown().await;
        outcome
    }

    fn mode(&self) -> RenderMode {
        RenderMode::Rendered
    }

    fn name(&self) -> &'static str {
        "chromium"
    }
}

/// Polls `probe` until it reports true or `deadline` passes.
pub(crate) async fn wait_until_present<F, Fut>(deadline: Instant, mut probe: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    tokio::time::timeout_at(deadline, async {
        while !probe().await {
            tokio::time::sleep(BODY_POLL_INTERVAL).await;
        }
    })
    .await
    .is_ok()
}

/// One headless browser process with its own throw-away profile.
///
/// `shutdown` closes the process gracefully. `Drop` covers the paths where
/// shutdown never runs: the event loop is aborted and the profile removed,
/// and chromiumoxide kills the child process when `Browser` drops.
struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    profile_dir: PathBuf,
}

impl BrowserSession {
    async fn launch(user_agent: &str, request_timeout: Duration) -> Result<Self, EngineError> {
        Self::launch_with_executable(user_agent, request_timeout, None).await
    }

    async fn launch_with_executable(
        user_agent: &str,
        request_timeout: Duration,
        executable: Option<PathBuf>,
    ) -> Result<Self, EngineError> {
        let profile_dir =
            std::env::temp_dir().join(format!("{}{}", PROFILE_PREFIX, Uuid::new_v4()));

        let mut builder = BrowserConfig::builder();
        if let Some(path) = executable {
            builder = builder.chrome_executable(path);
        }
        let config = builder
            .no_sandbox()
            .user_data_dir(&profile_dir)
            .request_timeout(request_timeout)
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg(format!("--user-agent={}", user_agent))
            .build()
            .map_err(EngineError::Browser)?;

        let (browser, mut handler) = match Browser::launch(config).await {
            Ok(launched) => launched,
            Err(e) => {
                discard_profile(&profile_dir);
                return Err(browser_error(e));
            }
        };

        // Spawn a handler to process browser events
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler event error: {}", e);
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
            profile_dir,
        })
    }

    async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Graceful browser close failed, killing process: {}", e);
            if let Some(Err(kill_err)) = self.browser.kill().await {
                warn!("Failed to kill browser process: {}", kill_err);
            }
        }
        if let Err(e) = self.browser.wait().await {
            debug!("Failed to reap browser process: {}", e);
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler_task.abort();
        discard_profile(&self.profile_dir);
    }
}

/// Removes a browser profile directory; a missing directory is fine.
fn discard_profile(profile_dir: &Path) {
    if let Err(e) = std::fs::remove_dir_all(profile_dir) {
        if e.kind() != std::io::ErrorKind::NotFound {
            debug!("Failed to remove browser profile {:?}: {}", profile_dir, e);
        }
    }
}
