//! Rasterizer adapter
//!
//! Drives a headless Chromium instance over CDP to turn the styled HTML
//! materialization into PDF or PNG bytes. Each render acquires its own
//! engine instance (page content is instance-local), uses it once, and
//! tears it down on every exit path. All engine phases run under one
//! bounded timeout; on expiry the request fails instead of hanging.

use crate::error::{Error, Result};
use crate::render::html;
use crate::template::PageDescription;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{CaptureScreenshotFormat, PrintToPdfParams};
use chromiumoxide::page::ScreenshotParams;
use futures_util::StreamExt;
use std::path::PathBuf;
use std::time::Duration;

/// A4 at 96 DPI, matching the 210mm x 297mm page in the stylesheet
const VIEWPORT_WIDTH: u32 = 794;
const VIEWPORT_HEIGHT: u32 = 1123;
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;

/// Raster output kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Pdf,
    Png,
}

/// Engine configuration for the rasterizer
#[derive(Debug, Clone)]
pub struct RasterizerConfig {
    /// Chromium executable override; `None` lets the engine crate discover one
    pub chrome_executable: Option<PathBuf>,
    /// Budget covering launch, content settling, and capture (default: 30s)
    pub timeout: Duration,
    /// Extra engine flags appended to the defaults
    pub extra_args: Vec<String>,
}

impl Default for RasterizerConfig {
    fn default() -> Self {
        Self {
            chrome_executable: None,
            timeout: Duration::from_secs(30),
            extra_args: Vec::new(),
        }
    }
}

/// Per-request headless-engine driver
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    config: RasterizerConfig,
}

impl Rasterizer {
    pub fn new(config: RasterizerConfig) -> Self {
        Self { config }
    }

    /// Rasterize a page description to PDF or PNG bytes.
    ///
    /// Never returns partial output: the result is either complete bytes or
    /// a `RenderEngine` error.
    pub async fn rasterize(
        &self,
        page: &PageDescription,
        format: RasterFormat,
    ) -> Result<Vec<u8>> {
        let markup = html::render_page(page);

        let launch = Browser::launch(self.browser_config()?);
        let (mut browser, mut handler) = tokio::time::timeout(self.config.timeout, launch)
            .await
            .map_err(|_| self.timeout_error("engine launch"))?
            .map_err(engine_error)?;

        // The handler future must be polled for the CDP connection to make
        // progress; it ends once the browser closes.
        let driver = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let captured =
            tokio::time::timeout(self.config.timeout, capture(&browser, &markup, format)).await;

        // Teardown runs on success, failure, and timeout alike
        if let Err(e) = browser.close().await {
            tracing::debug!(error = %e, "browser close failed");
        }
        let _ = browser.wait().await;
        driver.abort();

        let bytes = match captured {
            Err(_) => return Err(self.timeout_error("content settling")),
            Ok(result) => result?,
        };
        if bytes.is_empty() {
            return Err(Error::RenderEngine {
                reason: "engine returned no bytes".to_string(),
            });
        }

        tracing::debug!(bytes = bytes.len(), ?format, "rasterized page");
        Ok(bytes)
    }

    fn browser_config(&self) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-setuid-sandbox")
            .window_size(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
            .request_timeout(self.config.timeout);
        if let Some(path) = &self.config.chrome_executable {
            builder = builder.chrome_executable(path.clone());
        }
        for arg in &self.config.extra_args {
            builder = builder.arg(arg);
        }
        builder.build().map_err(|reason| Error::RenderEngine { reason })
    }

    fn timeout_error(&self, phase: &str) -> Error {
        Error::RenderEngine {
            reason: format!(
                "{phase} did not finish within {:?}",
                self.config.timeout
            ),
        }
    }
}

async fn capture(browser: &Browser, markup: &str, format: RasterFormat) -> Result<Vec<u8>> {
    let page = browser
        .new_page("about:blank")
        .await
        .map_err(engine_error)?;
    page.set_content(markup).await.map_err(engine_error)?;

    match format {
        RasterFormat::Pdf => page.pdf(pdf_params()).await.map_err(engine_error),
        RasterFormat::Png => page
            .screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .full_page(true)
                    .build(),
            )
            .await
            .map_err(engine_error),
    }
}

/// Single A4 page, zero margins, background graphics included
fn pdf_params() -> PrintToPdfParams {
    PrintToPdfParams {
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(0.0),
        margin_bottom: Some(0.0),
        margin_left: Some(0.0),
        margin_right: Some(0.0),
        ..Default::default()
    }
}

fn engine_error(e: impl std::fmt::Display) -> Error {
    Error::RenderEngine {
        reason: e.to_string(),
    }
}
