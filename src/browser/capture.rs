//! Page capture functionality
//!
//! This module handles the verification screenshot and the raw page markup
//! used for failure diagnostics.

use crate::browser::PageHandle;
use crate::error::{CaptureError, Result};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Format for screenshot captures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaptureFormat {
    /// PNG screenshot
    #[default]
    Png,
    /// JPEG screenshot
    Jpeg,
}

/// Options for capture operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureOptions {
    /// Capture format
    #[serde(default)]
    pub format: CaptureFormat,
    /// JPEG quality (0-100)
    #[serde(default = "default_quality")]
    pub quality: u8,
    /// Capture full page (not just viewport)
    #[serde(default = "default_true")]
    pub full_page: bool,
}

fn default_quality() -> u8 {
    85
}

fn default_true() -> bool {
    true
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            format: CaptureFormat::Png,
            quality: 85,
            full_page: true,
        }
    }
}

impl CaptureOptions {
    /// Create options for PNG screenshot
    pub fn png() -> Self {
        Self {
            format: CaptureFormat::Png,
            ..Default::default()
        }
    }

    /// Create options for JPEG screenshot
    pub fn jpeg(quality: u8) -> Self {
        Self {
            format: CaptureFormat::Jpeg,
            quality,
            ..Default::default()
        }
    }
}

/// Result of a capture operation
#[derive(Debug, Clone)]
pub struct CaptureResult {
    /// The captured data
    pub data: Vec<u8>,
    /// The format of the capture
    pub format: CaptureFormat,
    /// Size in bytes
    pub size: usize,
}

impl CaptureResult {
    /// Get appropriate MIME type
    pub fn mime_type(&self) -> &'static str {
        match self.format {
            CaptureFormat::Png => "image/png",
            CaptureFormat::Jpeg => "image/jpeg",
        }
    }

    /// Get file extension
    pub fn extension(&self) -> &'static str {
        match self.format {
            CaptureFormat::Png => "png",
            CaptureFormat::Jpeg => "jpg",
        }
    }

    /// Write the captured bytes to disk, overwriting any prior file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        tokio::fs::write(path, &self.data)
            .await
            .map_err(|e| CaptureError::WriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        debug!("Wrote {} bytes to {}", self.size, path.display());
        Ok(())
    }
}

/// Page capture functionality
pub struct PageCapture;

impl PageCapture {
    /// Take a screenshot
    #[instrument(skip(page))]
    pub async fn screenshot(page: &PageHandle, options: &CaptureOptions) -> Result<CaptureResult> {
        info!("Capturing screenshot");

        let format = match options.format {
            CaptureFormat::Png => CaptureScreenshotFormat::Png,
            CaptureFormat::Jpeg => CaptureScreenshotFormat::Jpeg,
        };

        let mut params_builder = ScreenshotParams::builder()
            .format(format)
            .from_surface(true)
            .capture_beyond_viewport(options.full_page);

        if matches!(options.format, CaptureFormat::Jpeg) {
            params_builder = params_builder.quality(options.quality as i64);
        }

        let params = params_builder.build();

        let data = page
            .page
            .screenshot(params)
            .await
            .map_err(|e| CaptureError::ScreenshotFailed(e.to_string()))?;

        let size = data.len();
        debug!("Screenshot captured: {} bytes", size);

        Ok(CaptureResult {
            data,
            format: options.format,
            size,
        })
    }

    /// Capture the page's rendered markup
    ///
    /// This is the diagnostic dump printed when an assertion fails, so it
    /// reflects whatever the document looks like at the moment of failure.
    #[instrument(skip(page))]
    pub async fn html(page: &PageHandle) -> Result<String> {
        info!("Capturing page HTML");

        let html: String = page
            .page
            .evaluate("document.documentElement.outerHTML")
            .await
            .map_err(|e| CaptureError::HtmlFailed(e.to_string()))?
            .into_value()
            .map_err(|e| CaptureError::HtmlFailed(e.to_string()))?;

        debug!("HTML captured: {} bytes", html.len());
        Ok(html)
    }
}
