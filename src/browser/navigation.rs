//! Page navigation functionality
//!
//! This module handles URL navigation with timeout handling and an explicit
//! document readiness wait. The runner never sleeps for a fixed settle
//! duration; readiness is always a condition wait with a deadline.

use crate::browser::PageHandle;
use crate::error::{Error, NavigationError, Result};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Options for page navigation
#[derive(Debug, Clone)]
pub struct NavigationOptions {
    /// Timeout in milliseconds (default: 30000)
    pub timeout_ms: u64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self { timeout_ms: 30000 }
    }
}

/// Result of a navigation operation
#[derive(Debug)]
pub struct NavigationResult {
    /// Final URL after any redirects
    pub final_url: String,
    /// Page title
    pub title: Option<String>,
    /// Navigation duration in milliseconds
    pub duration_ms: u64,
}

/// Validate a URL for navigation
pub fn validate_url(url: &str) -> std::result::Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(format!("URL must start with http:// or https://: {}", url));
    }

    // 2048 characters is a common upper bound
    if url.len() > 2048 {
        return Err("URL exceeds maximum length of 2048 characters".to_string());
    }

    Ok(())
}

/// Page navigator
pub struct PageNavigator;

impl PageNavigator {
    /// Navigate to a URL and wait for the document to finish loading
    ///
    /// Navigation failure against an unreachable target is not reported here
    /// with any retry; it surfaces as a load or timeout error and the caller
    /// decides what to do with it.
    #[instrument(skip(page))]
    pub async fn goto(
        page: &PageHandle,
        url: &str,
        options: Option<NavigationOptions>,
    ) -> Result<NavigationResult> {
        let opts = options.unwrap_or_default();
        let start = std::time::Instant::now();

        validate_url(url).map_err(NavigationError::InvalidUrl)?;

        info!("Navigating to: {}", url);

        let timeout = Duration::from_millis(opts.timeout_ms);

        let nav_future = page.page.goto(url);
        tokio::time::timeout(timeout, nav_future)
            .await
            .map_err(|_| NavigationError::Timeout(opts.timeout_ms))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        Self::wait_for_load(page, opts.timeout_ms).await?;

        let final_url = page
            .page
            .url()
            .await
            .map_err(|e| Error::cdp(e.to_string()))?
            .unwrap_or_else(|| url.to_string());

        page.set_url(final_url.clone()).await;

        let title = page
            .page
            .evaluate("document.title")
            .await
            .ok()
            .and_then(|v| v.into_value::<String>().ok());

        let duration_ms = start.elapsed().as_millis() as u64;
        debug!("Navigation complete: {} -> {}", url, final_url);

        Ok(NavigationResult {
            final_url,
            title,
            duration_ms,
        })
    }

    /// Wait until the document's load event has fired
    #[instrument(skip(page))]
    pub async fn wait_for_load(page: &PageHandle, timeout_ms: u64) -> Result<()> {
        let script = r#"
            new Promise(resolve => {
                if (document.readyState === 'complete') {
                    resolve(true);
                } else {
                    window.addEventListener('load', () => resolve(true));
                }
            })
        "#;

        let timeout = Duration::from_millis(timeout_ms);
        tokio::time::timeout(timeout, page.page.evaluate(script))
            .await
            .map_err(|_| NavigationError::Timeout(timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        Ok(())
    }
}
