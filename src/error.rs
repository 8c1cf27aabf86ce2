//! Error types for the verification runner
//!
//! This module provides the error type hierarchy using `thiserror` for
//! proper error handling across all components.

use thiserror::Error;

/// The main error type for verification runner operations
#[derive(Error, Debug)]
pub enum Error {
    /// Browser-related errors
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Navigation errors
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Locator errors (element queries and interactions)
    #[error("Locator error: {0}")]
    Locator(#[from] LocatorError),

    /// Capture errors (screenshot, page markup)
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ChromiumOxide errors
    #[error("CDP error: {0}")]
    Cdp(String),
}

/// Browser lifecycle and control errors
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to launch browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Failed to create new page/tab
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),

    /// Timeout waiting for browser
    #[error("Browser operation timed out after {0}ms")]
    Timeout(u64),
}

/// Navigation errors
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Navigation timeout
    #[error("Navigation timed out after {0}ms")]
    Timeout(u64),

    /// Page load failed
    #[error("Page load failed: {0}")]
    LoadFailed(String),
}

/// Locator errors
#[derive(Error, Debug)]
pub enum LocatorError {
    /// No element matched the locator
    #[error("No element matched {0}")]
    NotFound(String),

    /// Element did not become visible before the deadline
    #[error("{locator} did not become visible within {timeout_ms}ms")]
    NotVisible {
        /// Description of the locator that was awaited
        locator: String,
        /// Deadline that expired
        timeout_ms: u64,
    },

    /// Interaction with a located element failed
    #[error("Failed to {action} {locator}: {reason}")]
    InteractionFailed {
        /// The attempted action (click, fill)
        action: &'static str,
        /// Description of the target locator
        locator: String,
        /// Underlying failure
        reason: String,
    },
}

/// Capture errors (screenshots, page markup)
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Screenshot failed
    #[error("Screenshot capture failed: {0}")]
    ScreenshotFailed(String),

    /// HTML capture failed
    #[error("HTML capture failed: {0}")]
    HtmlFailed(String),

    /// Writing the captured artifact to disk failed
    #[error("Failed to write capture to {path}: {reason}")]
    WriteFailed {
        /// Destination path
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
}

/// Result type alias for verification runner operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a CDP error from a string
    pub fn cdp<S: Into<String>>(msg: S) -> Self {
        Error::Cdp(msg.into())
    }
}

/// Convert chromiumoxide errors
impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}
