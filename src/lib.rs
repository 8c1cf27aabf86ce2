//! drt-verify - End-to-end verification runner for the Division Report Tracker
//!
//! This crate drives a single deterministic login-flow check against a
//! locally running Division Report Tracker instance through a headless
//! Chromium controlled over CDP.
//!
//! # Scenario
//!
//! ```text
//! Runner ──▶ Browser Controller (CDP)
//!    │             │
//!    ▼             ▼
//! navigate ─▶ await heading ─▶ fill email ─▶ submit ─▶ await rejection ─▶ screenshot
//!    │
//!    └─ on failure: capture error + page markup, release browser, exit non-zero
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use drt_verify::browser::BrowserConfig;
//! use drt_verify::scenario::VerificationRunner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let runner = VerificationRunner::with_defaults();
//!     let report = runner.run(BrowserConfig::default()).await;
//!     assert!(report.passed);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod error;
pub mod scenario;

// Re-exports for convenience
pub use browser::{BrowserConfig, BrowserController, Locator, PageCapture, PageNavigator};
pub use error::{Error, Result};
pub use scenario::{RunReport, ScenarioConfig, Step, VerificationRunner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
