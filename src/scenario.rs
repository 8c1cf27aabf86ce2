//! The login verification scenario
//!
//! One deterministic end-to-end pass against a running Division Report
//! Tracker instance: load the login screen, submit an unregistered email,
//! and confirm the rejection message. The runner executes the steps in
//! order, stops at the first failure, captures diagnostics, and always
//! releases the browser before reporting.

use crate::browser::{
    BrowserConfig, BrowserController, CaptureOptions, Locator, NavigationOptions, PageCapture,
    PageHandle, PageNavigator,
};
use crate::error::Error;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Heading expected on the login screen
pub const HEADING_TEXT: &str = "Division Report Tracker";
/// Placeholder of the email input
pub const EMAIL_PLACEHOLDER: &str = "Email address";
/// Email submitted by the probe; must not be provisioned in the target
pub const PROBE_EMAIL: &str = "admin@test.com";
/// Accessible name of the submit button
pub const SUBMIT_LABEL: &str = "Continue";
/// Message expected after submitting an unregistered email
pub const REJECTION_TEXT: &str = "Account not registered. Please contact an administrator.";

/// Environment knobs for a run
///
/// The scenario content itself (expected strings, the probe email) is fixed;
/// only where the target lives and where artifacts land is configurable.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Address of the running application under test
    pub base_url: String,
    /// Where the verification screenshot is written (overwritten each run)
    pub screenshot_path: PathBuf,
    /// Deadline for readiness and visibility waits, in milliseconds
    pub wait_timeout_ms: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            screenshot_path: PathBuf::from("verification.png"),
            wait_timeout_ms: 10000,
        }
    }
}

/// The steps of the scenario, in execution order
///
/// Browser release is not a step; it happens unconditionally after the last
/// step reached, whichever that was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Launch the browser and open a page
    Launch,
    /// Navigate to the target address
    Navigate,
    /// Wait for the login heading to become visible
    AwaitHeading,
    /// Fill the email input with the probe address
    FillEmail,
    /// Click the submit button
    Submit,
    /// Wait for the rejection message to become visible
    AwaitRejection,
    /// Write the verification screenshot
    Capture,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Launch => "launch browser",
            Step::Navigate => "navigate to target",
            Step::AwaitHeading => "await login heading",
            Step::FillEmail => "fill email input",
            Step::Submit => "submit login form",
            Step::AwaitRejection => "await rejection message",
            Step::Capture => "capture screenshot",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of one verification run
///
/// The runner never lets an error escape; everything a caller needs to react
/// to a failure is in here, including the page markup for offline debugging.
#[derive(Debug)]
pub struct RunReport {
    /// Whether every step completed
    pub passed: bool,
    /// The step that failed, when one did
    pub failed_step: Option<Step>,
    /// Rendered error for the failure
    pub error: Option<String>,
    /// Page markup at the moment of failure (best-effort)
    pub page_html: Option<String>,
    /// Path of the written screenshot, on success
    pub screenshot: Option<PathBuf>,
}

impl RunReport {
    fn passed(screenshot: PathBuf) -> Self {
        Self {
            passed: true,
            failed_step: None,
            error: None,
            page_html: None,
            screenshot: Some(screenshot),
        }
    }

    fn failed(step: Step, error: &Error, page_html: Option<String>) -> Self {
        Self {
            passed: false,
            failed_step: Some(step),
            error: Some(error.to_string()),
            page_html,
            screenshot: None,
        }
    }
}

/// Drives the verification scenario
pub struct VerificationRunner {
    config: ScenarioConfig,
}

impl VerificationRunner {
    /// Create a runner with the given environment config
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    /// Create a runner with default environment config
    pub fn with_defaults() -> Self {
        Self::new(ScenarioConfig::default())
    }

    /// Get the runner's configuration
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Execute the scenario exactly once
    ///
    /// Failures do not propagate out of this call; they are folded into the
    /// report together with diagnostics. The browser session is released in
    /// every outcome, including a failure during launch itself.
    #[instrument(skip(self, browser_config))]
    pub async fn run(&self, browser_config: BrowserConfig) -> RunReport {
        let controller = match BrowserController::with_config(browser_config).await {
            Ok(controller) => controller,
            Err(e) => return RunReport::failed(Step::Launch, &e, None),
        };

        let report = match controller.new_page().await {
            Ok(page) => match self.drive(&page).await {
                Ok(screenshot) => {
                    info!("Verification scenario passed");
                    RunReport::passed(screenshot)
                }
                Err((step, e)) => {
                    warn!("Verification failed at step '{}': {}", step, e);
                    // Best-effort markup dump; a dead page must not mask the
                    // primary error.
                    let page_html = PageCapture::html(&page).await.ok();
                    RunReport::failed(step, &e, page_html)
                }
            },
            Err(e) => RunReport::failed(Step::Launch, &e, None),
        };

        if let Err(e) = controller.close().await {
            warn!("Browser close failed: {}", e);
        }

        report
    }

    /// The ordered scenario body; each step is awaited to completion before
    /// the next begins.
    async fn drive(&self, page: &PageHandle) -> Result<PathBuf, (Step, Error)> {
        let timeout_ms = self.config.wait_timeout_ms;
        let nav_options = NavigationOptions { timeout_ms };

        PageNavigator::goto(page, &self.config.base_url, Some(nav_options))
            .await
            .map_err(|e| (Step::Navigate, e))?;

        Locator::heading(HEADING_TEXT)
            .wait_until_visible(page, timeout_ms)
            .await
            .map_err(|e| (Step::AwaitHeading, e))?;

        Locator::placeholder(EMAIL_PLACEHOLDER)
            .fill(page, PROBE_EMAIL)
            .await
            .map_err(|e| (Step::FillEmail, e))?;

        Locator::button(SUBMIT_LABEL)
            .click(page)
            .await
            .map_err(|e| (Step::Submit, e))?;

        Locator::text(REJECTION_TEXT)
            .wait_until_visible(page, timeout_ms)
            .await
            .map_err(|e| (Step::AwaitRejection, e))?;

        let shot = PageCapture::screenshot(page, &CaptureOptions::png())
            .await
            .map_err(|e| (Step::Capture, e))?;

        shot.save(&self.config.screenshot_path)
            .await
            .map_err(|e| (Step::Capture, e))?;

        Ok(self.config.screenshot_path.clone())
    }
}
