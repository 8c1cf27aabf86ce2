//! Division Report Tracker verification runner
//!
//! Drives the login-flow scenario against a running instance and exits
//! non-zero when it does not pass.

use clap::Parser;
use drt_verify::browser::BrowserConfig;
use drt_verify::scenario::{ScenarioConfig, VerificationRunner};
use std::path::PathBuf;
use std::process::ExitCode;

/// Division Report Tracker verification runner
#[derive(Parser, Debug)]
#[command(name = "drt-verify")]
#[command(version)]
#[command(about = "End-to-end verification of the Division Report Tracker login flow")]
struct Args {
    /// Address of the running application under test
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Where to write the verification screenshot
    #[arg(short, long, default_value = "verification.png")]
    output: PathBuf,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Deadline for readiness and visibility waits, in milliseconds
    #[arg(long, default_value_t = 10000)]
    timeout_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut browser = BrowserConfig::builder()
        .headless(!args.headed)
        .timeout_ms(args.timeout_ms);
    if let Some(path) = args.chrome_path {
        browser = browser.chrome_path(path);
    }

    let runner = VerificationRunner::new(ScenarioConfig {
        base_url: args.url,
        screenshot_path: args.output,
        wait_timeout_ms: args.timeout_ms,
    });

    let report = runner.run(browser.build()).await;

    if report.passed {
        println!("Verification script ran successfully.");
        return ExitCode::SUCCESS;
    }

    // Diagnostics first, then a failing status for automated callers.
    if let Some(step) = report.failed_step {
        eprintln!("Verification failed at step: {}", step);
    }
    if let Some(error) = &report.error {
        eprintln!("An error occurred during verification: {}", error);
    }
    if let Some(html) = &report.page_html {
        eprintln!("\nPage HTML:\n");
        eprintln!("{}", html);
    }

    ExitCode::FAILURE
}
