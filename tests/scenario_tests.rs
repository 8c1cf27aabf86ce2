//! Scenario module tests
//!
//! These tests pin down the fixed scenario contract: the DOM surface the
//! target application must present and the shape of the run report.

use drt_verify::scenario::{
    ScenarioConfig, Step, VerificationRunner, EMAIL_PLACEHOLDER, HEADING_TEXT, PROBE_EMAIL,
    REJECTION_TEXT, SUBMIT_LABEL,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

#[test]
fn test_expected_dom_surface() {
    // The contract the target must satisfy for a run to pass. A copy change
    // in the application is expected to break exactly one of these.
    assert_eq!(HEADING_TEXT, "Division Report Tracker");
    assert_eq!(EMAIL_PLACEHOLDER, "Email address");
    assert_eq!(SUBMIT_LABEL, "Continue");
    assert_eq!(
        REJECTION_TEXT,
        "Account not registered. Please contact an administrator."
    );
}

#[test]
fn test_probe_email_is_plausible_but_fixed() {
    assert_eq!(PROBE_EMAIL, "admin@test.com");
    assert!(PROBE_EMAIL.contains('@'));
}

#[test]
fn test_scenario_config_defaults_match_original_behavior() {
    let config = ScenarioConfig::default();
    assert_eq!(config.base_url, "http://localhost:3000");
    assert_eq!(config.screenshot_path, PathBuf::from("verification.png"));
    assert_eq!(config.wait_timeout_ms, 10000);
}

#[test]
fn test_scenario_config_is_cloneable() {
    let config = ScenarioConfig {
        base_url: "http://127.0.0.1:8080".to_string(),
        screenshot_path: PathBuf::from("/tmp/shot.png"),
        wait_timeout_ms: 5000,
    };
    let copy = config.clone();
    assert_eq!(copy.base_url, config.base_url);
    assert_eq!(copy.screenshot_path, config.screenshot_path);
}

#[test]
fn test_step_ordering_is_stable() {
    // Steps render as human-readable names used in failure output
    let names: Vec<String> = [
        Step::Launch,
        Step::Navigate,
        Step::AwaitHeading,
        Step::FillEmail,
        Step::Submit,
        Step::AwaitRejection,
        Step::Capture,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    assert_eq!(
        names,
        vec![
            "launch browser",
            "navigate to target",
            "await login heading",
            "fill email input",
            "submit login form",
            "await rejection message",
            "capture screenshot",
        ]
    );
}

#[test]
fn test_runner_exposes_its_config() {
    let runner = VerificationRunner::new(ScenarioConfig {
        base_url: "http://localhost:4000".to_string(),
        ..ScenarioConfig::default()
    });
    assert_eq!(runner.config().base_url, "http://localhost:4000");
    assert_eq!(
        runner.config().screenshot_path,
        PathBuf::from("verification.png")
    );
}
