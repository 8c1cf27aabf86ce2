//! Browser module tests
//!
//! These tests verify the browser configuration, capture, locator, and
//! navigation types. Full browser integration requires a running
//! Chrome/Chromium instance and is exercised by the binary itself.

use drt_verify::browser::{
    BrowserConfig, CaptureFormat, CaptureOptions, CaptureResult, Locator, NavigationOptions,
    NavigationResult, Role,
};
use pretty_assertions::assert_eq;

#[test]
fn test_browser_config_default() {
    let config = BrowserConfig::default();
    assert!(config.headless);
    assert_eq!(config.width, 1280);
    assert_eq!(config.height, 720);
    assert!(config.sandbox);
    assert_eq!(config.timeout_ms, 30000);
    assert!(config.chrome_path.is_none());
    assert!(config.extra_args.is_empty());
}

#[test]
fn test_browser_config_builder() {
    let config = BrowserConfig::builder()
        .headless(false)
        .viewport(1920, 1080)
        .sandbox(false)
        .timeout_ms(60000)
        .chrome_path("/usr/bin/chromium")
        .arg("--disable-gpu")
        .arg("--no-first-run")
        .build();

    assert!(!config.headless);
    assert_eq!(config.width, 1920);
    assert_eq!(config.height, 1080);
    assert!(!config.sandbox);
    assert_eq!(config.timeout_ms, 60000);
    assert_eq!(config.chrome_path, Some("/usr/bin/chromium".to_string()));
    assert_eq!(config.extra_args.len(), 2);
}

#[test]
fn test_capture_format_default() {
    assert_eq!(CaptureFormat::default(), CaptureFormat::Png);
}

#[test]
fn test_capture_format_serialization() {
    let formats = [
        (CaptureFormat::Png, "\"png\""),
        (CaptureFormat::Jpeg, "\"jpeg\""),
    ];

    for (format, expected) in formats {
        let json = serde_json::to_string(&format).unwrap();
        assert_eq!(json, expected);
    }
}

#[test]
fn test_capture_options_deserialization_fills_defaults() {
    let opts: CaptureOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts.format, CaptureFormat::Png);
    assert_eq!(opts.quality, 85);
    assert!(opts.full_page);
}

#[test]
fn test_capture_result_accessors() {
    let result = CaptureResult {
        data: b"not a real png".to_vec(),
        format: CaptureFormat::Jpeg,
        size: 14,
    };
    assert_eq!(result.mime_type(), "image/jpeg");
    assert_eq!(result.extension(), "jpg");
    assert_eq!(result.size, 14);
}

#[test]
fn test_navigation_options_default() {
    let opts = NavigationOptions::default();
    assert_eq!(opts.timeout_ms, 30000);
}

#[test]
fn test_navigation_result_structure() {
    let result = NavigationResult {
        final_url: "http://localhost:3000/".to_string(),
        title: Some("Division Report Tracker".to_string()),
        duration_ms: 42,
    };
    assert_eq!(result.final_url, "http://localhost:3000/");
    assert_eq!(result.title.as_deref(), Some("Division Report Tracker"));
}

#[test]
fn test_locator_roundtrip_descriptions() {
    assert_eq!(
        Locator::heading("Division Report Tracker").to_string(),
        "heading \"Division Report Tracker\""
    );
    assert_eq!(
        Locator::placeholder("Email address").to_string(),
        "placeholder \"Email address\""
    );
    assert_eq!(
        Locator::text("Account not registered. Please contact an administrator.").to_string(),
        "text \"Account not registered. Please contact an administrator.\""
    );
}

#[test]
fn test_locator_role_equality() {
    assert_eq!(
        Locator::button("Continue"),
        Locator::Role {
            role: Role::Button,
            name: "Continue".to_string()
        }
    );
    assert_ne!(Locator::button("Continue"), Locator::heading("Continue"));
}
