//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use std::time::Duration;

use gtx_translate::config::{ConfigFile, GtxConfig, ResolveOptions, resolve_config};
use gtx_translate::translation::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        gtx: GtxConfig {
            from: Some("ja".to_string()),
            to: Some("French".to_string()),
            endpoint: Some("http://config.local".to_string()),
            timeout_secs: Some(30),
            user_agent: Some("config-agent/1.0".to_string()),
        },
    }
}

#[test]
fn test_cli_from_overrides_config_from() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        from: Some("German".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.source_language, "German");
    assert_eq!(resolved.target_language, "French");
}

#[test]
fn test_cli_to_overrides_config_to() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        to: Some("ko".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    // Codes resolve to canonical names
    assert_eq!(resolved.target_language, "Korean");
    assert_eq!(resolved.source_language, "Japanese");
}

#[test]
fn test_cli_endpoint_overrides_config_endpoint() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("http://cli.local".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.endpoint, "http://cli.local");
}

#[test]
fn test_config_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.source_language, "Japanese");
    assert_eq!(resolved.target_language, "French");
    assert_eq!(resolved.endpoint, "http://config.local");
    assert_eq!(resolved.timeout, Duration::from_secs(30));
    assert_eq!(resolved.user_agent, "config-agent/1.0");
}

#[test]
fn test_builtin_defaults_when_nothing_configured() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.source_language, "English");
    assert_eq!(resolved.target_language, "Korean");
    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.timeout, DEFAULT_TIMEOUT);
    assert_eq!(resolved.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn test_invalid_cli_language_fails_even_with_valid_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        to: Some("Klingon".to_string()),
        ..ResolveOptions::default()
    };

    assert!(resolve_config(&options, &config).is_err());
}

#[test]
fn test_config_file_parses_from_toml() {
    let config: ConfigFile = toml::from_str(
        r#"
[gtx]
from = "Spanish"
to = "en"
"#,
    )
    .unwrap();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.source_language, "Spanish");
    assert_eq!(resolved.target_language, "English");
    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
}
