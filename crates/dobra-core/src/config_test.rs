use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "DOBRA_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.site_url, "https://dobra.vercel.app");
    assert_eq!(cfg.sanity_project_id, "placeholder");
    assert_eq!(cfg.sanity_dataset, "production");
    assert_eq!(cfg.sanity_api_version, "2024-01-01");
    assert!(cfg.sanity_use_cdn);
    assert!(cfg.sanity_api_token.is_none());
    assert_eq!(cfg.revalidate_secs, 60);
    assert_eq!(cfg.settings_revalidate_secs, 300);
    assert_eq!(cfg.cms_request_timeout_secs, 10);
    assert_eq!(cfg.cms_user_agent, "dobra/0.1 (catalog)");
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("DOBRA_ENV", "production");
    map.insert("DOBRA_SITE_URL", "https://dobra.example");
    map.insert("SANITY_PROJECT_ID", "abc123");
    map.insert("SANITY_DATASET", "staging");
    map.insert("SANITY_API_VERSION", "v2025-02-19");
    map.insert("SANITY_USE_CDN", "false");
    map.insert("SANITY_API_TOKEN", "sk-test");
    map.insert("DOBRA_REVALIDATE_SECS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.site_url, "https://dobra.example");
    assert_eq!(cfg.sanity_project_id, "abc123");
    assert_eq!(cfg.sanity_dataset, "staging");
    assert_eq!(cfg.sanity_api_version, "2025-02-19");
    assert!(!cfg.sanity_use_cdn);
    assert_eq!(cfg.sanity_api_token.as_deref(), Some("sk-test"));
    assert_eq!(cfg.revalidate_secs, 0);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let mut map = HashMap::new();
    map.insert("SANITY_DATASET", "   ");
    map.insert("SANITY_API_TOKEN", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sanity_dataset, "production");
    assert!(cfg.sanity_api_token.is_none());
}

#[test]
fn api_token_is_trimmed() {
    let mut map = HashMap::new();
    map.insert("SANITY_API_TOKEN", "  sk-test\n");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sanity_api_token.as_deref(), Some("sk-test"));
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("DOBRA_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DOBRA_BIND_ADDR"),
        "expected InvalidEnvVar(DOBRA_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_invalid_env() {
    let mut map = HashMap::new();
    map.insert("DOBRA_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DOBRA_ENV"),
        "expected InvalidEnvVar(DOBRA_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_relative_site_url() {
    let mut map = HashMap::new();
    map.insert("DOBRA_SITE_URL", "dobra.example");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DOBRA_SITE_URL"),
        "expected InvalidEnvVar(DOBRA_SITE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_invalid_use_cdn() {
    let mut map = HashMap::new();
    map.insert("SANITY_USE_CDN", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SANITY_USE_CDN"),
        "expected InvalidEnvVar(SANITY_USE_CDN), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_invalid_revalidate_secs() {
    let mut map = HashMap::new();
    map.insert("DOBRA_REVALIDATE_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DOBRA_REVALIDATE_SECS"),
        "expected InvalidEnvVar(DOBRA_REVALIDATE_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_zero_request_timeout() {
    let mut map = HashMap::new();
    map.insert("DOBRA_CMS_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DOBRA_CMS_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(DOBRA_CMS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn sanity_base_url_switches_host_on_cdn_flag() {
    let mut map = HashMap::new();
    map.insert("SANITY_PROJECT_ID", "abc123");
    let cdn = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cdn.sanity_base_url(), "https://abc123.apicdn.sanity.io");

    map.insert("SANITY_USE_CDN", "false");
    let live = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(live.sanity_base_url(), "https://abc123.api.sanity.io");
}

#[test]
fn debug_redacts_api_token() {
    let mut map = HashMap::new();
    map.insert("SANITY_API_TOKEN", "sk-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("sk-secret"));
    assert!(rendered.contains("[redacted]"));
}
