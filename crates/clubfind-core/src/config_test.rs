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
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn empty_env_builds_with_defaults() {
    let map = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(config.env, Environment::Development);
    assert_eq!(config.bind_addr.port(), 3000);
    assert_eq!(config.llm_base_url, "https://api.openai.com/v1");
    assert_eq!(config.llm_model, "gpt-4.1");
    assert!(config.llm_api_key.is_none());
    assert_eq!(config.catalog_base_url, "https://www.2ndswing.com");
    assert_eq!(config.catalog_user_agent, "Mozilla/5.0");
    assert_eq!(config.catalog_max_concurrent_fetches, 3);
    assert_eq!(config.result_cache_ttl_secs, 300);
}

#[test]
fn overrides_are_honored() {
    let mut map = HashMap::new();
    map.insert("CLUBFIND_ENV", "production");
    map.insert("CLUBFIND_BIND_ADDR", "127.0.0.1:8080");
    map.insert("CLUBFIND_LLM_MODEL", "gpt-4o-mini");
    map.insert("OPENAI_API_KEY", "sk-test");
    map.insert("CLUBFIND_CATALOG_MAX_CONCURRENT_FETCHES", "5");

    let config = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(config.env, Environment::Production);
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.llm_model, "gpt-4o-mini");
    assert_eq!(config.llm_api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.catalog_max_concurrent_fetches, 5);
}

#[test]
fn base_urls_lose_trailing_slash() {
    let mut map = HashMap::new();
    map.insert("CLUBFIND_LLM_BASE_URL", "http://localhost:11434/v1/");
    map.insert("CLUBFIND_CATALOG_BASE_URL", "https://catalog.example.com/");

    let config = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(config.llm_base_url, "http://localhost:11434/v1");
    assert_eq!(config.catalog_base_url, "https://catalog.example.com");
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let mut map = HashMap::new();
    map.insert("CLUBFIND_BIND_ADDR", "not-an-addr");

    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "CLUBFIND_BIND_ADDR"));
}

#[test]
fn invalid_timeout_is_rejected() {
    let mut map = HashMap::new();
    map.insert("CLUBFIND_LLM_REQUEST_TIMEOUT_SECS", "soon");

    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidEnvVar { ref var, .. } if var == "CLUBFIND_LLM_REQUEST_TIMEOUT_SECS"
    ));
}

#[test]
fn debug_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("OPENAI_API_KEY", "sk-very-secret");

    let config = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{config:?}");

    assert!(!debug.contains("sk-very-secret"));
    assert!(debug.contains("[redacted]"));
}
