use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse display config: {0}")]
    DisplayConfigParse(#[from] serde_yaml::Error),

    #[error("invalid display config: {0}")]
    DisplayConfigInvalid(String),
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid. No variable is strictly
/// required: the LLM API key is optional (local or keyless endpoints) and
/// everything else has a default.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files. Useful for tests.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("CLUBFIND_ENV", "development"));
    let bind_addr = parse_addr("CLUBFIND_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("CLUBFIND_LOG_LEVEL", "info");

    let refdata_path = PathBuf::from(or_default("CLUBFIND_REFDATA_PATH", "./data"));
    let display_config_path = PathBuf::from(or_default(
        "CLUBFIND_DISPLAY_CONFIG_PATH",
        "./config/categories.yaml",
    ));

    let llm_base_url = trim_trailing_slash(&or_default(
        "CLUBFIND_LLM_BASE_URL",
        "https://api.openai.com/v1",
    ));
    let llm_api_key = lookup("OPENAI_API_KEY").ok();
    let llm_model = or_default("CLUBFIND_LLM_MODEL", "gpt-4.1");
    let llm_request_timeout_secs = parse_u64("CLUBFIND_LLM_REQUEST_TIMEOUT_SECS", "30")?;

    let catalog_base_url = trim_trailing_slash(&or_default(
        "CLUBFIND_CATALOG_BASE_URL",
        "https://www.2ndswing.com",
    ));
    let catalog_request_timeout_secs = parse_u64("CLUBFIND_CATALOG_REQUEST_TIMEOUT_SECS", "10")?;
    let catalog_user_agent = or_default("CLUBFIND_CATALOG_USER_AGENT", "Mozilla/5.0");
    let catalog_max_concurrent_fetches =
        parse_usize("CLUBFIND_CATALOG_MAX_CONCURRENT_FETCHES", "3")?;

    let result_cache_ttl_secs = parse_u64("CLUBFIND_RESULT_CACHE_TTL_SECS", "300")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        refdata_path,
        display_config_path,
        llm_base_url,
        llm_api_key,
        llm_model,
        llm_request_timeout_secs,
        catalog_base_url,
        catalog_request_timeout_secs,
        catalog_user_agent,
        catalog_max_concurrent_fetches,
        result_cache_ttl_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
