use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Root of the flat-file reference data (model lists, prompts, …).
    pub refdata_path: PathBuf,
    /// Per-category presentation config (visible attribute allowlists).
    pub display_config_path: PathBuf,
    /// Base URL of the chat-completions endpoint, e.g. `https://api.openai.com/v1`.
    pub llm_base_url: String,
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    pub llm_request_timeout_secs: u64,
    pub catalog_base_url: String,
    pub catalog_request_timeout_secs: u64,
    pub catalog_user_agent: String,
    /// Bound on concurrent fetches in batch extraction.
    pub catalog_max_concurrent_fetches: usize,
    /// TTL for cached search results awaiting one render, in seconds.
    pub result_cache_ttl_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("refdata_path", &self.refdata_path)
            .field("display_config_path", &self.display_config_path)
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_api_key", &self.llm_api_key.as_ref().map(|_| "[redacted]"))
            .field("llm_model", &self.llm_model)
            .field("llm_request_timeout_secs", &self.llm_request_timeout_secs)
            .field("catalog_base_url", &self.catalog_base_url)
            .field(
                "catalog_request_timeout_secs",
                &self.catalog_request_timeout_secs,
            )
            .field("catalog_user_agent", &self.catalog_user_agent)
            .field(
                "catalog_max_concurrent_fetches",
                &self.catalog_max_concurrent_fetches,
            )
            .field("result_cache_ttl_secs", &self.result_cache_ttl_secs)
            .finish()
    }
}
