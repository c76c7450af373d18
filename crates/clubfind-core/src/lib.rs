//! Shared types, configuration, and reference data for clubfind.
//!
//! Everything here is request-scoped value objects plus read-only data
//! loaded at startup: the club category taxonomy, the env-based
//! [`AppConfig`], the flat-file [`RefData`] store (canonical model lists,
//! brand list, per-category filter instructions, placeholder banks), and
//! the YAML presentation config mapping each category to the attributes
//! worth showing.

pub mod app_config;
pub mod config;
pub mod display;
pub mod refdata;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use display::{load_display_config, DisplayConfig};
pub use refdata::RefData;
pub use types::{CategoryMismatch, ClubCategory, MismatchSignal, ModelMapping, SearchRequest};
