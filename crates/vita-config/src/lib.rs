//! # vita-config
//!
//! Layered configuration loading for Vitalog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VITALOG_*` prefix, `__` as separator)
//! 2. Project-level `.vitalog/config.toml`
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VITALOG_DATABASE__PATH` -> `database.path`,
//! `VITALOG_CAPTURE__LOOKUP_TIMEOUT_MS` -> `capture.lookup_timeout_ms`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vita_config::VitaConfig;
//!
//! let config = VitaConfig::load().expect("config");
//! println!("database at {}", config.database.path);
//! ```

mod capture;
mod database;
mod error;
mod query;

pub use capture::CaptureConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use query::QueryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VitaConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl VitaConfig {
    /// Load configuration from all sources (TOML file + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`VITALOG_*` prefix)
    /// 2. `.vitalog/config.toml` (project-local)
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical
    /// entry point for services and tests.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let local_path = PathBuf::from(".vitalog/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VITALOG_").split("__"))
    }
}
