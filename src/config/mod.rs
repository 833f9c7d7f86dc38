//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `DAILY_AWARENESS`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use daily_awareness::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod server;
mod storage;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Plain variable accepted when the prefixed key is unset.
const LEGACY_GEMINI_KEY: &str = "GEMINI_API_KEY";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present
    /// 2. Reads `DAILY_AWARENESS__*` variables, `__` separating sections
    /// 3. Falls back to plain `GEMINI_API_KEY` for the provider key
    ///
    /// - `DAILY_AWARENESS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DAILY_AWARENESS__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DAILY_AWARENESS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if !config.ai.has_api_key() {
            config.ai.gemini_api_key = std::env::var(LEGACY_GEMINI_KEY)
                .ok()
                .filter(|k| !k.trim().is_empty());
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.storage.validate()?;

        // Generation must give up before the HTTP layer does, or the
        // client sees a bare timeout instead of fallback advice.
        if self.ai.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::AiTimeoutExceedsRequest {
                ai_secs: self.ai.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "DAILY_AWARENESS__SERVER__PORT",
        "DAILY_AWARENESS__SERVER__ENVIRONMENT",
        "DAILY_AWARENESS__AI__GEMINI_API_KEY",
        "DAILY_AWARENESS__AI__TIMEOUT_SECS",
        "DAILY_AWARENESS__STORAGE__BACKEND",
        "DAILY_AWARENESS__STORAGE__DATA_DIR",
        "GEMINI_API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn loads_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ai.model, "gemini-1.5-flash");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DAILY_AWARENESS__SERVER__PORT", "8088");
        env::set_var("DAILY_AWARENESS__SERVER__ENVIRONMENT", "production");
        env::set_var("DAILY_AWARENESS__AI__TIMEOUT_SECS", "5");
        env::set_var("DAILY_AWARENESS__STORAGE__BACKEND", "memory");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8088);
        assert!(config.is_production());
        assert_eq!(config.ai.timeout_secs, 5);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn ai_timeout_must_be_shorter_than_request_timeout() {
        let mut config = AppConfig::default();
        config.ai.timeout_secs = 60;
        config.server.request_timeout_secs = 30;

        assert_eq!(
            config.validate(),
            Err(ValidationError::AiTimeoutExceedsRequest {
                ai_secs: 60,
                request_secs: 30,
            })
        );

        config.ai.timeout_secs = 30;
        assert!(config.validate().is_err());

        config.ai.timeout_secs = 29;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn prefixed_key_wins_over_plain_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DAILY_AWARENESS__AI__GEMINI_API_KEY", "prefixed");
        env::set_var("GEMINI_API_KEY", "plain");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().ai.gemini_api_key.as_deref(), Some("prefixed"));
    }

    #[test]
    fn plain_key_is_used_as_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("GEMINI_API_KEY", "plain");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().ai.gemini_api_key.as_deref(), Some("plain"));
    }
}
