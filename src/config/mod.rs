//! Application configuration
//!
//! Loaded from environment variables (and a `.env` file when present) with
//! the `CAMPLOG` prefix. Nested values are separated by `__`:
//!
//! - `CAMPLOG__SERVER__PORT=8080` -> `server.port`
//! - `CAMPLOG__STORAGE=memory` -> `storage`
//! - `CAMPLOG__DATABASE__URL=postgres://...` -> `database.url`
//! - `CAMPLOG__AUTH__ISSUER_URL=https://...` -> `auth.issuer_url`
//!
//! ```no_run
//! use camplog::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::{DatabaseConfig, StorageBackend};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageBackend,

    /// Ignored unless `storage` is `postgres`
    #[serde(default)]
    pub database: DatabaseConfig,

    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAMPLOG")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if self.storage == StorageBackend::Postgres {
            self.database.validate()?;
        }
        self.auth.validate(&self.server.environment)?;
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

    // Env vars are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CAMPLOG__STORAGE",
        "CAMPLOG__DATABASE__URL",
        "CAMPLOG__AUTH__ISSUER_URL",
        "CAMPLOG__AUTH__AUDIENCE",
        "CAMPLOG__SERVER__PORT",
        "CAMPLOG__SERVER__ENVIRONMENT",
    ];

    fn set_minimal_env() {
        env::set_var("CAMPLOG__DATABASE__URL", "postgresql://test@localhost/camplog");
        env::set_var(
            "CAMPLOG__AUTH__ISSUER_URL",
            "https://id.example.com/realms/camplog",
        );
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn loads_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage, StorageBackend::Postgres);
        assert_eq!(config.database.url, "postgresql://test@localhost/camplog");
        assert_eq!(config.auth.audience, "camplog-web");
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn memory_storage_needs_no_database_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CAMPLOG__STORAGE", "memory");
        env::set_var("CAMPLOG__AUTH__ISSUER_URL", "http://localhost:8180/realms/camplog");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn production_rejects_http_issuer() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CAMPLOG__AUTH__ISSUER_URL", "http://id.example.com/realms/camplog");
        env::set_var("CAMPLOG__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(matches!(
            config.validate(),
            Err(ValidationError::IssuerMustBeHttps)
        ));
    }

    #[test]
    fn custom_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CAMPLOG__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }
}
