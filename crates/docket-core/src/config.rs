use std::time::Duration;

use anyhow::Result;
use config::{Config, Environment, Source};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub authorization: AuthorizationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizationConfig {
    /// Upper bound for a single persistence lookup made during an access check.
    pub lookup_timeout_ms: u64,
}

impl AuthorizationConfig {
    /// ## Summary
    /// Returns the lookup timeout as a `Duration`.
    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    /// ## Errors
    /// Returns `ConfigError` for a zero lookup timeout.
    pub fn validate(&self) -> CoreResult<()> {
        if self.lookup_timeout_ms == 0 {
            return Err(CoreError::ConfigError(
                "authorization.lookup_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AuthorizationConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: DEFAULT_LOOKUP_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

pub const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 2000;

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        Self::from_sources(
            config::File::with_name("config.toml").required(false),
            environment(),
        )
    }

    /// ## Summary
    /// Builds settings from a file source overlaid by an environment source.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn from_sources<S>(file: S, env: Environment) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("database.max_connections", 4)?
            .set_default("authorization.lookup_timeout_ms", DEFAULT_LOOKUP_TIMEOUT_MS)?
            .set_default("logging.level", "info")?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// ## Errors
    /// Returns `ConfigError` for a zero lookup timeout or an empty pool.
    pub fn validate(&self) -> CoreResult<()> {
        self.authorization.validate()?;
        if self.database.max_connections == 0 {
            return Err(CoreError::ConfigError(
                "database.max_connections must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// `DOCKET_`-prefixed variables, with `__` separating nested keys
/// (`DOCKET_DATABASE__URL`).
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix("DOCKET")
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
