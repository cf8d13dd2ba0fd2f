//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file overlaid with `CAMPUS__*` environment variables.
//! Every section has defaults, so an empty configuration is valid.

pub mod auth;
pub mod logging;
pub mod policy;

use serde::{Deserialize, Serialize};

pub use self::auth::{AccountConfig, AuthConfig, CredentialMode};
pub use self::logging::LoggingConfig;
pub use self::policy::PolicyConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Default location of the configuration file, without extension.
pub const DEFAULT_CONFIG_PATH: &str = "config/default";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Credential verification settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Access policy overrides.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// With `Some(path)` the file must exist. With `None` the default
    /// location is tried and silently skipped when missing. Environment
    /// variables prefixed with `CAMPUS__` are applied last.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let file = match path {
            Some(path) => config::File::with_name(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("CAMPUS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from a TOML string (no environment overlay).
    pub fn from_toml(source: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
