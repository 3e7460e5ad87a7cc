//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use tracing::Level;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub pagination: PaginationConfig,
    pub logging: LoggingConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Page size limits applied to list queries
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_limit")]
    pub default_limit: u32,
    #[serde(default = "default_max_page_limit")]
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_page_limit(),
            max_limit: default_max_page_limit(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Level name, e.g. "info" or "debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// The configured level as a `tracing::Level`.
    ///
    /// # Errors
    /// Returns an error if the level name is not recognized
    pub fn tracing_level(&self) -> Result<Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::InvalidValue("LOG_LEVEL", self.level.clone()))
    }
}

// Default value functions
fn default_app_name() -> String {
    "ministry-platform".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_page_limit() -> u32 {
    20
}

fn default_max_page_limit() -> u32 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns an error if a variable is present but cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)
                .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
            None => default_env(),
        };

        let pagination = PaginationConfig {
            default_limit: parse_var(&lookup, "PAGINATION_DEFAULT_LIMIT")?
                .unwrap_or_else(default_page_limit),
            max_limit: parse_var(&lookup, "PAGINATION_MAX_LIMIT")?
                .unwrap_or_else(default_max_page_limit),
        };
        if pagination.default_limit == 0 || pagination.default_limit > pagination.max_limit {
            return Err(ConfigError::InvalidValue(
                "PAGINATION_DEFAULT_LIMIT",
                pagination.default_limit.to_string(),
            ));
        }

        let logging = LoggingConfig {
            level: lookup("LOG_LEVEL").unwrap_or_else(default_log_level),
            json: parse_var(&lookup, "LOG_JSON")?.unwrap_or(env.is_production()),
        };
        logging.tracing_level()?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            pagination,
            logging,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, value.clone()))
        })
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.app.name, "ministry-platform");
        assert_eq!(config.app.env, Environment::Development);
        assert_eq!(config.pagination.default_limit, 20);
        assert_eq!(config.pagination.max_limit, 100);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_reads_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_NAME", "movemental"),
            ("APP_ENV", "Production"),
            ("PAGINATION_DEFAULT_LIMIT", "50"),
            ("PAGINATION_MAX_LIMIT", "200"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.app.name, "movemental");
        assert!(config.app.env.is_production());
        assert_eq!(config.pagination.default_limit, 50);
        assert_eq!(config.pagination.max_limit, 200);
        assert_eq!(config.logging.tracing_level().unwrap(), Level::DEBUG);
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_number_is_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("PAGINATION_MAX_LIMIT", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("PAGINATION_MAX_LIMIT", _)));
    }

    #[test]
    fn test_default_limit_above_max_is_error() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("PAGINATION_DEFAULT_LIMIT", "150"),
            ("PAGINATION_MAX_LIMIT", "100"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PAGINATION_DEFAULT_LIMIT: 150");
    }

    #[test]
    fn test_unknown_environment_is_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "qa")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("APP_ENV", _)));
    }

    #[test]
    fn test_unknown_log_level_is_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "verbose")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("LOG_LEVEL", _)));
    }
}
