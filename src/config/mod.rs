//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `INCOME_PLANNER` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use income_planner::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Catalog source: {:?}", config.catalog.source);
//! ```

mod catalog;
mod error;
mod logging;
mod preferences;

pub use catalog::{CatalogConfig, CatalogSourceKind};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use preferences::PreferencesConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog source (builtin or YAML file)
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Starting preferences
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `INCOME_PLANNER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `INCOME_PLANNER__CATALOG__SOURCE=file` -> `catalog.source = file`
    /// - `INCOME_PLANNER__PREFERENCES__WEEKLY_HOURS=6` -> `preferences.weekly_hours = 6`
    /// - `INCOME_PLANNER__PREFERENCES__LEVERAGE=skills,network`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INCOME_PLANNER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.preferences.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SkillLevel;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "INCOME_PLANNER__CATALOG__SOURCE",
        "INCOME_PLANNER__CATALOG__PATH",
        "INCOME_PLANNER__PREFERENCES__WEEKLY_HOURS",
        "INCOME_PLANNER__PREFERENCES__SKILL_LEVEL",
        "INCOME_PLANNER__PREFERENCES__LEVERAGE",
        "INCOME_PLANNER__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.catalog.source, CatalogSourceKind::Builtin);
        assert_eq!(config.preferences.weekly_hours, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("INCOME_PLANNER__CATALOG__SOURCE", "file");
        env::set_var("INCOME_PLANNER__CATALOG__PATH", "/srv/catalog.yaml");
        env::set_var("INCOME_PLANNER__PREFERENCES__WEEKLY_HOURS", "9");
        env::set_var("INCOME_PLANNER__PREFERENCES__SKILL_LEVEL", "advanced");
        env::set_var("INCOME_PLANNER__PREFERENCES__LEVERAGE", "skills,network");
        env::set_var("INCOME_PLANNER__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.catalog.source, CatalogSourceKind::File);
        assert!(config.logging.json);
        let prefs = config.preferences.to_preferences().unwrap();
        assert_eq!(prefs.weekly_hours.value(), 9);
        assert_eq!(prefs.skill_level, SkillLevel::Advanced);
        assert_eq!(prefs.leverage.len(), 2);
    }

    #[test]
    fn test_validate_rejects_file_source_without_path() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("INCOME_PLANNER__CATALOG__SOURCE", "file");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("catalog.path"))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_preferences() {
        let config = AppConfig {
            preferences: PreferencesConfig {
                weekly_hours: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPreferences(_))
        ));
    }
}
