use crate::error::ConfigError;
use rust_decimal::Decimal;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, Logging, QuoteDefaults};

/// The file read by [`load_config`] from the working directory, if present.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix of environment variables that override file settings,
/// e.g. `INCOTERM__DEFAULTS__MARKUP_PERCENTAGE=12.5`.
pub const ENV_PREFIX: &str = "INCOTERM";

/// Loads the application configuration from `config.toml` and the environment.
///
/// This function is the primary entry point for this crate. A missing file is not
/// an error; every setting has a default.
pub fn load_config() -> Result<Config, ConfigError> {
    build(Path::new(DEFAULT_CONFIG_FILE), false)
}

/// Loads configuration from an explicit file, which must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    build(path, true)
}

fn build(path: &Path, required: bool) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(required))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

/// Checks the values serde cannot constrain on its own.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.defaults.markup_percentage < Decimal::ZERO {
        return Err(ConfigError::ValidationError(format!(
            "defaults.markup_percentage must not be negative (got {})",
            config.defaults.markup_percentage
        )));
    }
    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.level must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Currency;
    use rust_decimal_macros::dec;

    fn from_toml(source: &str) -> Result<Config, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Config>()?;
        validate(&config)?;
        Ok(config)
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.defaults.markup_percentage, dec!(10));
        assert_eq!(config.defaults.currency, Currency::Usd);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn reads_quote_defaults() {
        let config = from_toml(
            r#"
            [defaults]
            markup_percentage = "12.5"
            currency = "INR"

            [logging]
            level = "pricing=debug"
            directory = "logs"
            "#,
        )
        .unwrap();
        assert_eq!(config.defaults.markup_percentage, dec!(12.5));
        assert_eq!(config.defaults.currency, Currency::Inr);
        assert_eq!(config.logging.level, "pricing=debug");
        assert_eq!(config.logging.directory.as_deref(), Some(Path::new("logs")));
        assert_eq!(config.logging.file_prefix, "incoterm-pricer.log");
    }

    #[test]
    fn negative_markup_is_rejected() {
        let result = from_toml("[defaults]\nmarkup_percentage = \"-1\"\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let result = from_toml("[defaults]\ncurrency = \"EUR\"\n");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn missing_default_file_is_not_an_error() {
        let result = build(Path::new("definitely-not-here.toml"), false);
        assert!(result.is_ok());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = load_config_from(Path::new("definitely-not-here.toml"));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn invalid_log_level_is_reported() {
        let settings = Logging {
            level: "pricing=notalevel".to_string(),
            ..Logging::default()
        };
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(matches!(logging::env_filter(&settings), Err(ConfigError::Logging(_))));
        }
    }
}
