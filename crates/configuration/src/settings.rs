use core_types::{Currency, DEFAULT_MARKUP_PERCENTAGE};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional; a missing `config.toml` yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: QuoteDefaults,
    #[serde(default)]
    pub logging: Logging,
}

/// Values pre-filled into a new quote when the user does not supply them.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteDefaults {
    /// Markup added on top of the seller's costs, in percent (10 means 10%).
    #[serde(default = "default_markup_percentage")]
    pub markup_percentage: Decimal,
    /// Currency whose symbol is shown next to amounts.
    #[serde(default)]
    pub currency: Currency,
}

impl Default for QuoteDefaults {
    fn default() -> Self {
        Self {
            markup_percentage: default_markup_percentage(),
            currency: Currency::default(),
        }
    }
}

fn default_markup_percentage() -> Decimal {
    DEFAULT_MARKUP_PERCENTAGE
}

/// Where and how verbosely the application logs.
#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    /// An `EnvFilter` directive such as `info` or `pricing=debug`. `RUST_LOG` wins when set.
    #[serde(default = "default_level")]
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_file_prefix() -> String {
    "incoterm-pricer.log".to_string()
}
