//! Configuration data structures for [Torrust Scrape Tracker](https://docs.rs/torrust-scrape-tracker).
//!
//! This module contains the configuration data structures for the
//! Torrust Scrape Tracker, a `BitTorrent` tracker that answers `scrape`
//! requests over HTTP.
//!
//! The current version for configuration is [`v1`].
pub mod v1;

use std::env;
use std::panic::Location;
use std::sync::Arc;

use thiserror::Error;

// Environment variables

/// The whole `tracker.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
pub const ENV_VAR_CONFIG_TOML: &str = "TORRUST_SCRAPE_TRACKER_CONFIG_TOML";

/// The `tracker.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TORRUST_SCRAPE_TRACKER_CONFIG_TOML_PATH";

/// Prefix of the environment variables that override a single option.
///
/// Sections and fields are separated by a double underscore, for example
/// `TORRUST_SCRAPE_TRACKER_CONFIG_OVERRIDE_CORE__PRIVATE=true`.
pub const ENV_VAR_CONFIG_OVERRIDE_PREFIX: &str = "TORRUST_SCRAPE_TRACKER_CONFIG_OVERRIDE_";

pub const ENV_VAR_CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type Core = v1::core::Core;
pub type HttpTracker = v1::http_tracker::HttpTracker;
pub type Logging = v1::logging::Logging;
pub type LogStyle = v1::logging::Style;
pub type Threshold = v1::logging::Threshold;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// The TOML content in [`ENV_VAR_CONFIG_TOML`] wins over the file. The
    /// file path is taken from [`ENV_VAR_CONFIG_TOML_PATH`], or
    /// `default_config_toml_path` when the variable is not set.
    #[must_use]
    pub fn new(default_config_toml_path: String) -> Self {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading extra configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading extra configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading extra configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Self {
            config_toml,
            config_toml_path,
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The sources could be merged but the result is not a valid
    /// configuration: a field has the wrong type or an invalid value.
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        location: &'static Location<'static>,
        source: Arc<figment::Error>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            location: Location::caller(),
            source: Arc::new(err),
        }
    }
}
