//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `TORRUST_SCRAPE_TRACKER_`.
//! Refer to the [configuration crate documentation](https://docs.rs/torrust-scrape-tracker-configuration)
//! for the list of variables.
use torrust_scrape_tracker_configuration::{Configuration, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/tracker.development.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `tracker.toml`.
/// 2. Environment variable: `TORRUST_SCRAPE_TRACKER_CONFIG_TOML`. The variable contains the same contents as the `tracker.toml` file.
///
/// Environment variable has priority over the config file. Single options
/// can be overridden on top of both.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either
/// `./tracker.toml` file or the env var `TORRUST_SCRAPE_TRACKER_CONFIG_TOML`.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string());

    Configuration::load(&info).expect("it should load the tracker configuration")
}
