//! Version `1` for [Torrust Scrape Tracker](https://docs.rs/torrust-scrape-tracker)
//! configuration data structures.
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) file or
//! from an environment variable with the same content as the file. Single
//! options can be overridden with environment variables.
//!
//! The sources are merged in this order, the last one wins:
//!
//! 1. Default values.
//! 2. The TOML content in `TORRUST_SCRAPE_TRACKER_CONFIG_TOML` or, when it is
//!    not set, the file in `TORRUST_SCRAPE_TRACKER_CONFIG_TOML_PATH`.
//! 3. `TORRUST_SCRAPE_TRACKER_CONFIG_OVERRIDE_<SECTION>__<FIELD>` variables.
//!
//! When you run the tracker without providing the configuration via a file or
//! env var, the default configuration is used.
//!
//! ## Sections
//!
//! - [`Logging`](crate::v1::logging::Logging)
//! - [`Core`](crate::v1::core::Core)
//! - [`HttpTracker`](crate::v1::http_tracker::HttpTracker)
//!
//! ## Port binding
//!
//! You can bind the HTTP tracker to a random port by using port `0`. For
//! example, `127.0.0.1:0`. The OS will choose a random free port.
//!
//! ## Default configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//! style = "full"
//!
//! [core]
//! private = false
//! auth_keys = []
//! peerless_torrents_cleanup_interval = 600
//! persistent_torrent_completed_stat = false
//!
//! [core.persistent_torrents]
//!
//! [http_tracker]
//! enabled = true
//! bind_address = "0.0.0.0:7070"
//! ```
pub mod core;
pub mod http_tracker;
pub mod logging;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::core::Core;
use self::http_tracker::HttpTracker;
use self::logging::Logging;
use crate::{Error, Info, ENV_VAR_CONFIG_OVERRIDE_PREFIX, ENV_VAR_CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the tracker.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Clone)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// Core configuration.
    #[serde(default)]
    pub core: Core,

    /// The HTTP tracker configuration.
    #[serde(default)]
    pub http_tracker: HttpTracker,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the merged sources are not a valid configuration.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default()));

        let figment = match &info.config_toml {
            Some(config_toml) => figment.merge(Toml::string(config_toml)),
            None => figment.merge(Toml::file(&info.config_toml_path)),
        };

        let figment = figment.merge(Env::prefixed(ENV_VAR_CONFIG_OVERRIDE_PREFIX).split(ENV_VAR_CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if it can't be converted to TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }

    /// A copy of the configuration that can be written to the logs: the
    /// authentication keys are replaced.
    #[must_use]
    pub fn mask_secrets(mut self) -> Self {
        for key in &mut self.core.auth_keys {
            *key = "***".to_string();
        }
        self
    }
}
