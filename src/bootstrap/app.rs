//! Setup for the main tracker application.
//!
//! The [`setup`] only builds the application and its dependencies but it does
//! not start the application. In fact, there is no such thing as the main
//! application process. When the application starts, the only thing it does
//! is starting the jobs. The HTTP tracker is a job, and it runs in its own
//! task until it's halted.
//!
//! Setup steps:
//!
//! 1. Load the global application configuration.
//! 2. Initialize the logging.
//! 3. Build the core tracker with its in-memory torrent repository.
//! 4. Import the completed downloads recorded in the configuration.
use std::sync::Arc;

use torrust_scrape_tracker_configuration::Configuration;
use tracing::info;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::services::{persistent_torrents, tracker_factory};
use crate::core::Tracker;

/// It loads the configuration from the environment and builds the main domain [`Tracker`] struct.
#[must_use]
pub fn setup() -> (Configuration, Arc<Tracker>) {
    let configuration = initialize_configuration();
    let tracker = initialize_with_configuration(&configuration);

    info!("Configuration:\n{}", configuration.clone().mask_secrets().to_toml());

    (configuration, tracker)
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file or env vars).
#[must_use]
pub fn initialize_with_configuration(configuration: &Configuration) -> Arc<Tracker> {
    initialize_logging(configuration);
    Arc::new(initialize_tracker(configuration))
}

/// It builds the domain tracker and imports the persistent torrents.
///
/// The tracker is the domain layer service. It's the entrypoint to make requests to the domain layer.
/// It's used by other higher-level components like the HTTP tracker.
///
/// # Panics
///
/// Will panic if a persistent torrent in the configuration has an invalid
/// infohash or if the torrents can't be imported.
#[must_use]
pub fn initialize_tracker(config: &Configuration) -> Tracker {
    let tracker = tracker_factory(config);

    let persistent_torrents = persistent_torrents(&config.core).expect("Could not parse the persistent torrents.");

    tracker
        .import_persistent_torrents(&persistent_torrents)
        .expect("Could not import the persistent torrents.");

    tracker
}

/// It initializes the log threshold, format and channel.
///
/// See [the logging setup](crate::bootstrap::logging::setup) for more info about logging.
pub fn initialize_logging(config: &Configuration) {
    bootstrap::logging::setup(config);
}
