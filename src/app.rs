//! Torrust Scrape Tracker application.
//!
//! The tracker application has a global configuration for its jobs.
//! It's basically a container for other services.
//!
//! The application is responsible for starting the jobs enabled in the
//! configuration:
//!
//! - HTTP tracker: it answers the `scrape` requests.
//! - Torrent cleanup: it removes the peerless torrents on intervals.
use std::sync::Arc;

use tokio::task::JoinHandle;
use torrust_scrape_tracker_configuration::Configuration;
use tracing::warn;

use crate::bootstrap::jobs::{http_tracker, torrent_cleanup};
use crate::{core, servers};

/// It starts the jobs enabled in the configuration and returns their handles.
///
/// # Panics
///
/// Will panic if an enabled HTTP tracker can't be started.
pub async fn start(config: &Configuration, tracker: Arc<core::Tracker>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    if tracker.is_private() && config.core.auth_keys.is_empty() {
        warn!("The tracker is private but no authentication keys are configured. Every scrape request will be rejected.");
    }

    // Remove torrents without peers, every interval
    if config.core.peerless_torrents_cleanup_interval > 0 {
        jobs.push(torrent_cleanup::start_job(&config.core, &tracker));
    }

    // Start the HTTP block
    if let Some(job) = http_tracker::start_job(&config.http_tracker, tracker.clone(), servers::http::Version::V1).await {
        jobs.push(job);
    };

    jobs
}
