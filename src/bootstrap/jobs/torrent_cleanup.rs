//! Job that runs a task on intervals to clean up torrents.
//!
//! It removes the **peerless torrents**: torrents without seeders or
//! leechers. If the core option `persistent_torrent_completed_stat` is
//! `true` a peerless torrent with completed downloads is kept, so its
//! `downloaded` counter is still reported.
//!
//! Refer to [`torrust-scrape-tracker-configuration documentation`](https://docs.rs/torrust-scrape-tracker-configuration) for more info about those options.
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use torrust_scrape_tracker_configuration::Core;
use tracing::{error, info};

use crate::core;

/// It starts a job for cleaning up the torrent data in the tracker.
///
/// The cleaning task is executed every `peerless_torrents_cleanup_interval`
/// seconds. The job stops on `ctrl-c` or when the tracker is dropped.
///
/// # Panics
///
/// Will panic if the interval is `0`.
#[must_use]
pub fn start_job(config: &Core, tracker: &Arc<core::Tracker>) -> JoinHandle<()> {
    let weak_tracker = Arc::downgrade(tracker);
    let interval = config.peerless_torrents_cleanup_interval;

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval));
        interval.tick().await;

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Stopping torrent cleanup job..");
                    break;
                }
                _ = interval.tick() => {
                    if let Some(tracker) = weak_tracker.upgrade() {
                        let start_time = Instant::now();
                        info!("Cleaning up torrents..");
                        match tracker.cleanup_torrents() {
                            Ok(removed) => info!(removed, "Cleaned up torrents in: {}ms", start_time.elapsed().as_millis()),
                            Err(err) => error!(%err, "Could not clean up torrents"),
                        }
                    } else {
                        break;
                    }
                }
            }
        }
    })
}
