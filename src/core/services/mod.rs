//! Tracker domain services.
//!
//! - [`tracker_factory`]: it builds the [`Tracker`] and its dependencies.
//! - [`persistent_torrents`]: it reads the completed downloads recorded in
//!   the configuration, to be imported into the repository at startup.
use std::panic::Location;
use std::sync::Arc;

use torrust_scrape_tracker_configuration::{Configuration, Core};
use torrust_scrape_tracker_primitives::info_hash::InfoHash;
use torrust_scrape_tracker_primitives::PersistentTorrents;
use torrust_scrape_tracker_torrent_repository::TorrentsRwLockStd;

use crate::core::error::Error;
use crate::core::Tracker;

/// It returns a new tracker building its dependencies.
///
/// # Panics
///
/// Will panic if tracker cannot be instantiated.
#[must_use]
pub fn tracker_factory(config: &Configuration) -> Tracker {
    let torrents = Arc::new(TorrentsRwLockStd::default());

    match Tracker::new(&config.core, torrents) {
        Ok(tracker) => tracker,
        Err(error) => {
            panic!("{}", error)
        }
    }
}

/// It parses the `persistent_torrents` table of the core configuration.
///
/// # Errors
///
/// Will return an error if a key is not a 40 character hex infohash.
pub fn persistent_torrents(config: &Core) -> Result<PersistentTorrents, Error> {
    config
        .persistent_torrents
        .iter()
        .map(|(info_hash, downloaded)| {
            let parsed = info_hash.parse::<InfoHash>().map_err(|_| Error::InvalidPersistentInfoHash {
                location: Location::caller(),
                info_hash: info_hash.clone(),
            })?;

            Ok((parsed, *downloaded))
        })
        .collect()
}
