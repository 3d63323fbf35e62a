use std::panic::Location;

use thiserror::Error;
use torrust_scrape_tracker_primitives::info_hash::InfoHash;
use torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_scrape_tracker_primitives::{peer, PersistentTorrents};

use crate::entry::PeerRole;

pub mod rw_lock_std;

pub use rw_lock_std::RwLockStd;

/// Failures of the repository itself.
///
/// A torrent that is not in the repository is not an error: lookups return
/// `Ok(None)` for it.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("the torrent repository lock was poisoned by a panicking writer, {location}")]
    LockPoisoned { location: &'static Location<'static> },
}

/// A store of swarms keyed by infohash.
///
/// Implementations are internally synchronized: every method can be called
/// from any number of tasks at the same time.
pub trait Repository: Send + Sync + 'static {
    /// Returns the swarm statistics of a torrent, or `None` if the torrent
    /// is not tracked.
    ///
    /// # Errors
    ///
    /// Will return an error if the repository can't be read.
    fn find(&self, info_hash: &InfoHash) -> Result<Option<SwarmMetadata>, Error>;

    /// Adds the peer to the swarm (creating the torrent if needed) or moves it
    /// to its new role, and returns the updated statistics.
    ///
    /// # Errors
    ///
    /// Will return an error if the repository can't be written.
    fn upsert_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id, role: PeerRole) -> Result<SwarmMetadata, Error>;

    /// Removes the peer from the swarm. Returns the updated statistics, or
    /// `None` if the torrent is not tracked.
    ///
    /// # Errors
    ///
    /// Will return an error if the repository can't be written.
    fn remove_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id) -> Result<Option<SwarmMetadata>, Error>;

    /// Drops the torrents without seeders or leechers and returns how many
    /// were removed.
    ///
    /// With `keep_downloaded` a peerless torrent that has completed downloads
    /// stays, so its counter is not lost.
    ///
    /// # Errors
    ///
    /// Will return an error if the repository can't be written.
    fn remove_peerless_torrents(&self, keep_downloaded: bool) -> Result<usize, Error>;

    /// Pre-seeds the completed downloads counter of torrents that are not
    /// tracked yet. Torrents already in the repository are left untouched.
    ///
    /// # Errors
    ///
    /// Will return an error if the repository can't be written.
    fn import_persistent(&self, persistent_torrents: &PersistentTorrents) -> Result<(), Error>;

    /// Number of tracked torrents.
    ///
    /// # Errors
    ///
    /// Will return an error if the repository can't be read.
    fn len(&self) -> Result<usize, Error>;

    /// # Errors
    ///
    /// Will return an error if the repository can't be read.
    fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.len()? == 0)
    }
}
