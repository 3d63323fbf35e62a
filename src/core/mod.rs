//! The core `tracker` module contains the generic `BitTorrent` tracker logic
//! which is independent of the delivery layer.
//!
//! It contains the tracker services and their dependencies. It's a domain
//! layer which does not specify how the end user should connect to the
//! `Tracker`.
//!
//! Typically this module is intended to be used by higher modules like:
//!
//! - An HTTP tracker
//! - A tracker REST API
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!     HTTP tracker |
//!  Tracker REST API|> Core tracker
//! ```
//!
//! # Tracker
//!
//! The `Tracker` is the main struct in this module. It has two
//! responsibilities:
//!
//! - **Authentication**: it decides if a client can use the tracker. In
//!   `private` mode the client must provide one of the registered
//!   [`auth::Key`]s. In `public` mode every client is accepted.
//! - **Swarm statistics**: it gives access to the torrent repository, which
//!   keeps the seeders, leechers and completed downloads of every torrent.
//!
//! ```rust,no_run
//! use torrust_scrape_tracker::core::services::tracker_factory;
//! use torrust_scrape_tracker_configuration::Configuration;
//! use torrust_scrape_tracker_primitives::info_hash::InfoHash;
//!
//! let tracker = tracker_factory(&Configuration::default());
//!
//! let info_hash = "3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0".parse::<InfoHash>().unwrap();
//!
//! // `None`: the torrent is not tracked.
//! let swarm_metadata = tracker.find_swarm_metadata(&info_hash).unwrap();
//! ```
//!
//! A torrent that is not tracked is not an error. Only a failure of the
//! repository itself is.
pub mod auth;
pub mod error;
pub mod services;

use std::collections::HashSet;
use std::panic::Location;
use std::sync::Arc;

use torrust_scrape_tracker_configuration::Core;
use torrust_scrape_tracker_primitives::info_hash::InfoHash;
use torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_scrape_tracker_primitives::{peer, PersistentTorrents};
use torrust_scrape_tracker_torrent_repository::entry::PeerRole;
use torrust_scrape_tracker_torrent_repository::repository::{self, Repository};
use tracing::debug;

use self::auth::Key;

/// The domain layer tracker service.
///
/// Its main responsibility is to handle the `scrape` requests. But it's also
/// a container for the `Tracker` configuration and the in-memory torrent
/// repository.
///
/// > **NOTICE**: the `Tracker` is not responsible for handling the network
/// > layer. Typically, the `Tracker` is used by a higher application service
/// > that handles the network layer.
pub struct Tracker {
    private: bool,
    persistent_torrent_completed_stat: bool,
    keys: tokio::sync::RwLock<HashSet<Key>>,
    torrents: Arc<dyn Repository>,
}

impl Tracker {
    /// `Tracker` constructor.
    ///
    /// # Errors
    ///
    /// Will return a `ParseKeyError` if one of the configured keys is not a
    /// valid [`Key`].
    pub fn new(config: &Core, torrents: Arc<dyn Repository>) -> Result<Tracker, auth::ParseKeyError> {
        let keys = config
            .auth_keys
            .iter()
            .map(|key| key.parse::<Key>())
            .collect::<Result<HashSet<Key>, _>>()?;

        Ok(Tracker {
            private: config.private,
            persistent_torrent_completed_stat: config.persistent_torrent_completed_stat,
            keys: tokio::sync::RwLock::new(keys),
            torrents,
        })
    }

    /// Returns `true` is the tracker is in private mode.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Returns `true` if the tracker requires authentication.
    pub fn requires_authentication(&self) -> bool {
        self.is_private()
    }

    /// It authenticates the peer `key` against the `Tracker` authentication
    /// key list.
    ///
    /// # Errors
    ///
    /// Will return an error if the tracker is `private` and the `key` is not
    /// registered.
    pub async fn authenticate(&self, key: &Key) -> Result<(), auth::Error> {
        if self.is_private() {
            self.verify_auth_key(key).await
        } else {
            Ok(())
        }
    }

    async fn verify_auth_key(&self, key: &Key) -> Result<(), auth::Error> {
        if self.keys.read().await.contains(key) {
            Ok(())
        } else {
            Err(auth::Error::UnknownKey {
                location: Location::caller(),
                key: Box::new(key.clone()),
            })
        }
    }

    /// It registers a key. Returns `false` if it was already registered.
    pub async fn add_key(&self, key: Key) -> bool {
        debug!("Adding authentication key: {key}");
        self.keys.write().await.insert(key)
    }

    /// It generates and registers a new random key.
    pub async fn generate_auth_key(&self) -> Key {
        let key = auth::generate();
        self.keys.write().await.insert(key.clone());
        key
    }

    /// It removes a key. Returns `false` if it was not registered.
    pub async fn remove_key(&self, key: &Key) -> bool {
        debug!("Removing authentication key: {key}");
        self.keys.write().await.remove(key)
    }

    /// It returns the swarm statistics of a torrent, or `None` if the torrent
    /// is not tracked.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent repository fails.
    pub fn find_swarm_metadata(&self, info_hash: &InfoHash) -> Result<Option<SwarmMetadata>, repository::Error> {
        self.torrents.find(info_hash)
    }

    /// It adds or moves a peer in the swarm of a torrent and returns the
    /// updated statistics.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent repository fails.
    pub fn upsert_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id, role: PeerRole) -> Result<SwarmMetadata, repository::Error> {
        self.torrents.upsert_peer(info_hash, peer_id, role)
    }

    /// It removes a peer from the swarm of a torrent.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent repository fails.
    pub fn remove_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id) -> Result<Option<SwarmMetadata>, repository::Error> {
        self.torrents.remove_peer(info_hash, peer_id)
    }

    /// It removes the torrents without peers and returns how many were
    /// removed. With `persistent_torrent_completed_stat` enabled a torrent
    /// with completed downloads is kept.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent repository fails.
    pub fn cleanup_torrents(&self) -> Result<usize, repository::Error> {
        self.torrents.remove_peerless_torrents(self.persistent_torrent_completed_stat)
    }

    /// It seeds the repository with completed downloads recorded before the
    /// tracker started. Torrents already tracked are left as they are.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent repository fails.
    pub fn import_persistent_torrents(&self, persistent_torrents: &PersistentTorrents) -> Result<(), repository::Error> {
        debug!(torrents = persistent_torrents.len(), "importing persistent torrents");
        self.torrents.import_persistent(persistent_torrents)
    }
}
