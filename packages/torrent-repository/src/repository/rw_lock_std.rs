use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use torrust_scrape_tracker_primitives::info_hash::InfoHash;
use torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_scrape_tracker_primitives::{peer, PersistentTorrents};
use tracing::debug;

use super::{Error, Repository};
use crate::entry::{Entry as _, PeerRole};
use crate::EntrySingle;

/// Torrents in a `BTreeMap` behind a single `std` read-write lock.
#[derive(Default, Debug)]
pub struct RwLockStd {
    pub(crate) torrents: RwLock<BTreeMap<InfoHash, EntrySingle>>,
}

impl RwLockStd {
    #[track_caller]
    fn get_torrents(&self) -> Result<RwLockReadGuard<'_, BTreeMap<InfoHash, EntrySingle>>, Error> {
        let location = Location::caller();
        self.torrents.read().map_err(|_| Error::LockPoisoned { location })
    }

    #[track_caller]
    fn get_torrents_mut(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<InfoHash, EntrySingle>>, Error> {
        let location = Location::caller();
        self.torrents.write().map_err(|_| Error::LockPoisoned { location })
    }
}

impl Repository for RwLockStd {
    fn find(&self, info_hash: &InfoHash) -> Result<Option<SwarmMetadata>, Error> {
        let db = self.get_torrents()?;

        Ok(db.get(info_hash).map(EntrySingle::get_swarm_metadata))
    }

    fn upsert_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id, role: PeerRole) -> Result<SwarmMetadata, Error> {
        let mut db = self.get_torrents_mut()?;

        let entry = db.entry(*info_hash).or_default();

        if entry.upsert_peer(peer_id, role) {
            debug!(%info_hash, %peer_id, "peer completed the download");
        }

        Ok(entry.get_swarm_metadata())
    }

    fn remove_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id) -> Result<Option<SwarmMetadata>, Error> {
        let mut db = self.get_torrents_mut()?;

        Ok(db.get_mut(info_hash).map(|entry| {
            entry.remove_peer(peer_id);
            entry.get_swarm_metadata()
        }))
    }

    fn remove_peerless_torrents(&self, keep_downloaded: bool) -> Result<usize, Error> {
        let mut db = self.get_torrents_mut()?;

        let before = db.len();
        db.retain(|_, entry| !entry.is_peerless() || (keep_downloaded && entry.downloaded > 0));
        let removed = before - db.len();

        debug!(removed, "removed peerless torrents");

        Ok(removed)
    }

    fn import_persistent(&self, persistent_torrents: &PersistentTorrents) -> Result<(), Error> {
        let mut torrents = self.get_torrents_mut()?;

        for (info_hash, downloaded) in persistent_torrents {
            // Skip if torrent entry already exists
            if torrents.contains_key(info_hash) {
                continue;
            }

            torrents.insert(*info_hash, EntrySingle::with_downloaded(*downloaded));
        }

        Ok(())
    }

    fn len(&self) -> Result<usize, Error> {
        Ok(self.get_torrents()?.len())
    }
}
