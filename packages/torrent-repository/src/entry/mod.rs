use std::collections::BTreeSet;

use torrust_scrape_tracker_primitives::peer;
use torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata;

pub mod single;

/// The part a peer plays in a swarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeerRole {
    /// The peer has the whole content.
    Seeder,
    /// The peer is still downloading.
    Leecher,
}

pub trait Entry {
    /// It returns the swarm metadata (statistics) as a struct:
    ///
    /// `(seeders, completed, leechers)`
    fn get_swarm_metadata(&self) -> SwarmMetadata;

    /// Returns True if there are no seeders and no leechers.
    fn is_peerless(&self) -> bool;

    /// Returns the number of Peers
    fn get_peers_len(&self) -> usize;

    /// It inserts or moves a peer and returns true if the number of complete
    /// downloads has increased.
    ///
    /// A leecher that comes back as a seeder has finished downloading: that's
    /// a snatch and the downloads counter goes up by one.
    fn upsert_peer(&mut self, peer_id: &peer::Id, role: PeerRole) -> bool;

    /// It removes the peer from the swarm. Returns true if it was there.
    fn remove_peer(&mut self, peer_id: &peer::Id) -> bool;
}

/// A data structure containing all the information about a torrent in the tracker.
///
/// This is the tracker entry for a given torrent and contains the swarm data,
/// that's the set of all the peers trying to download the same torrent.
/// The tracker keeps one entry like this for every torrent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Torrent {
    /// Active peers that have the whole content.
    pub(crate) seeders: BTreeSet<peer::Id>,
    /// Active peers that are still downloading.
    pub(crate) leechers: BTreeSet<peer::Id>,
    /// The number of peers that have ever completed downloading the torrent associated to this entry
    pub(crate) downloaded: u32,
}

impl Torrent {
    /// An entry without peers that keeps a previously recorded number of
    /// completed downloads.
    #[must_use]
    pub fn with_downloaded(downloaded: u32) -> Self {
        Self {
            downloaded,
            ..Self::default()
        }
    }
}
