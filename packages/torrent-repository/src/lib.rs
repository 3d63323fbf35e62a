//! In-memory repository of torrents for the Torrust scrape tracker.
//!
//! The repository keeps one [`entry::Torrent`] per infohash: the active
//! seeders and leechers of the swarm and the number of completed downloads.
//! The tracker only needs the swarm statistics
//! ([`SwarmMetadata`](torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata))
//! out of it, which is what [`repository::Repository::find`] returns.
//!
//! ```rust
//! use torrust_scrape_tracker_primitives::info_hash::InfoHash;
//! use torrust_scrape_tracker_primitives::peer;
//! use torrust_scrape_tracker_torrent_repository::entry::PeerRole;
//! use torrust_scrape_tracker_torrent_repository::repository::Repository as _;
//! use torrust_scrape_tracker_torrent_repository::TorrentsRwLockStd;
//!
//! let torrents = TorrentsRwLockStd::default();
//! let info_hash = InfoHash([0x3b; 20]);
//!
//! torrents.upsert_peer(&info_hash, &peer::Id::from(1), PeerRole::Leecher).unwrap();
//! torrents.upsert_peer(&info_hash, &peer::Id::from(1), PeerRole::Seeder).unwrap();
//!
//! let stats = torrents.find(&info_hash).unwrap().unwrap();
//!
//! assert_eq!((stats.complete, stats.downloaded, stats.incomplete), (1, 1, 0));
//! ```
pub mod entry;
pub mod repository;

// Torrent Entry

pub type EntrySingle = entry::Torrent;

// Repos

pub type TorrentsRwLockStd = repository::RwLockStd;
