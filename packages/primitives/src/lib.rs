//! Primitive types for [Torrust Scrape Tracker](https://docs.rs/torrust-scrape-tracker).
//!
//! This module contains the basic data structures shared by the tracker
//! server crate and the packages around it: the torrent identifier
//! ([`InfoHash`](info_hash::InfoHash)), the peer identifier
//! ([`Id`](peer::Id)) and the swarm statistics reported by the `scrape`
//! request ([`SwarmMetadata`](swarm_metadata::SwarmMetadata)).
use std::collections::BTreeMap;

use info_hash::InfoHash;

pub mod info_hash;
pub mod peer;
pub mod swarm_metadata;

/// Number of completed downloads (snatches) per torrent, used to pre-seed a
/// torrent repository.
pub type PersistentTorrents = BTreeMap<InfoHash, u32>;
