//! Errors returned when the core `Tracker` is built from the configuration.
//!
//! Error | Description
//! ---|---
//! `InvalidPersistentInfoHash` | A key in `core.persistent_torrents` is not a 40 character hex infohash.
use std::panic::Location;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("invalid infohash in the persistent torrents: {info_hash}, {location}")]
    InvalidPersistentInfoHash {
        location: &'static Location<'static>,
        info_hash: String,
    },
}
