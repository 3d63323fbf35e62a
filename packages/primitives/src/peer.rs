//! Peer identifier used by the swarm store.
//!
//! ```rust
//! use torrust_scrape_tracker_primitives::peer;
//!
//! let peer_id = peer::Id(*b"-qB00000000000000001");
//!
//! assert_eq!(peer_id.to_string(), "2d71423030303030303030303030303030303031");
//! ```
use std::panic::Location;

use thiserror::Error;

pub const PEER_ID_BYTES_LEN: usize = 20;

/// Peer ID. A 20-byte array chosen by the client.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord, Default)]
pub struct Id(pub [u8; PEER_ID_BYTES_LEN]);

impl Id {
    #[must_use]
    pub fn bytes(&self) -> [u8; PEER_ID_BYTES_LEN] {
        self.0
    }
}

impl From<[u8; PEER_ID_BYTES_LEN]> for Id {
    fn from(bytes: [u8; PEER_ID_BYTES_LEN]) -> Self {
        Id(bytes)
    }
}

/// Builds a peer ID whose last four bytes are the big-endian number.
///
/// Used for fixtures: `peer::Id::from(1)` and `peer::Id::from(2)` are distinct
/// peers.
impl From<i32> for Id {
    fn from(number: i32) -> Self {
        let mut bytes = [0u8; PEER_ID_BYTES_LEN];
        bytes[PEER_ID_BYTES_LEN - 4..].copy_from_slice(&number.to_be_bytes());
        Id(bytes)
    }
}

#[derive(Error, Debug)]
pub enum IdConversionError {
    #[error("not enough bytes for peer id: {message} {location}")]
    NotEnoughBytes {
        location: &'static Location<'static>,
        message: String,
    },
    #[error("too many bytes for peer id: {message} {location}")]
    TooManyBytes {
        location: &'static Location<'static>,
        message: String,
    },
}

impl TryFrom<Vec<u8>> for Id {
    type Error = IdConversionError;

    #[track_caller]
    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let bytes: [u8; PEER_ID_BYTES_LEN] = match bytes.len().cmp(&PEER_ID_BYTES_LEN) {
            std::cmp::Ordering::Less => {
                return Err(IdConversionError::NotEnoughBytes {
                    location: Location::caller(),
                    message: format! {"got {} bytes, expected {}", bytes.len(), PEER_ID_BYTES_LEN},
                })
            }
            std::cmp::Ordering::Greater => {
                return Err(IdConversionError::TooManyBytes {
                    location: Location::caller(),
                    message: format! {"got {} bytes, expected {}", bytes.len(), PEER_ID_BYTES_LEN},
                })
            }
            std::cmp::Ordering::Equal => {
                let mut array = [0u8; PEER_ID_BYTES_LEN];
                array.copy_from_slice(&bytes);
                array
            }
        };

        Ok(Id(bytes))
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut chars = [0u8; 2 * PEER_ID_BYTES_LEN];
        let hex = binascii::bin2hex(&self.0, &mut chars).map_err(|_| std::fmt::Error)?;
        let hex = std::str::from_utf8(hex).map_err(|_| std::fmt::Error)?;
        write!(f, "{hex}")
    }
}
