//! The torrent identifier.
//!
//! An infohash is the SHA-1 digest of the `info` dictionary of a torrent
//! file. For the tracker it's only an opaque 20-byte key: it's never
//! interpreted as text.
use std::panic::Location;

use thiserror::Error;

pub const INFO_HASH_BYTES_LEN: usize = 20;

/// `BitTorrent` Info Hash v1
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug, PartialOrd, Ord)]
pub struct InfoHash(pub [u8; INFO_HASH_BYTES_LEN]);

impl InfoHash {
    /// Returns the `InfoHash` internal byte array.
    #[must_use]
    pub fn bytes(&self) -> [u8; INFO_HASH_BYTES_LEN] {
        self.0
    }

    /// Returns the `InfoHash` as a hex string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for InfoHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut chars = [0u8; 2 * INFO_HASH_BYTES_LEN];
        let hex = binascii::bin2hex(&self.0, &mut chars).map_err(|_| std::fmt::Error)?;
        let hex = std::str::from_utf8(hex).map_err(|_| std::fmt::Error)?;
        write!(f, "{hex}")
    }
}

impl std::str::FromStr for InfoHash {
    type Err = binascii::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut i = Self([0u8; INFO_HASH_BYTES_LEN]);
        if s.len() != 2 * INFO_HASH_BYTES_LEN {
            return Err(binascii::ConvertError::InvalidInputLength);
        }
        binascii::hex2bin(s.as_bytes(), &mut i.0)?;
        Ok(i)
    }
}

impl From<[u8; INFO_HASH_BYTES_LEN]> for InfoHash {
    fn from(val: [u8; INFO_HASH_BYTES_LEN]) -> Self {
        InfoHash(val)
    }
}

/// Errors that can occur when converting from a `Vec<u8>` to an `InfoHash`.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Not enough bytes for infohash. An infohash is 20 bytes.
    #[error("not enough bytes for infohash: {message} {location}")]
    NotEnoughBytes {
        location: &'static Location<'static>,
        message: String,
    },
    /// Too many bytes for infohash. An infohash is 20 bytes.
    #[error("too many bytes for infohash: {message} {location}")]
    TooManyBytes {
        location: &'static Location<'static>,
        message: String,
    },
}

impl TryFrom<Vec<u8>> for InfoHash {
    type Error = ConversionError;

    #[track_caller]
    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.len() < INFO_HASH_BYTES_LEN {
            return Err(ConversionError::NotEnoughBytes {
                location: Location::caller(),
                message: format! {"got {} bytes, expected {}", bytes.len(), INFO_HASH_BYTES_LEN},
            });
        }
        if bytes.len() > INFO_HASH_BYTES_LEN {
            return Err(ConversionError::TooManyBytes {
                location: Location::caller(),
                message: format! {"got {} bytes, expected {}", bytes.len(), INFO_HASH_BYTES_LEN},
            });
        }

        let mut info_hash = Self::default();
        info_hash.0.copy_from_slice(&bytes);
        Ok(info_hash)
    }
}

impl serde::ser::Serialize for InfoHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::de::Deserialize<'de> for InfoHash {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        des.deserialize_str(InfoHashVisitor)
    }
}

struct InfoHashVisitor;

impl<'v> serde::de::Visitor<'v> for InfoHashVisitor {
    type Value = InfoHash;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "a 40 character long hash")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<InfoHash>().map_err(|_| {
            serde::de::Error::invalid_value(serde::de::Unexpected::Str(v), &"a 40 character long hexadecimal string")
        })
    }
}
