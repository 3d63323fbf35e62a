//! Tracker authentication services and structs.
//!
//! When the tracker runs in `private` mode, clients need a key to scrape it.
//! The key goes in the request path:
//!
//! ```text
//! http://127.0.0.1:7070/scrape/YZSl4lMZupRuOpSRC3krIKR5BPB14nrJ?info_hash=...
//! ```
//!
//! A [`Key`] is a 32-char alphanumeric string. The tracker keeps the set of
//! accepted keys in memory. They are loaded from the configuration at start
//! and can be added or removed at runtime.
//!
//! ```rust
//! use torrust_scrape_tracker::core::auth::Key;
//!
//! let key = "YZSl4lMZupRuOpSRC3krIKR5BPB14nrJ".parse::<Key>().unwrap();
//!
//! assert_eq!(key.to_string(), "YZSl4lMZupRuOpSRC3krIKR5BPB14nrJ");
//! ```
use std::panic::Location;
use std::str::FromStr;

use derive_more::Display;
use rand::distributions::{Alphanumeric, DistString};
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Length of the authentication key.
pub const AUTH_KEY_LENGTH: usize = 32;

/// It generates a new random 32-char authentication [`Key`].
#[must_use]
pub fn generate() -> Key {
    let key = Key(Alphanumeric.sample_string(&mut thread_rng(), AUTH_KEY_LENGTH));

    debug!("Generated key: {key}");

    key
}

/// A randomly generated token used for authentication.
///
/// It contains lower and uppercase letters and numbers.
/// It's a 32-char string.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Display, Hash)]
pub struct Key(String);

/// Error returned when a key cannot be parsed from a string.
///
/// ```rust
/// use torrust_scrape_tracker::core::auth::Key;
///
/// assert!("invalid".parse::<Key>().is_err());
/// ```
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid authentication key `{key}`: a key has 32 alphanumeric characters")]
pub struct ParseKeyError {
    pub key: String,
}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != AUTH_KEY_LENGTH || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ParseKeyError { key: s.to_string() });
        }

        Ok(Self(s.to_string()))
    }
}

/// Verification error. The gate refused the key.
#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("Failed to read key: {key}, {location}")]
    UnknownKey {
        location: &'static Location<'static>,
        key: Box<Key>,
    },
}
