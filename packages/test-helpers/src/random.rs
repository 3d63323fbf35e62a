//! Random data generators for testing.
use rand::distributions::{Alphanumeric, DistString};
use rand::thread_rng;

/// Returns a random alphanumeric string of a certain size.
///
/// It is useful for generating random names, IDs or authentication keys.
#[must_use]
pub fn string(size: usize) -> String {
    Alphanumeric.sample_string(&mut thread_rng(), size)
}
