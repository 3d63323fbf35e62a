//! `Scrape` request for the HTTP tracker.
//!
//! Data structures and logic for parsing the `scrape` request.
//!
//! An `info_hash` value that does not decode to 20 bytes names no torrent the
//! tracker could know about. It's skipped, like an untracked torrent, and the
//! rest of the request is still answered.
use torrust_scrape_tracker_primitives::info_hash::InfoHash;
use tracing::debug;

use crate::servers::http::percent_encoding::percent_decode_info_hash;
use crate::servers::http::v1::query::Query;
use crate::servers::http::HTTP_TRACKER_LOG_TARGET;

// Query param names
const INFO_HASH: &str = "info_hash";

/// The `Scrape` request. Fields use the domain types after parsing the
/// query params of the request.
///
/// ```rust
/// use torrust_scrape_tracker::servers::http::v1::query::Query;
/// use torrust_scrape_tracker::servers::http::v1::requests::scrape::Scrape;
///
/// let query = "info_hash=%3B%24U%04%CF%5F%11%BB%DB%E1%20%1C%EAjk%F4Z%EE%1B%C0&info_hash=SHORT".parse::<Query>().unwrap();
///
/// let scrape = Scrape::from(query);
///
/// assert_eq!(scrape.info_hashes.len(), 1);
/// assert_eq!(scrape.info_hashes[0].to_string(), "3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0");
/// ```
#[derive(Debug, PartialEq, Default)]
pub struct Scrape {
    /// The torrents to scrape, in query order. Repeated infohashes are kept.
    pub info_hashes: Vec<InfoHash>,
}

impl From<Query> for Scrape {
    fn from(query: Query) -> Self {
        Self {
            info_hashes: extract_info_hashes(&query),
        }
    }
}

fn extract_info_hashes(query: &Query) -> Vec<InfoHash> {
    let Some(raw_params) = query.get_param_vec(INFO_HASH) else {
        return vec![];
    };

    raw_params
        .iter()
        .filter_map(|raw_param| match percent_decode_info_hash(raw_param) {
            Ok(info_hash) => Some(info_hash),
            Err(err) => {
                debug!(target: HTTP_TRACKER_LOG_TARGET, param_value = %raw_param, %err, "skipping invalid info_hash param");
                None
            }
        })
        .collect()
}
