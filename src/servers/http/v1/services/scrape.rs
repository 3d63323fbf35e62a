//! The `scrape` service.
//!
//! The service is responsible for handling the `scrape` requests once the
//! client has been authenticated and the request parsed.
//!
//! It looks up every requested torrent in the [`Tracker`] and streams the
//! bencoded response into a sink. Torrents that are not tracked are left out
//! of the response. A failure of the torrent repository aborts the whole
//! request: the caller must discard whatever was written to the sink.
use std::io::{self, Write};

use thiserror::Error;
use torrust_scrape_tracker_primitives::info_hash::InfoHash;
use torrust_scrape_tracker_torrent_repository::repository;
use tracing::debug;

use crate::core::Tracker;
use crate::servers::http::v1::responses::scrape;

/// Errors that abort a `scrape` request.
#[derive(Error, Debug)]
pub enum Error {
    #[error("the torrent repository failed: {0}")]
    Repository(#[from] repository::Error),

    #[error("cannot write the scrape response: {0}")]
    Write(#[from] io::Error),
}

/// The HTTP tracker `scrape` service.
///
/// It writes one entry per requested infohash found in the tracker, in
/// request order. Repeated infohashes are looked up and written again.
///
/// # Errors
///
/// Will return an error if the torrent repository fails or the sink can't be
/// written.
pub fn invoke<W>(tracker: &Tracker, info_hashes: &[InfoHash], sink: &mut W) -> Result<(), Error>
where
    W: Write + ?Sized,
{
    scrape::start(sink)?;

    for info_hash in info_hashes {
        match tracker.find_swarm_metadata(info_hash)? {
            Some(swarm_metadata) => scrape::add_file(sink, info_hash, &swarm_metadata)?,
            None => debug!("scrape: torrent not tracked: {info_hash}"),
        }
    }

    scrape::finish(sink)?;

    Ok(())
}
