//! `Scrape` response for the HTTP tracker [`scrape`](crate::servers::http::v1::requests::scrape::Scrape) request.
//!
//! The response is streamed into a sink field by field:
//!
//! ```text
//! d 5:files d
//!   20:<infohash> d 8:complete i<n>e 10:downloaded i<n>e 10:incomplete i<n>e e
//!   ...
//! e e
//! ```
//!
//! [`start`] writes the envelope header, [`add_file`] one torrent, and
//! [`finish`] closes both dictionaries.
//!
//! ```rust
//! use torrust_scrape_tracker::servers::http::v1::responses::scrape;
//! use torrust_scrape_tracker_primitives::info_hash::InfoHash;
//! use torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata;
//!
//! let mut body = Vec::new();
//!
//! scrape::start(&mut body).unwrap();
//! scrape::add_file(&mut body, &InfoHash([0x69; 20]), &SwarmMetadata::new(1, 2, 3)).unwrap();
//! scrape::finish(&mut body).unwrap();
//!
//! // cspell:disable-next-line
//! let expected_bytes = b"d5:filesd20:iiiiiiiiiiiiiiiiiiiid8:completei1e10:downloadedi2e10:incompletei3eeee";
//!
//! assert_eq!(&body[..], &expected_bytes[..]);
//! ```
use std::io::{self, Write};

use axum::http::header::{CONNECTION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bencode::{ben_int, ben_map};
use torrust_scrape_tracker_primitives::info_hash::InfoHash;
use torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata;

const DICT_START: &[u8] = b"d";
const FILES: &[u8] = b"files";
const ENVELOPE_END: &[u8] = b"ee";

/// It writes the beginning of the envelope: the outer dictionary, the
/// `files` key and the opening of the `files` dictionary.
///
/// # Errors
///
/// Will return an error if the sink can't be written.
pub fn start<W>(sink: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    sink.write_all(DICT_START)?;
    bencode::encode_bytes(sink, FILES)?;
    sink.write_all(DICT_START)
}

/// It writes one entry of the `files` dictionary: the raw infohash bytes as
/// the key and the swarm statistics as the value.
///
/// # Errors
///
/// Will return an error if the sink can't be written.
pub fn add_file<W>(sink: &mut W, info_hash: &InfoHash, swarm_metadata: &SwarmMetadata) -> io::Result<()>
where
    W: Write + ?Sized,
{
    bencode::encode_bytes(sink, &info_hash.bytes())?;
    bencode::encode(
        sink,
        &ben_map! {
            "complete" => ben_int!(swarm_metadata.complete),
            "downloaded" => ben_int!(swarm_metadata.downloaded),
            "incomplete" => ben_int!(swarm_metadata.incomplete)
        },
    )
}

/// It closes the `files` dictionary and the envelope, and flushes the sink.
///
/// # Errors
///
/// Will return an error if the sink can't be written or flushed.
pub fn finish<W>(sink: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    sink.write_all(ENVELOPE_END)?;
    sink.flush()
}

/// A complete bencoded `scrape` response body, ready to be sent.
///
/// It's sent as `text/plain` and asks the client to close the connection.
#[derive(Debug, PartialEq, Default)]
pub struct Bencoded {
    body: Vec<u8>,
}

impl Bencoded {
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl From<Vec<u8>> for Bencoded {
    fn from(body: Vec<u8>) -> Self {
        Self { body }
    }
}

impl IntoResponse for Bencoded {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(CONTENT_TYPE, "text/plain"), (CONNECTION, "close")],
            self.body,
        )
            .into_response()
    }
}
