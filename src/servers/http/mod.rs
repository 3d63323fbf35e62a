//! HTTP Tracker.
//!
//! This module contains the HTTP tracker implementation.
//!
//! The HTTP tracker is a simple HTTP server that responds to the `scrape`
//! `GET` request and to a health check.
//!
//! ## Table of Contents
//!
//! - [Requests](#requests)
//!     - [Scrape](#scrape)
//!     - [Health check](#health-check)
//! - [Authentication](#authentication)
//! - [Errors](#errors)
//! - [Versioning](#versioning)
//! - [Links](#links)
//!
//! ## Requests
//!
//! ### Scrape
//!
//! The `scrape` request allows a peer to get [swarm metadata](torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata)
//! for multiple torrents at the same time.
//!
//! The response contains the [swarm metadata](torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata)
//! for each tracked torrent:
//!
//! - `complete`: the number of active peers that have completed downloading,
//!   also known as seeders.
//! - `downloaded`: the number of peers that have ever completed downloading,
//!   also known as snatches.
//! - `incomplete`: the number of active peers that have not completed
//!   downloading, also known as leechers.
//!
//! **Query parameters**
//!
//! Parameter | Type | Description | Required | Default | Example
//! ---|---|---|---|---|---
//! [`info_hash`](crate::servers::http::v1::requests::scrape::Scrape::info_hashes) | percent encoded of 20-byte array | The `Info Hash` of the torrent. | No | No | `%81%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00`
//!
//! > **NOTICE**: you can scrape multiple torrents at the same time by passing
//! > multiple `info_hash` parameters. Repeated values are not deduplicated:
//! > the torrent is looked up once per parameter.
//!
//! > **NOTICE**: a request without any `info_hash` is valid. The response is
//! > the empty envelope `d5:filesdee`.
//!
//! **Sample scrape URL**
//!
//! A sample `scrape` request for only one torrent:
//!
//! <http://0.0.0.0:7070/scrape?info_hash=%81%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00>
//!
//! In order to scrape multiple torrents at the same time you can pass multiple
//! `info_hash` parameters: `info_hash=%81%00%0...00%00%00&info_hash=%82%00%0...00%00%00`
//!
//! **Sample response**
//!
//! The `scrape` response is a [bencoded](https://en.wikipedia.org/wiki/Bencode)
//! byte array like the following:
//!
//! ```text
//! d5:filesd20:xxxxxxxxxxxxxxxxxxxxd8:completei11e10:downloadedi13772e10:incompletei19eeee
//! ```
//!
//! Where `xxxxxxxxxxxxxxxxxxxx` is the 20-byte infohash. Keys of the
//! per-torrent dictionary are always written in the order `complete`,
//! `downloaded`, `incomplete`. Torrents that are not tracked are omitted.
//!
//! The body is sent with `Content-Type: text/plain` and the connection is
//! closed after the response.
//!
//! ### Health check
//!
//! `GET /health_check` returns the JSON `{"status":"Ok"}`.
//!
//! ## Authentication
//!
//! When the tracker runs in `private` mode the scrape URL must contain a
//! registered authentication key as its last path segment:
//!
//! <http://0.0.0.0:7070/scrape/YZSl4lMZupRuOpSRC3krIKR5BPB14nrJ?info_hash=%81%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00>
//!
//! In `public` mode the key is optional and ignored when present. A key that
//! is not 32 alphanumeric characters is rejected in both modes.
//!
//! ## Errors
//!
//! A missing or unknown key and a query that can't be split into params are
//! answered with `200 OK` and a bencoded failure:
//!
//! ```text
//! d14:failure reason30:Authentication error: Missing authentication keye
//! ```
//!
//! An `info_hash` that does not decode to 20 bytes is not an error. It's
//! skipped like a torrent the tracker does not know.
//!
//! A failure of the torrent repository is answered with
//! `500 Internal Server Error` and an empty body.
//!
//! ## Versioning
//!
//! Right now there is only version `v1`. The HTTP tracker implements BEPS:
//!
//! - [BEP 03. The `BitTorrent` Protocol Specification](https://www.bittorrent.org/beps/bep_0003.html)
//! - [BEP 48. Tracker Protocol Extension: Scrape](https://www.bittorrent.org/beps/bep_0048.html)
//!
//! ## Links
//!
//! - [Bencode](https://en.wikipedia.org/wiki/Bencode).
//! - [Bencode to Json Online converter](https://chocobo1.github.io/bencode_online).
//! - [Vuze scrape docs](https://wiki.vuze.com/w/Scrape)
use serde::{Deserialize, Serialize};

pub mod percent_encoding;
pub mod server;
pub mod v1;

pub const HTTP_TRACKER_LOG_TARGET: &str = "HTTP TRACKER";

/// The version of the HTTP tracker.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Version {
    /// The `v1` version of the HTTP tracker.
    V1,
}
