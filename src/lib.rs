//! **Torrust Scrape Tracker** is a [`BitTorrent`](https://www.bittorrent.org/) tracker
//! endpoint that answers `scrape` requests over HTTP.
//!
//! A `scrape` request asks the tracker for the swarm statistics of one or more
//! torrents. The response is a [bencoded](https://www.bittorrent.org/beps/bep_0003.html#bencoding)
//! dictionary with, for each torrent the tracker knows about, the number of
//! seeders, leechers and completed downloads.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Running the tracker](#running-the-tracker)
//! - [Configuration](#configuration)
//! - [Usage](#usage)
//! - [Components](#components)
//!
//! # Features
//!
//! - HTTP `scrape` endpoint, [BEP 48](https://www.bittorrent.org/beps/bep_0048.html).
//! - Public and private modes. In private mode a key goes in the URL path.
//! - Streaming bencode encoder.
//! - In-memory torrent repository with a periodic cleanup of peerless torrents.
//! - Health check endpoint.
//!
//! # Running the tracker
//!
//! ```text
//! git clone https://github.com/torrust/torrust-scrape-tracker.git \
//!   && cd torrust-scrape-tracker \
//!   && cargo build --release
//! ./target/release/torrust-scrape-tracker
//! ```
//!
//! By default the tracker loads `./share/default/config/tracker.development.toml`
//! and listens on `0.0.0.0:7070`.
//!
//! # Configuration
//!
//! The configuration can be provided with a TOML file, with the
//! `TORRUST_SCRAPE_TRACKER_CONFIG_TOML` env var or with single overrides:
//!
//! ```text
//! TORRUST_SCRAPE_TRACKER_CONFIG_OVERRIDE_CORE__PRIVATE=true ./target/release/torrust-scrape-tracker
//! ```
//!
//! Refer to the [configuration crate documentation](https://docs.rs/torrust-scrape-tracker-configuration)
//! for all the options.
//!
//! # Usage
//!
//! ```text
//! curl -s "http://127.0.0.1:7070/scrape?info_hash=%3B%24U%04%CF%5F%11%BB%DB%E1%20%1C%EAjk%F4Z%EE%1B%C0"
//! ```
//!
//! In private mode:
//!
//! ```text
//! curl -s "http://127.0.0.1:7070/scrape/YZSl4lMZupRuOpSRC3krIKR5BPB14nrJ?info_hash=%3B%24U%04%CF%5F%11%BB%DB%E1%20%1C%EAjk%F4Z%EE%1B%C0"
//! ```
//!
//! # Components
//!
//! - [`core`]: the domain tracker. It keeps the keys and reads the torrent repository.
//! - [`servers`]: the HTTP server, its handlers and the bencoded responses.
//! - [`bootstrap`]: configuration, logging and jobs setup.
//! - [`app`]: it starts the jobs.
//!
//! The bencode encoder lives in its own crate, `contrib/bencode`.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
