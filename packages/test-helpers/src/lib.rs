//! Testing helpers for [Torrust Scrape Tracker](https://docs.rs/torrust-scrape-tracker).
//!
//! A collection of functions and types that are used in tests.
pub mod configuration;
pub mod random;
