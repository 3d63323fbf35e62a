//! Axum [`extractor`](axum::extract) to extract the authentication [`Key`]
//! from the URL path.
//!
//! Given the URL route with a path param: `/scrape/:key`, it extracts the
//! `key` param from the URL path.
//!
//! It's a wrapper for Axum `Path` extractor in order to return custom
//! authentication errors.
//!
//! It returns a bencoded [`Error`](crate::servers::http::v1::responses::error)
//! response if the `key` parameter is missing or is not a well-formed key.
//! The rejection happens before the handler runs, so a malformed key is
//! refused even when the tracker is public.
//!
//! **Sample authentication error responses**
//!
//! When the key param has an **invalid format**:
//!
//! ```text
//! d14:failure reason134:Authentication error: Invalid format for authentication key param. Error in src/servers/http/v1/extractors/authentication_key.rs:97:23e
//! ```
//!
//! When the key is well-formed but **not registered** (the verdict comes from
//! the tracker, not from this extractor):
//!
//! ```text
//! d14:failure reason101:Authentication error: Failed to read key: YZSl4lMZupRuOpSRC3krIKR5BPB14nrJ, src/core/mod.rs:139:27e
//! ```
//!
//! > **NOTICE**: the returned HTTP status code is always `200` for authentication errors.
//! > Neither [The `BitTorrent` Protocol Specification](https://www.bittorrent.org/beps/bep_0003.html)
//! > nor [The Private Torrents](https://www.bittorrent.org/beps/bep_0027.html)
//! > specifications specify any HTTP status code for authentication errors.
use std::panic::Location;

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Deserialize;

use crate::core::auth::Key;
use crate::servers::http::v1::handlers::common::auth;
use crate::servers::http::v1::responses;

/// Extractor for the [`Key`] struct.
pub struct Extract(pub Key);

#[derive(Deserialize)]
pub struct KeyParam(String);

impl KeyParam {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Extract
where
    S: Send + Sync,
{
    type Rejection = Response;

    #[must_use]
    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 S,
    ) -> BoxFuture<'async_trait, Result<Self, Self::Rejection>>
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        async move {
            let maybe_path_with_key = Path::<KeyParam>::from_request_parts(parts, state).await;

            match extract_key(maybe_path_with_key) {
                Ok(key) => Ok(Extract(key)),
                Err(error) => Err(error.into_response()),
            }
        }
        .boxed()
    }
}

fn extract_key(path_extractor_result: Result<Path<KeyParam>, PathRejection>) -> Result<Key, responses::error::Error> {
    match path_extractor_result {
        Ok(key_param) => parse_key(key_param.0.value()),
        Err(path_rejection) => Err(custom_error(&path_rejection)),
    }
}

fn parse_key(key: &str) -> Result<Key, responses::error::Error> {
    key.parse::<Key>().map_err(|_parse_key_error| {
        responses::error::Error::from(auth::Error::InvalidKeyFormat {
            location: Location::caller(),
        })
    })
}

fn custom_error(rejection: &PathRejection) -> responses::error::Error {
    match rejection {
        PathRejection::FailedToDeserializePathParams(_) => responses::error::Error::from(auth::Error::InvalidKeyFormat {
            location: Location::caller(),
        }),
        PathRejection::MissingPathParams(_) => responses::error::Error::from(auth::Error::MissingAuthKey {
            location: Location::caller(),
        }),
        _ => responses::error::Error::from(auth::Error::CannotExtractKeyParam {
            location: Location::caller(),
        }),
    }
}
