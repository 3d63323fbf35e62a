//! Axum [`handlers`](axum#handlers) for the `scrape` requests.
//!
//! Refer to [HTTP server](crate::servers::http) for more information about the
//! `scrape` request.
//!
//! The handlers authenticate the client, parse the query and stream the
//! response into a per-request buffer. The steps run in that order: a
//! rejected key is reported even when the query is also invalid.
//!
//! The whole body is buffered before it is sent. A scrape with many
//! infohashes holds its response in memory until the last entry is
//! written, but a repository failure in the middle of the request can
//! still be answered with a `500` and an empty body instead of a truncated
//! bencoded dictionary.
use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};

use crate::core::auth::Key;
use crate::core::Tracker;
use crate::servers::http::v1::extractors::authentication_key::Extract as ExtractKey;
use crate::servers::http::v1::handlers::common::auth;
use crate::servers::http::v1::query::Query;
use crate::servers::http::v1::requests::scrape::Scrape;
use crate::servers::http::v1::{responses, services};
use crate::servers::http::HTTP_TRACKER_LOG_TARGET;

/// It handles the `scrape` request without an authentication key in the
/// path. It fails when the tracker is `private`.
#[allow(clippy::unused_async)]
pub async fn handle_without_key(State(tracker): State<Arc<Tracker>>, RawQuery(raw_query): RawQuery) -> Response {
    debug!(target: HTTP_TRACKER_LOG_TARGET, "http scrape request: {raw_query:?}");

    handle(&tracker, None, raw_query.as_deref()).await
}

/// It handles the `scrape` request with an authentication key in the path.
///
/// The key is only checked when the tracker is `private`.
#[allow(clippy::unused_async)]
pub async fn handle_with_key(
    State(tracker): State<Arc<Tracker>>,
    ExtractKey(key): ExtractKey,
    RawQuery(raw_query): RawQuery,
) -> Response {
    debug!(target: HTTP_TRACKER_LOG_TARGET, "http scrape request: {raw_query:?}");

    handle(&tracker, Some(key), raw_query.as_deref()).await
}

async fn handle(tracker: &Arc<Tracker>, maybe_key: Option<Key>, raw_query: Option<&str>) -> Response {
    if let Err(error) = authenticate(tracker, maybe_key).await {
        return error.into_response();
    }

    let scrape_request = match extract_scrape_from(raw_query) {
        Ok(scrape_request) => scrape_request,
        Err(error) => return error.into_response(),
    };

    let mut body = Vec::new();

    match services::scrape::invoke(tracker, &scrape_request.info_hashes, &mut body) {
        Ok(()) => responses::scrape::Bencoded::from(body).into_response(),
        Err(err) => {
            error!(target: HTTP_TRACKER_LOG_TARGET, %err, "scrape request aborted");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn authenticate(tracker: &Tracker, maybe_key: Option<Key>) -> Result<(), responses::error::Error> {
    if !tracker.requires_authentication() {
        return Ok(());
    }

    match maybe_key {
        Some(key) => tracker.authenticate(&key).await.map_err(responses::error::Error::from),
        None => Err(responses::error::Error::from(auth::Error::MissingAuthKey {
            location: std::panic::Location::caller(),
        })),
    }
}

/// A request without a query string is a scrape of nothing. Only a query
/// that can't be split into params fails: invalid infohashes are skipped.
fn extract_scrape_from(maybe_raw_query: Option<&str>) -> Result<Scrape, responses::error::Error> {
    let Some(raw_query) = maybe_raw_query else {
        return Ok(Scrape::default());
    };

    let query = raw_query.parse::<Query>().map_err(responses::error::Error::from)?;

    Ok(Scrape::from(query))
}
