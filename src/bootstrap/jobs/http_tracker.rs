//! HTTP tracker job starter.
//!
//! The function [`http_tracker::start_job`](crate::bootstrap::jobs::http_tracker::start_job) starts a new HTTP tracker server.
//!
//! Refer to the [configuration documentation](https://docs.rs/torrust-scrape-tracker-configuration) for the configuration options.
//!
//! The job starts the server through its [`HttpServer`] controller, which
//! waits until the socket is bound, and then spawns a task that lives as
//! long as the server does.
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;
use torrust_scrape_tracker_configuration::HttpTracker;
use tracing::info;

use crate::core;
use crate::servers::http::server::{HttpServer, Launcher};
use crate::servers::http::Version;

/// It starts a new HTTP server with the provided configuration and version.
///
/// Right now there is only one version but in the future we could support more than one HTTP tracker version at the same time.
/// This feature allows supporting breaking changes on `BitTorrent` BEPs.
///
/// # Panics
///
/// It would panic if the server can't be started, for example when the bind
/// address is already in use.
pub async fn start_job(config: &HttpTracker, tracker: Arc<core::Tracker>, version: Version) -> Option<JoinHandle<()>> {
    if config.enabled {
        match version {
            Version::V1 => Some(start_v1(config.bind_address, tracker).await),
        }
    } else {
        info!("Note: Not loading Http Tracker Service, Not Enabled in Configuration.");
        None
    }
}

async fn start_v1(socket: SocketAddr, tracker: Arc<core::Tracker>) -> JoinHandle<()> {
    let server = HttpServer::new(Launcher::new(socket))
        .start(tracker)
        .await
        .expect("it should be able to start to the http tracker");

    tokio::spawn(async move {
        assert!(
            !server.state.halt_task.is_closed(),
            "Halt channel for HTTP tracker should be open"
        );
        server
            .state
            .task
            .await
            .expect("it should be able to join to the http tracker task");
    })
}
