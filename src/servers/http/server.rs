//! Module to handle the HTTP server instances.
use std::net::SocketAddr;
use std::panic::Location;
use std::sync::Arc;

use axum_server::Handle;
use derive_more::Constructor;
use futures::future::BoxFuture;
use thiserror::Error;
use tokio::sync::oneshot::{Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::v1::routes::router;
use super::HTTP_TRACKER_LOG_TARGET;
use crate::bootstrap::jobs::Started;
use crate::core::Tracker;
use crate::servers::logging::STARTED_ON;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Error that can occur when starting or stopping the HTTP server.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to bind to socket: {addr}, {source}, {location}")]
    UnableToBindToSocket {
        location: &'static Location<'static>,
        addr: SocketAddr,
        source: Arc<std::io::Error>,
    },

    #[error("Unable to get the local address of the listener: {source}, {location}")]
    UnableToGetLocalAddress {
        location: &'static Location<'static>,
        source: Arc<std::io::Error>,
    },

    #[error("The server did not report its bound address: {location}")]
    NotStarted { location: &'static Location<'static> },

    #[error("Unable to send the halt signal, the server is already stopped: {location}")]
    UnableToSendHaltSignal { location: &'static Location<'static> },

    #[error("The server task failed: {source}, {location}")]
    TaskFailed {
        location: &'static Location<'static>,
        source: Arc<tokio::task::JoinError>,
    },
}

/// A HTTP server launcher.
///
/// It binds the socket, spawns the shutdown watcher and returns the future
/// that serves the requests.
#[derive(Constructor, Debug)]
pub struct Launcher {
    pub bind_to: SocketAddr,
}

impl Launcher {
    /// It binds the listener and returns the server future.
    ///
    /// The bound address is sent through `tx_start` before returning, so
    /// a `bind_to` with port `0` reports the port chosen by the OS.
    ///
    /// # Errors
    ///
    /// Will return an error if the socket can't be bound.
    #[track_caller]
    fn start(&self, tracker: Arc<Tracker>, tx_start: Sender<Started>, rx_halt: Receiver<Halted>) -> Result<BoxFuture<'static, ()>, Error> {
        let socket = std::net::TcpListener::bind(self.bind_to).map_err(|e| Error::UnableToBindToSocket {
            location: Location::caller(),
            addr: self.bind_to,
            source: Arc::new(e),
        })?;

        socket.set_nonblocking(true).map_err(|e| Error::UnableToBindToSocket {
            location: Location::caller(),
            addr: self.bind_to,
            source: Arc::new(e),
        })?;

        let address = socket.local_addr().map_err(|e| Error::UnableToGetLocalAddress {
            location: Location::caller(),
            source: Arc::new(e),
        })?;

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down HTTP server on socket address: {address}"),
        ));

        let app = router(tracker, address);

        let running = Box::pin(async move {
            if let Err(err) = axum_server::from_tcp(socket)
                .handle(handle)
                .serve(app.into_make_service_with_connect_info::<SocketAddr>())
                .await
            {
                error!(target: HTTP_TRACKER_LOG_TARGET, %address, %err, "Axum server crashed");
            }
        });

        info!(target: HTTP_TRACKER_LOG_TARGET, "{STARTED_ON}: http://{address}");

        if tx_start.send(Started { address }).is_err() {
            error!(target: HTTP_TRACKER_LOG_TARGET, %address, "Nobody is waiting for the server to start");
        }

        Ok(running)
    }
}

/// A HTTP server instance controller with no HTTP instance running.
#[allow(clippy::module_name_repetitions)]
pub type StoppedHttpServer = HttpServer<Stopped>;

/// A HTTP server instance controller with a running HTTP instance.
#[allow(clippy::module_name_repetitions)]
pub type RunningHttpServer = HttpServer<Running>;

/// A HTTP server controller.
///
/// It's responsible for:
///
/// - Keeping the launcher of the server.
/// - Starting and stopping the server.
/// - Keeping the state of the server: `running` or `stopped`.
///
/// It's a state machine. The server can be started and stopped many times
/// always with the same launcher.
#[allow(clippy::module_name_repetitions)]
pub struct HttpServer<S> {
    /// The state of the server: `running` or `stopped`.
    pub state: S,
}

/// A stopped HTTP server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running HTTP server state.
pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: tokio::sync::oneshot::Sender<Halted>,
    pub task: JoinHandle<Launcher>,
}

impl HttpServer<Stopped> {
    /// It creates a new `HttpServer` controller in `stopped` state.
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns a `HttpServer` controller in `running`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the socket can't be bound or no
    /// `SocketAddr` is returned after launching the server.
    pub async fn start(self, tracker: Arc<Tracker>) -> Result<HttpServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let server = launcher.start(tracker, tx_start, rx_halt)?;

        let task = tokio::spawn(async move {
            server.await;

            launcher
        });

        let binding = rx_start
            .await
            .map_err(|_| Error::NotStarted {
                location: Location::caller(),
            })?
            .address;

        Ok(HttpServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl HttpServer<Running> {
    /// It stops the server and returns a `HttpServer` controller in `stopped`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the halt signal was closed
    /// or the server task failed.
    pub async fn stop(self) -> Result<HttpServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::UnableToSendHaltSignal {
                location: Location::caller(),
            })?;

        let launcher = self.state.task.await.map_err(|e| Error::TaskFailed {
            location: Location::caller(),
            source: Arc::new(e),
        })?;

        Ok(HttpServer {
            state: Stopped { launcher },
        })
    }
}
