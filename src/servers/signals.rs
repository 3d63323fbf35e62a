//! This module contains functions to handle signals.
use std::time::Duration;

use derive_more::Display;
use tokio::time::sleep;
use tracing::info;

/// This is the message that the "launcher" spawned task receives from the main
/// application process to notify the service to shutdown.
#[derive(Copy, Clone, Debug, Display)]
pub enum Halted {
    Normal,
}

/// Resolves on `ctrl_c` or the `terminate` signal.
///
/// # Panics
///
/// Will panic if the `ctrl_c` or `terminate` signal resolves with an error.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Resolves when the `rx_halt` or the `global_shutdown_signal()` resolves.
///
/// A dropped halt sender is handled as a halt request.
pub async fn shutdown_signal(rx_halt: tokio::sync::oneshot::Receiver<Halted>) {
    let halt = async {
        match rx_halt.await {
            Ok(signal) => signal,
            Err(_) => Halted::Normal,
        }
    };

    tokio::select! {
        signal = halt => { info!("Halt signal processed: {}", signal) },
        () = global_shutdown_signal() => { info!("Global shutdown signal processed") }
    }
}

/// Same as `shutdown_signal()`, but shows a message when it resolves.
pub async fn shutdown_signal_with_message(rx_halt: tokio::sync::oneshot::Receiver<Halted>, message: String) {
    shutdown_signal(rx_halt).await;

    info!("{message}");
}

/// Waits for the halt signal and then asks the `axum_server` to stop
/// accepting connections. Open connections get 90 seconds to finish.
pub async fn graceful_shutdown(handle: axum_server::Handle, rx_halt: tokio::sync::oneshot::Receiver<Halted>, message: String) {
    shutdown_signal_with_message(rx_halt, message).await;

    info!("Sending graceful shutdown signal");
    handle.graceful_shutdown(Some(Duration::from_secs(90)));

    while handle.connection_count() > 0 {
        sleep(Duration::from_secs(1)).await;

        info!("remaining alive connections: {}", handle.connection_count());
    }
}
