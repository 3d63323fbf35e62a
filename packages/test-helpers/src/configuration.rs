//! Tracker configuration factories for testing.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use torrust_scrape_tracker_configuration::{Configuration, Threshold};

use crate::random;

/// This configuration is used for testing. The HTTP tracker binds to a port
/// chosen by the OS so that tests running at the same time do not collide.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for HTTP tracker
    let http_port = 0u16;
    config.http_tracker.enabled = true;
    config.http_tracker.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), http_port);

    config
}

/// Ephemeral configuration for a tracker that does not require keys.
#[must_use]
pub fn ephemeral_public() -> Configuration {
    let mut cfg = ephemeral();

    cfg.core.private = false;

    cfg
}

/// Ephemeral configuration for a tracker that requires a key. One random
/// key is registered.
#[must_use]
pub fn ephemeral_private() -> Configuration {
    let mut cfg = ephemeral();

    cfg.core.private = true;
    cfg.core.auth_keys = vec![random::string(32)];

    cfg
}

/// Ephemeral configuration with the HTTP tracker and the torrent cleanup
/// job disabled.
#[must_use]
pub fn ephemeral_with_no_services() -> Configuration {
    let mut cfg = ephemeral();

    cfg.http_tracker.enabled = false;
    cfg.core.peerless_torrents_cleanup_interval = 0;

    cfg
}
