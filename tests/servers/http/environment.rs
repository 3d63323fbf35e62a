use std::sync::Arc;

use torrust_scrape_tracker::bootstrap::app::initialize_with_configuration;
use torrust_scrape_tracker::core::Tracker;
use torrust_scrape_tracker::servers::http::server::{HttpServer, Launcher, Running, Stopped};
use torrust_scrape_tracker_configuration::{Configuration, HttpTracker};
use torrust_scrape_tracker_primitives::info_hash::InfoHash;
use torrust_scrape_tracker_primitives::peer;
use torrust_scrape_tracker_torrent_repository::entry::PeerRole;

pub struct Environment<S> {
    pub config: Arc<HttpTracker>,
    pub tracker: Arc<Tracker>,
    pub server: HttpServer<S>,
}

impl<S> Environment<S> {
    /// Add a peer to a torrent swarm in the tracker.
    pub fn add_torrent_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id, role: PeerRole) {
        self.tracker
            .upsert_peer(info_hash, peer_id, role)
            .expect("it should add the peer to the torrent repository");
    }
}

impl Environment<Stopped> {
    #[allow(dead_code)]
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let tracker = initialize_with_configuration(configuration);

        let config = Arc::new(configuration.http_tracker.clone());

        let server = HttpServer::new(Launcher::new(config.bind_address));

        Self { config, tracker, server }
    }

    #[allow(dead_code)]
    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            tracker: self.tracker.clone(),
            server: self.server.start(self.tracker).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            tracker: self.tracker,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn bind_address(&self) -> &std::net::SocketAddr {
        &self.server.state.binding
    }
}
