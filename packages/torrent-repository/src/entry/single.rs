use torrust_scrape_tracker_primitives::peer;
use torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata;

use super::{Entry, PeerRole};
use crate::EntrySingle;

impl Entry for EntrySingle {
    #[allow(clippy::cast_possible_truncation)]
    fn get_swarm_metadata(&self) -> SwarmMetadata {
        SwarmMetadata {
            complete: self.seeders.len() as u32,
            downloaded: self.downloaded,
            incomplete: self.leechers.len() as u32,
        }
    }

    fn is_peerless(&self) -> bool {
        self.seeders.is_empty() && self.leechers.is_empty()
    }

    fn get_peers_len(&self) -> usize {
        self.seeders.len() + self.leechers.len()
    }

    fn upsert_peer(&mut self, peer_id: &peer::Id, role: PeerRole) -> bool {
        match role {
            PeerRole::Seeder => {
                let completed = self.leechers.remove(peer_id);
                self.seeders.insert(*peer_id);

                if completed {
                    self.downloaded = self.downloaded.saturating_add(1);
                }

                completed
            }
            PeerRole::Leecher => {
                self.seeders.remove(peer_id);
                self.leechers.insert(*peer_id);

                false
            }
        }
    }

    fn remove_peer(&mut self, peer_id: &peer::Id) -> bool {
        // A peer is never in both sets.
        self.seeders.remove(peer_id) | self.leechers.remove(peer_id)
    }
}
