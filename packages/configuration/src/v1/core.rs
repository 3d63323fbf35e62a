use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Core {
    /// When `true` clients require a key to scrape the tracker. The key goes
    /// in the request path: `/scrape/{key}`.
    #[serde(default = "Core::default_private")]
    pub private: bool,

    /// Keys accepted in private mode. Each key is a 32 character long
    /// alphanumeric string.
    #[serde(default = "Core::default_auth_keys")]
    pub auth_keys: Vec<String>,

    /// Interval in seconds between two runs of the job that removes the
    /// torrents without seeders or leechers. `0` disables the job.
    #[serde(default = "Core::default_peerless_torrents_cleanup_interval")]
    pub peerless_torrents_cleanup_interval: u64,

    /// When `true` the cleanup job keeps a peerless torrent if it has
    /// completed downloads, so the `downloaded` counter survives.
    #[serde(default = "Core::default_persistent_torrent_completed_stat")]
    pub persistent_torrent_completed_stat: bool,

    /// Completed downloads recorded before the tracker started, keyed by the
    /// 40 character hex infohash. They are imported into the repository at
    /// startup.
    #[serde(default = "Core::default_persistent_torrents")]
    pub persistent_torrents: BTreeMap<String, u32>,
}

impl Default for Core {
    fn default() -> Self {
        Self {
            private: Self::default_private(),
            auth_keys: Self::default_auth_keys(),
            peerless_torrents_cleanup_interval: Self::default_peerless_torrents_cleanup_interval(),
            persistent_torrent_completed_stat: Self::default_persistent_torrent_completed_stat(),
            persistent_torrents: Self::default_persistent_torrents(),
        }
    }
}

impl Core {
    fn default_private() -> bool {
        false
    }

    fn default_auth_keys() -> Vec<String> {
        Vec::new()
    }

    fn default_peerless_torrents_cleanup_interval() -> u64 {
        600
    }

    fn default_persistent_torrent_completed_stat() -> bool {
        false
    }

    fn default_persistent_torrents() -> BTreeMap<String, u32> {
        BTreeMap::new()
    }
}
