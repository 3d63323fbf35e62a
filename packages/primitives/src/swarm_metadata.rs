use derive_more::Constructor;

/// Swarm statistics for one torrent.
///
/// This is the per-file dictionary of the scrape response. The field order
/// matches the order the keys are written on the wire.
///
/// See [BEP 48: Tracker Protocol Extension: Scrape](https://www.bittorrent.org/beps/bep_0048.html)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Constructor)]
pub struct SwarmMetadata {
    /// (i.e `seeders`): The number of active peers that have completed downloading
    pub complete: u32,
    /// (i.e `completed`): The number of peers that have ever completed downloading
    pub downloaded: u32,
    /// (i.e `leechers`): The number of active peers that have not completed downloading
    pub incomplete: u32,
}

impl SwarmMetadata {
    #[must_use]
    pub fn zeroed() -> Self {
        Self::default()
    }
}
