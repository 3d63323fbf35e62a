use std::collections::BTreeMap;

use rstest::{fixture, rstest};
use torrust_scrape_tracker_primitives::info_hash::InfoHash;
use torrust_scrape_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_scrape_tracker_primitives::{peer, PersistentTorrents};
use torrust_scrape_tracker_torrent_repository::repository::Repository;
use torrust_scrape_tracker_torrent_repository::TorrentsRwLockStd;

use crate::common::{a_leecher, a_seeder, another_info_hash, sample_info_hash, Upsert};

#[fixture]
fn standard() -> Box<dyn Repository> {
    Box::new(TorrentsRwLockStd::default())
}

type Upserts = Vec<Upsert>;

#[fixture]
fn empty() -> Upserts {
    vec![]
}

#[fixture]
fn one_leecher() -> Upserts {
    vec![a_leecher(sample_info_hash(), 1)]
}

#[fixture]
fn one_seeder() -> Upserts {
    vec![a_seeder(sample_info_hash(), 1)]
}

#[fixture]
fn downloaded() -> Upserts {
    vec![a_leecher(sample_info_hash(), 1), a_seeder(sample_info_hash(), 1)]
}

#[fixture]
fn two_torrents() -> Upserts {
    vec![
        a_seeder(sample_info_hash(), 1),
        a_seeder(sample_info_hash(), 2),
        a_leecher(another_info_hash(), 3),
    ]
}

fn make(repo: &dyn Repository, upserts: &Upserts) {
    for upsert in upserts {
        repo.upsert_peer(&upsert.info_hash, &upsert.peer_id, upsert.role).unwrap();
    }
}

/// The statistics the fixture should produce for each torrent.
fn expected(upserts: &Upserts) -> BTreeMap<InfoHash, SwarmMetadata> {
    let mut seeders: BTreeMap<InfoHash, BTreeMap<peer::Id, bool>> = BTreeMap::new();
    let mut downloaded: BTreeMap<InfoHash, u32> = BTreeMap::new();

    for upsert in upserts {
        let swarm = seeders.entry(upsert.info_hash).or_default();
        let is_seeder = matches!(upsert.role, torrust_scrape_tracker_torrent_repository::entry::PeerRole::Seeder);
        if let Some(false) = swarm.insert(upsert.peer_id, is_seeder) {
            if is_seeder {
                *downloaded.entry(upsert.info_hash).or_default() += 1;
            }
        }
    }

    seeders
        .into_iter()
        .map(|(info_hash, swarm)| {
            let complete = u32::try_from(swarm.values().filter(|is_seeder| **is_seeder).count()).unwrap();
            let incomplete = u32::try_from(swarm.len()).unwrap() - complete;
            let downloaded = downloaded.get(&info_hash).copied().unwrap_or_default();
            (info_hash, SwarmMetadata::new(complete, downloaded, incomplete))
        })
        .collect()
}

#[rstest]
#[case::empty(empty())]
#[case::one_leecher(one_leecher())]
#[case::one_seeder(one_seeder())]
#[case::downloaded(downloaded())]
#[case::two_torrents(two_torrents())]
fn it_should_find_the_swarm_metadata_of_every_tracked_torrent(
    #[values(standard())] repo: Box<dyn Repository>,
    #[case] upserts: Upserts,
) {
    make(repo.as_ref(), &upserts);

    let expected = expected(&upserts);

    assert_eq!(repo.len().unwrap(), expected.len());

    for (info_hash, metadata) in expected {
        assert_eq!(repo.find(&info_hash).unwrap(), Some(metadata));
    }
}

#[rstest]
#[case::empty(empty())]
#[case::one_leecher(one_leecher())]
#[case::two_torrents(two_torrents())]
fn it_should_not_find_a_torrent_that_is_not_tracked(
    #[values(standard())] repo: Box<dyn Repository>,
    #[case] upserts: Upserts,
) {
    make(repo.as_ref(), &upserts);

    assert_eq!(repo.find(&InfoHash([0xff; 20])).unwrap(), None);
}

#[rstest]
#[case::one_leecher(one_leecher())]
#[case::one_seeder(one_seeder())]
#[case::downloaded(downloaded())]
fn it_should_remove_a_peer_from_a_swarm(#[values(standard())] repo: Box<dyn Repository>, #[case] upserts: Upserts) {
    make(repo.as_ref(), &upserts);

    let metadata = repo.remove_peer(&sample_info_hash(), &peer::Id::from(1)).unwrap().unwrap();

    assert_eq!(metadata.complete, 0);
    assert_eq!(metadata.incomplete, 0);
}

#[rstest]
fn it_should_not_remove_a_peer_from_a_torrent_that_is_not_tracked(#[values(standard())] repo: Box<dyn Repository>) {
    assert_eq!(repo.remove_peer(&sample_info_hash(), &peer::Id::from(1)).unwrap(), None);
}

#[rstest]
#[case::empty(empty())]
#[case::downloaded(downloaded())]
#[case::two_torrents(two_torrents())]
fn it_should_remove_the_peerless_torrents(#[values(standard())] repo: Box<dyn Repository>, #[case] upserts: Upserts) {
    make(repo.as_ref(), &upserts);

    for upsert in &upserts {
        repo.remove_peer(&upsert.info_hash, &upsert.peer_id).unwrap();
    }

    let tracked = repo.len().unwrap();

    assert_eq!(repo.remove_peerless_torrents(false).unwrap(), tracked);
    assert!(repo.is_empty().unwrap());
}

#[rstest]
#[case::one_leecher(one_leecher())]
#[case::two_torrents(two_torrents())]
fn it_should_keep_the_torrents_with_peers(#[values(standard())] repo: Box<dyn Repository>, #[case] upserts: Upserts) {
    make(repo.as_ref(), &upserts);

    let tracked = repo.len().unwrap();

    assert_eq!(repo.remove_peerless_torrents(false).unwrap(), 0);
    assert_eq!(repo.len().unwrap(), tracked);
}

#[rstest]
fn it_should_keep_the_peerless_torrents_with_completed_downloads_when_asked_to(
    #[values(standard())] repo: Box<dyn Repository>,
) {
    make(repo.as_ref(), &downloaded());
    make(repo.as_ref(), &vec![a_leecher(another_info_hash(), 2)]);

    repo.remove_peer(&sample_info_hash(), &peer::Id::from(1)).unwrap();
    repo.remove_peer(&another_info_hash(), &peer::Id::from(2)).unwrap();

    assert_eq!(repo.remove_peerless_torrents(true).unwrap(), 1);
    assert_eq!(repo.find(&sample_info_hash()).unwrap(), Some(SwarmMetadata::new(0, 1, 0)));
    assert_eq!(repo.find(&another_info_hash()).unwrap(), None);
}

#[rstest]
fn it_should_keep_an_imported_counter_through_a_cleanup_that_keeps_completed_downloads(
    #[values(standard())] repo: Box<dyn Repository>,
) {
    let mut persistent_torrents = PersistentTorrents::default();
    persistent_torrents.insert(sample_info_hash(), 7);

    repo.import_persistent(&persistent_torrents).unwrap();

    assert_eq!(repo.remove_peerless_torrents(true).unwrap(), 0);
    assert_eq!(repo.remove_peerless_torrents(false).unwrap(), 1);
}

#[rstest]
#[case::empty(empty())]
#[case::one_seeder(one_seeder())]
fn it_should_import_the_persistent_torrents(#[values(standard())] repo: Box<dyn Repository>, #[case] upserts: Upserts) {
    make(repo.as_ref(), &upserts);

    let mut persistent_torrents = PersistentTorrents::default();
    persistent_torrents.insert(another_info_hash(), 42);

    repo.import_persistent(&persistent_torrents).unwrap();

    assert_eq!(repo.find(&another_info_hash()).unwrap(), Some(SwarmMetadata::new(0, 42, 0)));
}

#[rstest]
fn it_should_not_overwrite_a_tracked_torrent_when_importing(#[values(standard())] repo: Box<dyn Repository>) {
    make(repo.as_ref(), &downloaded());

    let mut persistent_torrents = PersistentTorrents::default();
    persistent_torrents.insert(sample_info_hash(), 42);

    repo.import_persistent(&persistent_torrents).unwrap();

    assert_eq!(repo.find(&sample_info_hash()).unwrap(), Some(SwarmMetadata::new(1, 1, 0)));
}
