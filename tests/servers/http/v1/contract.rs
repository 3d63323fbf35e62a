use torrust_scrape_tracker_test_helpers::configuration;

use crate::servers::http::Started;

#[tokio::test]
async fn environment_should_be_started_and_stopped() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    env.stop().await;
}

mod for_all_config_modes {

    use torrust_scrape_tracker::servers::http::v1::handlers::health_check::{Report, Status};
    use torrust_scrape_tracker_test_helpers::configuration;
    use tracing::level_filters::LevelFilter;

    use crate::common::logging::{tracing_stderr_init, INIT};
    use crate::servers::http::client::Client;
    use crate::servers::http::Started;

    #[tokio::test]
    async fn health_check_endpoint_should_return_ok_if_the_http_tracker_is_running() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(*env.bind_address()).health_check().await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

        let report: Report = serde_json::from_str(&response.text().await.unwrap()).unwrap();

        assert_eq!(report, Report { status: Status::Ok });

        env.stop().await;
    }

    #[tokio::test]
    async fn it_should_propagate_the_request_id_header() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(*env.bind_address()).health_check().await;

        assert!(response.headers().get("x-request-id").is_some());

        env.stop().await;
    }
}

mod configured_as_public {

    mod receiving_an_scrape_request {

        // Scrape documentation:
        //
        // BEP 48. Tracker Protocol Extension: Scrape
        // https://www.bittorrent.org/beps/bep_0048.html
        //
        // Vuze (bittorrent client) docs:
        // https://wiki.vuze.com/w/Scrape

        use std::str::FromStr;

        use torrust_scrape_tracker::core::auth;
        use torrust_scrape_tracker_primitives::info_hash::InfoHash;
        use torrust_scrape_tracker_primitives::peer;
        use torrust_scrape_tracker_test_helpers::configuration;
        use torrust_scrape_tracker_torrent_repository::entry::PeerRole;
        use tracing::level_filters::LevelFilter;

        use crate::common::fixtures::invalid_info_hashes;
        use crate::common::logging::{tracing_stderr_init, INIT};
        use crate::servers::http::asserts::{
            assert_cannot_parse_query_params_error_response, assert_empty_scrape_response,
            assert_invalid_authentication_key_error_response, assert_scrape_response,
        };
        use crate::servers::http::client::Client;
        use crate::servers::http::{percent_encode_byte_array, Started};

        fn expected_file(info_hash: &InfoHash, stats: &[u8]) -> Vec<u8> {
            [b"20:".to_vec(), info_hash.bytes().to_vec(), stats.to_vec()].concat()
        }

        fn envelope(files: &[Vec<u8>]) -> Vec<u8> {
            [b"d5:filesd".to_vec(), files.concat(), b"ee".to_vec()].concat()
        }

        #[tokio::test]
        async fn should_return_an_empty_response_when_the_request_has_no_query() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let response = Client::new(*env.bind_address()).get("scrape").await;

            assert_empty_scrape_response(response).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_return_an_empty_response_when_the_query_has_no_info_hash() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let response = Client::new(*env.bind_address()).get("scrape?other=value").await;

            assert_empty_scrape_response(response).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_when_url_query_parameters_are_invalid() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let response = Client::new(*env.bind_address()).get("scrape?param=value=value").await;

            assert_cannot_parse_query_params_error_response(response, ": invalid param param=value=value").await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_return_an_empty_response_when_the_info_hash_param_is_invalid() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            for invalid_value in &invalid_info_hashes() {
                let response = Client::new(*env.bind_address())
                    .get(&format!("scrape?info_hash={invalid_value}"))
                    .await;

                assert_empty_scrape_response(response).await;
            }

            env.stop().await;
        }

        #[tokio::test]
        async fn should_skip_the_invalid_infohashes_and_answer_the_valid_ones() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let info_hash = InfoHash::from_str("9c38422213e30bff212b30c360d26f9a02136422").unwrap(); // DevSkim: ignore DS173237

            env.add_torrent_peer(&info_hash, &peer::Id::from(1), PeerRole::Seeder);

            let response = Client::new(*env.bind_address())
                .get(&format!(
                    "scrape?info_hash=SHORT&info_hash={}&info_hash=",
                    percent_encode_byte_array(&info_hash.bytes())
                ))
                .await;

            let expected = envelope(&[expected_file(
                &info_hash,
                b"d8:completei1e10:downloadedi0e10:incompletei0ee", // cspell:disable-line
            )]);

            assert_scrape_response(response, &expected).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_return_an_empty_response_for_a_torrent_the_tracker_does_not_know() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let info_hash = InfoHash::from_str("9c38422213e30bff212b30c360d26f9a02136422").unwrap(); // DevSkim: ignore DS173237

            let response = Client::new(*env.bind_address()).scrape(&[info_hash]).await;

            assert_empty_scrape_response(response).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_return_the_file_with_the_incomplete_peer_when_there_is_one_peer_with_bytes_pending_to_download() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let info_hash = InfoHash::from_str("9c38422213e30bff212b30c360d26f9a02136422").unwrap(); // DevSkim: ignore DS173237

            env.add_torrent_peer(&info_hash, &peer::Id::from(1), PeerRole::Leecher);

            let response = Client::new(*env.bind_address()).scrape(&[info_hash]).await;

            let expected = envelope(&[expected_file(
                &info_hash,
                b"d8:completei0e10:downloadedi0e10:incompletei1ee", // cspell:disable-line
            )]);

            assert_scrape_response(response, &expected).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_count_a_leecher_that_becomes_a_seeder_as_a_completed_download() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let info_hash = InfoHash::from_str("9c38422213e30bff212b30c360d26f9a02136422").unwrap(); // DevSkim: ignore DS173237

            env.add_torrent_peer(&info_hash, &peer::Id::from(1), PeerRole::Leecher);
            env.add_torrent_peer(&info_hash, &peer::Id::from(1), PeerRole::Seeder);

            let response = Client::new(*env.bind_address()).scrape(&[info_hash]).await;

            let expected = envelope(&[expected_file(
                &info_hash,
                b"d8:completei1e10:downloadedi1e10:incompletei0ee", // cspell:disable-line
            )]);

            assert_scrape_response(response, &expected).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_accept_multiple_infohashes_and_skip_the_unknown_ones() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let info_hash1 = InfoHash::from_str("9c38422213e30bff212b30c360d26f9a02136422").unwrap(); // DevSkim: ignore DS173237
            let info_hash2 = InfoHash::from_str("3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0").unwrap(); // DevSkim: ignore DS173237
            let unknown = InfoHash::from_str("0000000000000000000000000000000000000001").unwrap(); // DevSkim: ignore DS173237

            env.add_torrent_peer(&info_hash1, &peer::Id::from(1), PeerRole::Seeder);
            env.add_torrent_peer(&info_hash2, &peer::Id::from(2), PeerRole::Leecher);

            let response = Client::new(*env.bind_address())
                .scrape(&[info_hash2, unknown, info_hash1])
                .await;

            let expected = envelope(&[
                expected_file(&info_hash2, b"d8:completei0e10:downloadedi0e10:incompletei1ee"), // cspell:disable-line
                expected_file(&info_hash1, b"d8:completei1e10:downloadedi0e10:incompletei0ee"), // cspell:disable-line
            ]);

            assert_scrape_response(response, &expected).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_repeat_a_file_when_the_same_infohash_is_requested_twice() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let info_hash = InfoHash::from_str("9c38422213e30bff212b30c360d26f9a02136422").unwrap(); // DevSkim: ignore DS173237

            env.add_torrent_peer(&info_hash, &peer::Id::from(1), PeerRole::Seeder);

            let response = Client::new(*env.bind_address()).scrape(&[info_hash, info_hash]).await;

            let file = expected_file(&info_hash, b"d8:completei1e10:downloadedi0e10:incompletei0ee"); // cspell:disable-line

            assert_scrape_response(response, &envelope(&[file.clone(), file])).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_ignore_a_well_formed_authentication_key() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let response = Client::authenticated(*env.bind_address(), auth::generate()).scrape(&[]).await;

            assert_empty_scrape_response(response).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_reject_a_malformed_authentication_key() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_public().into()).await;

            let response = Client::new(*env.bind_address()).get("scrape/INVALID_KEY").await;

            assert_invalid_authentication_key_error_response(response).await;

            env.stop().await;
        }
    }
}

mod configured_as_private {

    mod and_receiving_an_scrape_request {
        use std::str::FromStr;

        use torrust_scrape_tracker::core::auth::Key;
        use torrust_scrape_tracker_primitives::info_hash::InfoHash;
        use torrust_scrape_tracker_primitives::peer;
        use torrust_scrape_tracker_test_helpers::configuration;
        use torrust_scrape_tracker_torrent_repository::entry::PeerRole;
        use tracing::level_filters::LevelFilter;

        use crate::common::logging::{tracing_stderr_init, INIT};
        use crate::servers::http::asserts::{
            assert_authentication_error_response, assert_empty_scrape_response, assert_missing_authentication_key_error_response,
            assert_scrape_response,
        };
        use crate::servers::http::client::Client;
        use crate::servers::http::Started;

        #[tokio::test]
        async fn should_respond_to_authenticated_peers() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let config = configuration::ephemeral_private();
            let key = Key::from_str(&config.core.auth_keys[0]).unwrap();

            let env = Started::new(&config.into()).await;

            let info_hash = InfoHash::from_str("9c38422213e30bff212b30c360d26f9a02136422").unwrap(); // DevSkim: ignore DS173237

            env.add_torrent_peer(&info_hash, &peer::Id::from(1), PeerRole::Seeder);

            let response = Client::authenticated(*env.bind_address(), key).scrape(&[info_hash]).await;

            let expected = [
                b"d5:filesd20:".to_vec(),
                info_hash.bytes().to_vec(),
                b"d8:completei1e10:downloadedi0e10:incompletei0eeee".to_vec(), // cspell:disable-line
            ]
            .concat();

            assert_scrape_response(response, &expected).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_accept_a_key_registered_while_running() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_private().into()).await;

            let key = env.tracker.generate_auth_key().await;

            let response = Client::authenticated(*env.bind_address(), key).scrape(&[]).await;

            assert_empty_scrape_response(response).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_if_the_key_is_missing() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_private().into()).await;

            let info_hash = InfoHash::from_str("9c38422213e30bff212b30c360d26f9a02136422").unwrap(); // DevSkim: ignore DS173237

            let response = Client::new(*env.bind_address()).scrape(&[info_hash]).await;

            assert_missing_authentication_key_error_response(response).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_if_the_key_is_not_registered() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_private().into()).await;

            // The key is not registered
            let false_key: Key = "YZSl4lMZupRuOpSRC3krIKR5BPB14nrJ".parse().unwrap();

            let response = Client::authenticated(*env.bind_address(), false_key).scrape(&[]).await;

            assert_authentication_error_response(response).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_if_the_key_was_removed() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let config = configuration::ephemeral_private();
            let key = Key::from_str(&config.core.auth_keys[0]).unwrap();

            let env = Started::new(&config.into()).await;

            assert!(env.tracker.remove_key(&key).await);

            let response = Client::authenticated(*env.bind_address(), key).scrape(&[]).await;

            assert_authentication_error_response(response).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_check_the_key_before_the_query() {
            INIT.call_once(|| {
                tracing_stderr_init(LevelFilter::ERROR);
            });

            let env = Started::new(&configuration::ephemeral_private().into()).await;

            let response = Client::new(*env.bind_address()).get("scrape?info_hash=a=b").await;

            assert_missing_authentication_key_error_response(response).await;

            env.stop().await;
        }
    }
}
