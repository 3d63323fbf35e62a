/// Infohash params that can't be decoded into a 20-byte infohash.
#[allow(dead_code)]
pub fn invalid_info_hashes() -> Vec<String> {
    [
        "0".to_string(),
        "-1".to_string(),
        "1.1".to_string(),
        "INVALID INFOHASH".to_string(),
        "9c38422213e30bff212b30c360d26f9a021364".to_string(), // 19-byte infohash with 38 hex chars
        "9c38422213e30bff212b30c360d26f9a0213642".to_string(), // 39 hex chars
        "9c38422213e30bff212b30c360d26f9a021364225".to_string(), // 41 hex chars
    ]
    .to_vec()
}
