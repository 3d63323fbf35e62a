use std::panic::Location;

use reqwest::Response;
use serde::Deserialize;

/// The bencoded error body the tracker sends when a request fails.
#[derive(Deserialize, Debug)]
pub struct Error {
    #[serde(rename = "failure reason")]
    pub failure_reason: String,
}

pub fn assert_bencoded_error(response_text: &String, expected_failure_reason: &str, location: &'static Location<'static>) {
    let error_failure_reason = serde_bencode::from_str::<Error>(response_text)
        .unwrap_or_else(|_| {
            panic!(
                "response body should be a valid bencoded string for the '{expected_failure_reason}' error, got \"{response_text}\""
            )
        })
        .failure_reason;

    assert!(
        error_failure_reason.contains(expected_failure_reason),
        r#":
  response: `"{error_failure_reason}"`
  does not contain: `"{expected_failure_reason}"`, {location}"#
    );
}

/// Sample bencoded scrape response as byte array:
///
/// ```text
/// b"d5:filesd20:\x9c8B\"\x13\xe3\x0b\xff!+0\xc3`\xd2o\x9a\x02\x13d\"d8:completei1e10:downloadedi0e10:incompletei0eeee"
/// ```
pub async fn assert_scrape_response(response: Response, expected_body: &[u8]) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/plain");
    assert_eq!(response.headers().get("connection").unwrap(), "close");

    let body = response.bytes().await.unwrap();

    assert_eq!(
        &body[..],
        expected_body,
        "unexpected scrape response body: {:?}",
        String::from_utf8_lossy(&body)
    );
}

pub async fn assert_empty_scrape_response(response: Response) {
    assert_scrape_response(response, b"d5:filesdee").await; // cspell:disable-line
}

// Error responses

pub async fn assert_cannot_parse_query_params_error_response(response: Response, failure: &str) {
    assert_eq!(response.status(), 200);

    assert_bencoded_error(
        &response.text().await.unwrap(),
        &format!("Cannot parse query params{failure}"),
        Location::caller(),
    );
}

pub async fn assert_authentication_error_response(response: Response) {
    assert_eq!(response.status(), 200);

    assert_bencoded_error(&response.text().await.unwrap(), "Authentication error", Location::caller());
}

pub async fn assert_missing_authentication_key_error_response(response: Response) {
    assert_eq!(response.status(), 200);

    assert_bencoded_error(
        &response.text().await.unwrap(),
        "Authentication error: Missing authentication key param for private tracker",
        Location::caller(),
    );
}

pub async fn assert_invalid_authentication_key_error_response(response: Response) {
    assert_eq!(response.status(), 200);

    assert_bencoded_error(
        &response.text().await.unwrap(),
        "Authentication error: Invalid format for authentication key param",
        Location::caller(),
    );
}
