use std::time::Duration;

use pretty_assertions::assert_eq;
use verscout_client::{
    ApiSettings, FailureKind, HttpScrapeApi, ScrapeApi, VersionEntry, UNKNOWN_ERROR,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings {
        endpoint: format!("{}/scrape", server.uri()),
        ..ApiSettings::default()
    }
}

#[tokio::test]
async fn success_payload_parses_in_wire_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scrape"))
        .and(query_param("url", "https://dbf2002.com/news.html"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"version": "5.0", "date": "2021-01-01", "url": "https://x.test"},
            {"version": "4.9", "date": "2020-10-20", "url": "https://y.test"}
        ])))
        .mount(&server)
        .await;

    let api = HttpScrapeApi::new(settings_for(&server));
    let entries = api
        .scrape("https://dbf2002.com/news.html")
        .await
        .expect("scrape ok");

    assert_eq!(
        entries,
        vec![
            VersionEntry {
                version: "5.0".to_string(),
                date: "2021-01-01".to_string(),
                url: "https://x.test".to_string(),
            },
            VersionEntry {
                version: "4.9".to_string(),
                date: "2020-10-20".to_string(),
                url: "https://y.test".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn location_is_url_escaped_into_the_query() {
    let server = MockServer::start().await;
    // The matcher compares decoded values, so a hit proves the raw location
    // (spaces, '&', '?') survived escaping intact.
    Mock::given(method("GET"))
        .and(path("/scrape"))
        .and(query_param("url", "https://example.com/a page?x=1&y=2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let api = HttpScrapeApi::new(settings_for(&server));
    let entries = api
        .scrape("https://example.com/a page?x=1&y=2")
        .await
        .expect("scrape ok");
    assert_eq!(entries, Vec::<VersionEntry>::new());
}

#[tokio::test]
async fn empty_sequence_is_a_valid_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scrape"))
        .and(query_param("url", "https://example.com/empty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let api = HttpScrapeApi::new(settings_for(&server));
    let entries = api
        .scrape("https://example.com/empty")
        .await
        .expect("scrape ok");

    assert_eq!(entries, Vec::<VersionEntry>::new());
}

#[tokio::test]
async fn rejection_with_detail_surfaces_it_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scrape"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"detail": "unreachable host"})),
        )
        .mount(&server)
        .await;

    let api = HttpScrapeApi::new(settings_for(&server));
    let err = api.scrape("https://example.com").await.unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::Rejected {
            status: 500,
            detail: Some("unreachable host".to_string()),
        }
    );
    assert_eq!(err.user_message(), "unreachable host");
}

#[tokio::test]
async fn rejection_without_detail_references_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let api = HttpScrapeApi::new(settings_for(&server));
    let err = api.scrape("https://example.com").await.unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::Rejected {
            status: 502,
            detail: None,
        }
    );
    assert_eq!(err.user_message(), "HTTP error! status: 502");
}

#[tokio::test]
async fn unparsable_success_body_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let api = HttpScrapeApi::new(settings_for(&server));
    let err = api.scrape("https://example.com").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidBody);
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn connection_failure_maps_to_network() {
    // An exclusive (non-pooled) server: dropping it closes the port, whereas
    // `MockServer::start()` returns the listener to a pool that keeps serving.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let server = MockServer::builder().listener(listener).start().await;
    let settings = settings_for(&server);
    drop(server); // nothing listens on that port anymore

    let api = HttpScrapeApi::new(settings);
    let err = api.scrape("https://example.com").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
    assert!(!err.user_message().is_empty());
    assert_ne!(err.user_message(), UNKNOWN_ERROR);
}

#[tokio::test]
async fn configured_timeout_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scrape"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!([])),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..settings_for(&server)
    };
    let api = HttpScrapeApi::new(settings);
    let err = api.scrape("https://example.com").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}
