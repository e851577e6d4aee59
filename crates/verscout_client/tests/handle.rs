use std::time::{Duration, Instant};

use verscout_client::{ApiSettings, ClientEvent, ClientHandle};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn wait_for_event(handle: &ClientHandle) -> ClientEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "timed out waiting for completion");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn completions_are_tagged_with_their_attempt_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let handle = ClientHandle::new(ApiSettings {
        endpoint: format!("{}/scrape", server.uri()),
        ..ApiSettings::default()
    });
    handle.scrape(7, "https://example.com");

    let ClientEvent::ScrapeFinished { attempt, result } = wait_for_event(&handle).await;
    assert_eq!(attempt, 7);
    assert!(result.is_ok());
}
