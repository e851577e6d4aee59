use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::client_info;
use verscout_client::{ApiSettings, AttemptId, ClientEvent, ClientHandle, VersionEntry};
use verscout_core::{Msg, ScrapeRecord};

/// Executes scrape effects against the client and feeds completions back
/// into the message loop.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: ApiSettings) -> Self {
        let client = ClientHandle::new(settings);
        let runner = Self { client };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn start_scrape(&self, attempt: AttemptId, location: String) {
        client_info!(
            "StartScrape attempt={} location_len={} location={}",
            attempt,
            location.len(),
            location
        );
        self.client.scrape(attempt, location);
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                match event {
                    ClientEvent::ScrapeFinished { attempt, result } => {
                        let result = result
                            .map(|entries| entries.into_iter().map(map_entry).collect())
                            .map_err(|err| err.user_message());
                        let _ = msg_tx.send(Msg::ScrapeFinished { attempt, result });
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

// The wire field `url` becomes `source_url` internally.
fn map_entry(entry: VersionEntry) -> ScrapeRecord {
    ScrapeRecord {
        version: entry.version,
        date: entry.date,
        source_url: entry.url,
    }
}
