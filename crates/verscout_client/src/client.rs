use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use client_logging::{client_info, client_warn};

use crate::api::{ApiSettings, HttpScrapeApi, ScrapeApi};
use crate::{AttemptId, ClientEvent};

enum ClientCommand {
    Scrape {
        attempt: AttemptId,
        location: String,
    },
}

/// Bridge between the synchronous app loop and the async HTTP client.
///
/// A dedicated thread owns the tokio runtime; commands cross a channel and
/// each scrape runs as an independent task, so overlapping attempts really
/// do race. Completions come back tagged with their attempt id and the state
/// machine decides which one may land.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(settings: ApiSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(HttpScrapeApi::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn scrape(&self, attempt: AttemptId, location: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Scrape {
            attempt,
            location: location.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    api: &dyn ScrapeApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Scrape { attempt, location } => {
            client_info!("scrape attempt={} location={}", attempt, location);
            let result = api.scrape(&location).await;
            match &result {
                Ok(entries) => {
                    client_info!("scrape attempt={} ok, {} entries", attempt, entries.len());
                }
                Err(err) => {
                    client_warn!("scrape attempt={} failed: {}", attempt, err);
                }
            }
            let _ = event_tx.send(ClientEvent::ScrapeFinished { attempt, result });
        }
    }
}
