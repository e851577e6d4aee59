//! Verscout client: IO to the remote extraction endpoint.
mod api;
mod client;
mod types;

pub use api::{ApiSettings, HttpScrapeApi, ScrapeApi, DEFAULT_ENDPOINT};
pub use client::ClientHandle;
pub use types::{
    AttemptId, ClientEvent, FailureKind, ScrapeError, VersionEntry, UNKNOWN_ERROR,
};
