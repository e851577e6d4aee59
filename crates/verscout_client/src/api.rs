use std::time::Duration;

use serde::Deserialize;

use crate::{FailureKind, ScrapeError, VersionEntry};

/// Default location of the extraction service's scrape operation.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/scrape";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Full URL of the scrape operation, e.g. `http://localhost:8000/scrape`.
    pub endpoint: String,
    pub connect_timeout: Option<Duration>,
    /// `None` waits indefinitely: a hung service keeps the attempt pending,
    /// which is the documented default. Set for the opt-in timeout.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// Failure payload shape: `{"detail": "..."}`, all fields optional.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    detail: Option<String>,
}

#[async_trait::async_trait]
pub trait ScrapeApi: Send + Sync {
    /// One request for the given target location, forwarded as-is.
    async fn scrape(&self, location: &str) -> Result<Vec<VersionEntry>, ScrapeError>;
}

#[derive(Debug, Clone)]
pub struct HttpScrapeApi {
    settings: ApiSettings,
}

impl HttpScrapeApi {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ScrapeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| ScrapeError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ScrapeApi for HttpScrapeApi {
    async fn scrape(&self, location: &str) -> Result<Vec<VersionEntry>, ScrapeError> {
        let client = self.build_client()?;

        // The location travels as the URL-escaped `url` query parameter.
        let response = client
            .get(&self.settings.endpoint)
            .query(&[("url", location)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<RejectionBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(ScrapeError::new(
                FailureKind::Rejected {
                    status: status.as_u16(),
                    detail,
                },
                status.to_string(),
            ));
        }

        response
            .json::<Vec<VersionEntry>>()
            .await
            .map_err(|err| ScrapeError::new(FailureKind::InvalidBody, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ScrapeError {
    if err.is_timeout() {
        return ScrapeError::new(FailureKind::Timeout, err.to_string());
    }
    ScrapeError::new(FailureKind::Network, err.to_string())
}
