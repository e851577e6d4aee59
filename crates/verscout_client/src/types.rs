use std::fmt;

use serde::Deserialize;
use thiserror::Error;

pub type AttemptId = u64;

/// Fallback text when a transport failure carries no description of its own.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// One wire entry of the extraction service's success payload. Field
/// contents are passed through untouched; in particular `url` is not parsed
/// or validated here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionEntry {
    pub version: String,
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    ScrapeFinished {
        attempt: AttemptId,
        result: Result<Vec<VersionEntry>, ScrapeError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ScrapeError {
    pub kind: FailureKind,
    pub message: String,
}

impl ScrapeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The text shown to the operator.
    ///
    /// A structured rejection reason is surfaced verbatim; a rejection
    /// without one references the raw status; everything else falls back to
    /// the underlying failure's description or the generic unknown-error
    /// text.
    pub fn user_message(&self) -> String {
        match &self.kind {
            FailureKind::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            FailureKind::Rejected {
                status,
                detail: None,
            } => format!("HTTP error! status: {status}"),
            _ => {
                if self.message.is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    self.message.clone()
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The service signalled failure; `detail` is its structured reason if
    /// the body carried one.
    Rejected { status: u16, detail: Option<String> },
    /// Success status but the body did not parse as the expected sequence.
    InvalidBody,
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Rejected { status, .. } => write!(f, "rejected with http status {status}"),
            FailureKind::InvalidBody => write!(f, "invalid response body"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
