use crate::{DisplayPreference, ScrapeRecord};

pub const SUBMIT_LABEL_IDLE: &str = "Scrape Data";
pub const SUBMIT_LABEL_BUSY: &str = "Scraping...";

/// Everything the presentation layer needs, derived from `AppState` with no
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub location: String,
    pub busy: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub results: ResultsView,
    pub preference: DisplayPreference,
    pub dirty: bool,
}

/// At most one of table, no-data notice, or error notice is shown per the
/// rendering contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Idle, or Pending with no prior result: neither table nor notices.
    None,
    /// One row per record, extraction order preserved.
    Table(Vec<ScrapeRecord>),
    /// Succeeded with zero records; distinct from the error notice.
    Empty,
    /// Failed, with the operator-facing message.
    Error(String),
}
