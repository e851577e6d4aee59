use crate::view_model::{AppViewModel, ResultsView, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};

pub type AttemptId = u64;

/// Sample location the input box starts out with.
pub const DEFAULT_LOCATION: &str = "https://www.dbf2002.com/news.html";

/// One extracted entry. Immutable once received; order is whatever the
/// extraction service returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRecord {
    pub version: String,
    pub date: String,
    pub source_url: String,
}

/// Discrete state of the current or most recent scrape attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Process-wide presentation mode. Deriving the palette from this single
/// value keeps the two modes mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    #[default]
    Light,
    Dark,
}

impl DisplayPreference {
    pub fn toggled(self) -> Self {
        match self {
            DisplayPreference::Light => DisplayPreference::Dark,
            DisplayPreference::Dark => DisplayPreference::Light,
        }
    }

    /// String form used by the persistent preference store.
    pub fn as_stored(self) -> &'static str {
        match self {
            DisplayPreference::Light => "light",
            DisplayPreference::Dark => "dark",
        }
    }

    /// Accepts only the exact stored forms; anything else is invalid and the
    /// caller falls back to the default.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(DisplayPreference::Light),
            "dark" => Some(DisplayPreference::Dark),
            _ => None,
        }
    }
}

/// The single mutable entity of the core.
///
/// Invariant: `records` and `error_message` are never both `Some`. Exactly
/// one of them is `Some` when `phase` is `Succeeded` or `Failed`, and
/// neither is when `phase` is `Idle` or `Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    location: String,
    phase: Phase,
    records: Option<Vec<ScrapeRecord>>,
    error_message: Option<String>,
    attempt: AttemptId,
    preference: DisplayPreference,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            phase: Phase::Idle,
            records: None,
            error_message: None,
            attempt: 0,
            preference: DisplayPreference::default(),
            dirty: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the rendering contract from the current state. Pure; total
    /// over all four phases.
    pub fn view(&self) -> AppViewModel {
        let busy = self.phase == Phase::Pending;
        let results = match self.phase {
            Phase::Idle | Phase::Pending => ResultsView::None,
            Phase::Succeeded => {
                let records = self.records.clone().unwrap_or_default();
                if records.is_empty() {
                    ResultsView::Empty
                } else {
                    ResultsView::Table(records)
                }
            }
            Phase::Failed => ResultsView::Error(self.error_message.clone().unwrap_or_default()),
        };

        AppViewModel {
            location: self.location.clone(),
            busy,
            submit_enabled: !busy,
            submit_label: if busy {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL_IDLE
            },
            results,
            preference: self.preference,
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Identifier of the most recently issued attempt; 0 before any submit.
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    pub fn preference(&self) -> DisplayPreference {
        self.preference
    }

    pub(crate) fn set_location(&mut self, text: String) {
        self.location = text;
        self.mark_dirty();
    }

    /// Starts a new attempt: Pending, both outcome fields cleared, a fresh
    /// attempt id. Stale in-flight responses fail the id check later.
    pub(crate) fn begin_attempt(&mut self) -> AttemptId {
        self.phase = Phase::Pending;
        self.records = None;
        self.error_message = None;
        self.attempt += 1;
        self.mark_dirty();
        self.attempt
    }

    pub(crate) fn complete(&mut self, records: Vec<ScrapeRecord>) {
        self.phase = Phase::Succeeded;
        self.records = Some(records);
        self.error_message = None;
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.phase = Phase::Failed;
        self.error_message = Some(message);
        self.records = None;
        self.mark_dirty();
    }

    pub(crate) fn set_preference(&mut self, preference: DisplayPreference) {
        self.preference = preference;
        self.mark_dirty();
    }

    pub(crate) fn toggle_preference(&mut self) -> DisplayPreference {
        self.preference = self.preference.toggled();
        self.mark_dirty();
        self.preference
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
