#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the target location input box.
    LocationChanged(String),
    /// User submitted the current location for extraction.
    SubmitClicked,
    /// Client completion for a scrape attempt. The error side is the
    /// already-rendered operator message; the taxonomy lives in the client.
    ScrapeFinished {
        attempt: crate::AttemptId,
        result: Result<Vec<crate::ScrapeRecord>, String>,
    },
    /// Raw stored display preference read back at startup.
    PreferenceRestored(Option<String>),
    /// User toggled the display preference.
    PreferenceToggled,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
