use crate::{AppState, DisplayPreference, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LocationChanged(text) => {
            state.set_location(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // No precondition on the location content: empty or malformed
            // strings are forwarded as-is and the extraction service rejects
            // what it cannot process. Overlapping submits are allowed; the
            // attempt id decides which response may land.
            let attempt = state.begin_attempt();
            vec![Effect::StartScrape {
                attempt,
                location: state.location().to_owned(),
            }]
        }
        Msg::ScrapeFinished { attempt, result } => {
            if attempt != state.attempt() {
                // Response from an overwritten attempt: the last-issued
                // submission wins, so this one is dropped silently.
                return (state, Vec::new());
            }
            match result {
                Ok(records) => state.complete(records),
                Err(message) => state.fail(message),
            }
            Vec::new()
        }
        Msg::PreferenceRestored(raw) => {
            let preference = raw
                .as_deref()
                .and_then(DisplayPreference::from_stored)
                .unwrap_or_default();
            // Fallback adoption does not write storage back; only an
            // explicit toggle persists.
            state.set_preference(preference);
            Vec::new()
        }
        Msg::PreferenceToggled => {
            let preference = state.toggle_preference();
            vec![Effect::PersistPreference { preference }]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
