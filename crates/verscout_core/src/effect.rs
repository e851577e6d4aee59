#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartScrape {
        attempt: crate::AttemptId,
        location: String,
    },
    PersistPreference {
        preference: crate::DisplayPreference,
    },
}
