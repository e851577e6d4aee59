use std::sync::Once;

use verscout_core::{update, AppState, DisplayPreference, Effect, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

#[test]
fn startup_without_stored_value_yields_light() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::PreferenceRestored(None));

    assert_eq!(state.preference(), DisplayPreference::Light);
    // Fallback adoption must not write storage back.
    assert!(effects.is_empty());
}

#[test]
fn startup_with_stored_dark_yields_dark() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::PreferenceRestored(Some("dark".to_string())),
    );

    assert_eq!(state.preference(), DisplayPreference::Dark);
    assert!(effects.is_empty());
}

#[test]
fn startup_with_invalid_stored_value_yields_light() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::PreferenceRestored(Some("blue".to_string())),
    );

    assert_eq!(state.preference(), DisplayPreference::Light);
    assert!(effects.is_empty());
}

#[test]
fn toggle_flips_and_persists_the_new_value() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::PreferenceToggled);

    assert_eq!(state.preference(), DisplayPreference::Dark);
    // The persisted value matches the in-memory value.
    assert_eq!(
        effects,
        vec![Effect::PersistPreference {
            preference: DisplayPreference::Dark,
        }]
    );
}

#[test]
fn double_toggle_returns_to_original() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PreferenceToggled);
    let (state, effects) = update(state, Msg::PreferenceToggled);

    assert_eq!(state.preference(), DisplayPreference::Light);
    assert_eq!(
        effects,
        vec![Effect::PersistPreference {
            preference: DisplayPreference::Light,
        }]
    );
}

#[test]
fn toggle_marks_view_dirty_for_immediate_application() {
    init_logging();
    let mut state = AppState::new();
    let _ = state.consume_dirty();

    let (mut state, _) = update(state, Msg::PreferenceToggled);
    assert!(state.consume_dirty());
    assert_eq!(state.view().preference, DisplayPreference::Dark);
}

#[test]
fn stored_forms_round_trip() {
    assert_eq!(DisplayPreference::Light.as_stored(), "light");
    assert_eq!(DisplayPreference::Dark.as_stored(), "dark");
    assert_eq!(
        DisplayPreference::from_stored("light"),
        Some(DisplayPreference::Light)
    );
    assert_eq!(
        DisplayPreference::from_stored("dark"),
        Some(DisplayPreference::Dark)
    );
    assert_eq!(DisplayPreference::from_stored("Dark"), None);
    assert_eq!(DisplayPreference::from_stored(""), None);
}
